//! Selection of output formats for a run

use super::format::ChatFormat;

/// Which formats a run writes.
///
/// Formats are always written in the order text, then Markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputTargets {
    pub text: bool,
    pub markdown: bool,
}

impl Default for OutputTargets {
    fn default() -> Self {
        Self::both()
    }
}

impl OutputTargets {
    pub fn both() -> Self {
        Self {
            text: true,
            markdown: true,
        }
    }

    pub fn text_only() -> Self {
        Self {
            text: true,
            markdown: false,
        }
    }

    pub fn markdown_only() -> Self {
        Self {
            text: false,
            markdown: true,
        }
    }

    /// Interpret the `--txt-only` / `--md-only` flag pair.
    ///
    /// Returns `None` when the flags do not narrow the selection: neither is
    /// set, or both are. Setting both is tolerated and suppresses nothing.
    pub fn from_flags(txt_only: bool, md_only: bool) -> Option<Self> {
        match (txt_only, md_only) {
            (true, false) => Some(Self::text_only()),
            (false, true) => Some(Self::markdown_only()),
            _ => None,
        }
    }

    pub fn includes(&self, format: ChatFormat) -> bool {
        match format {
            ChatFormat::Text => self.text,
            ChatFormat::Markdown => self.markdown,
        }
    }

    /// Selected formats in write order
    pub fn formats(&self) -> Vec<ChatFormat> {
        [ChatFormat::Text, ChatFormat::Markdown]
            .into_iter()
            .filter(|format| self.includes(*format))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        !self.text && !self.markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_writes_both_in_order() {
        assert_eq!(
            OutputTargets::default().formats(),
            vec![ChatFormat::Text, ChatFormat::Markdown]
        );
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(OutputTargets::from_flags(false, false), None);
        assert_eq!(
            OutputTargets::from_flags(true, false),
            Some(OutputTargets::text_only())
        );
        assert_eq!(
            OutputTargets::from_flags(false, true),
            Some(OutputTargets::markdown_only())
        );
    }

    #[test]
    fn test_both_flags_suppress_nothing() {
        assert_eq!(OutputTargets::from_flags(true, true), None);
    }

    #[test]
    fn test_includes() {
        let targets = OutputTargets::markdown_only();
        assert!(!targets.includes(ChatFormat::Text));
        assert!(targets.includes(ChatFormat::Markdown));
        assert_eq!(targets.formats(), vec![ChatFormat::Markdown]);
    }

    #[test]
    fn test_is_empty() {
        assert!(
            OutputTargets {
                text: false,
                markdown: false
            }
            .is_empty()
        );
        assert!(!OutputTargets::text_only().is_empty());
    }
}
