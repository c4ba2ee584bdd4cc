//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use transcripty_application::ExportSettings;
use transcripty_domain::{DEFAULT_SUFFIX, OutputTargets};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Appended to the input file stem when no `--output` is given
    pub suffix: String,
    /// Write `<base>.txt` unless `--txt-only`/`--md-only` narrows the selection
    pub txt: bool,
    /// Write `<base>.md` unless `--txt-only`/`--md-only` narrows the selection
    pub md: bool,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            txt: true,
            md: true,
            color: true,
        }
    }
}

impl FileOutputConfig {
    pub fn targets(&self) -> OutputTargets {
        OutputTargets {
            text: self.txt,
            markdown: self.md,
        }
    }

    pub fn to_export_settings(&self) -> ExportSettings {
        ExportSettings {
            suffix: self.suffix.clone(),
            targets: self.targets(),
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.targets().is_empty() {
            issues.push(
                "output.txt and output.md are both false: no files will be written unless --txt-only or --md-only is given"
                    .to_string(),
            );
        }

        if self.suffix.contains(['/', '\\']) {
            issues.push(format!(
                "output.suffix '{}' contains a path separator",
                self.suffix
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_both() {
        assert_eq!(FileOutputConfig::default().targets(), OutputTargets::both());
    }

    #[test]
    fn test_validate_all_disabled() {
        let config = FileOutputConfig {
            txt: false,
            md: false,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("both false"));
    }

    #[test]
    fn test_validate_suffix_with_separator() {
        let config = FileOutputConfig {
            suffix: "/chat".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate().len(), 1);
    }
}
