//! Chat log entities

/// A single chat message attributed to a speaker.
///
/// Duplicate speakers and repeated messages are perfectly valid; empty
/// strings are kept as they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub speaker: String,
    pub message: String,
}

impl ChatEntry {
    pub fn new(speaker: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            message: message.into(),
        }
    }
}

/// Every chat entry of one document, in the order they appear in it.
///
/// Built once per run and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
}

impl ChatLog {
    pub fn new(entries: Vec<ChatEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<ChatEntry>> for ChatLog {
    fn from(entries: Vec<ChatEntry>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<ChatEntry> for ChatLog {
    fn from_iter<I: IntoIterator<Item = ChatEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ChatLog {
    type Item = &'a ChatEntry;
    type IntoIter = std::slice::Iter<'a, ChatEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ChatLog {
    type Item = ChatEntry;
    type IntoIter = std::vec::IntoIter<ChatEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
