//! Output format value object

use crate::chat::entities::ChatLog;
use crate::chat::render::{render_markdown, render_text};
use std::fmt;

/// Format of an exported chat log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatFormat {
    /// Plain text (`.txt`)
    Text,
    /// Markdown (`.md`)
    Markdown,
}

impl ChatFormat {
    /// File extension, without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            ChatFormat::Text => "txt",
            ChatFormat::Markdown => "md",
        }
    }

    /// Short upper-case label used in console messages
    pub fn label(&self) -> &'static str {
        match self {
            ChatFormat::Text => "TXT",
            ChatFormat::Markdown => "MD",
        }
    }

    pub fn render(&self, log: &ChatLog) -> String {
        match self {
            ChatFormat::Text => render_text(log),
            ChatFormat::Markdown => render_markdown(log),
        }
    }
}

impl fmt::Display for ChatFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
