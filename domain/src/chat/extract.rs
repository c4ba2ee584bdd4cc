//! Chat entry extraction from a saved Google Meet chat panel.
//!
//! The export is not parsed as a document. Each chat entry is located by the
//! fixed class names the Meet UI renders around it:
//!
//! ```text
//! <div class="nMcdL bj4p3b">            entry container
//!   ... <span class="NWpY1d">SPEAKER</span>
//!   ... <div class="ygicle VbkSUe">MESSAGE</div>
//! ... </div>
//! ```
//!
//! Every gap and both captures are lazy and may span line breaks, so a match
//! stops at the first closing boundary instead of running into the next entry.
//! A message that itself contains a literal `</div>` is cut short there.

use super::entities::{ChatEntry, ChatLog};
use regex::Regex;
use std::sync::LazyLock;

/// Class pair on the container of a single chat entry
const ENTRY_CONTAINER: &str = r#"<div class="nMcdL bj4p3b">"#;

/// Class on the span holding the speaker's display name
const SPEAKER_SPAN: &str = r#"<span class="NWpY1d">"#;

/// Class pair on the div holding the message body
const MESSAGE_DIV: &str = r#"<div class="ygicle VbkSUe">"#;

static ENTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        "(?s){}.*?{}(.*?)</span>.*?{}(.*?)</div>.*?</div>",
        regex::escape(ENTRY_CONTAINER),
        regex::escape(SPEAKER_SPAN),
        regex::escape(MESSAGE_DIV),
    );
    Regex::new(&pattern).expect("chat entry pattern is a valid regex")
});

/// Extract every chat entry from raw HTML text.
///
/// Matches are found left to right without overlap. Speaker and message are
/// trimmed; everything else (inline markup, entities, `": "` sequences) is
/// passed through verbatim. Text without any entry yields an empty log.
pub fn extract_chat_log(html: &str) -> ChatLog {
    ENTRY_PATTERN
        .captures_iter(html)
        .map(|caps| {
            let speaker = trim_capture(caps.get(1).map_or("", |m| m.as_str()));
            let message = trim_capture(caps.get(2).map_or("", |m| m.as_str()));
            ChatEntry::new(speaker, message)
        })
        .collect()
}

/// Trim whitespace and byte order marks from a captured region
fn trim_capture(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
