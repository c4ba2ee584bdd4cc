//! Plain text and Markdown rendering of a chat log.
//!
//! The plain text form is meant for people to read. It joins speaker and
//! message with `": "`, so it is not a re-ingestable interchange format:
//! splitting a line on the first `": "` cannot tell a speaker that contains
//! the delimiter from a message that starts with it.

use super::entities::{ChatEntry, ChatLog};

/// First line of every Markdown export
pub const MARKDOWN_HEADING: &str = "# Google Meet Chat Log";

/// Separator between rendered entries (one blank line)
const ENTRY_SEPARATOR: &str = "\n\n";

/// Render entries as `Speaker: message`, separated by blank lines.
pub fn render_text(log: &ChatLog) -> String {
    join_entries(log, |entry| format!("{}: {}", entry.speaker, entry.message))
}

/// Render entries as a Markdown document with bold speaker names.
pub fn render_markdown(log: &ChatLog) -> String {
    let body = join_entries(log, |entry| {
        format!("**{}:** {}", entry.speaker, entry.message)
    });
    format!("{MARKDOWN_HEADING}{ENTRY_SEPARATOR}{body}")
}

fn join_entries(log: &ChatLog, render: impl Fn(&ChatEntry) -> String) -> String {
    log.iter()
        .map(render)
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}
