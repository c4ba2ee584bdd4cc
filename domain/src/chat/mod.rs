//! Chat log subdomain.
//!
//! - [`entities::ChatLog`] — ordered `(speaker, message)` pairs
//! - [`extract::extract_chat_log`] — pattern matcher over the exported markup
//! - [`render`] — plain text and Markdown renderers

pub mod entities;
pub mod extract;
pub mod render;
