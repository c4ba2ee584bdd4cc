//! Domain layer for transcripty
//!
//! This crate contains the chat log model, the extractor that pulls chat
//! entries out of a saved Google Meet page, and the text/Markdown renderers.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Chat Log
//!
//! - **ChatEntry**: one `(speaker, message)` pair, both trimmed
//! - **ChatLog**: every entry found in a document, in document order
//!
//! ## Export
//!
//! - **ChatFormat**: plain text (`.txt`) or Markdown (`.md`)
//! - **OutputTargets**: which formats a run writes
//! - **Base path**: output path without extension, shared by both formats

pub mod chat;
pub mod export;

// Re-export commonly used types
pub use chat::{
    entities::{ChatEntry, ChatLog},
    extract::extract_chat_log,
    render::{MARKDOWN_HEADING, render_markdown, render_text},
};
pub use export::{
    format::ChatFormat,
    path::{DEFAULT_SUFFIX, default_base_path, output_path},
    targets::OutputTargets,
};
