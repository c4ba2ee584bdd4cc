//! Application layer for transcripty
//!
//! This crate contains the export use case, the ports it drives, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExportSettings;
pub use ports::{
    chat_document::{ChatDocumentPort, DocumentError},
    progress::{ExportProgressNotifier, NoExportProgress},
};
pub use use_cases::export_chat::{
    EMPTY_LOG_PLACEHOLDER, ExportChatError, ExportChatInput, ExportChatOutput,
    ExportChatUseCase, WrittenFile, placeholder_for,
};
