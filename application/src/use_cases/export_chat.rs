//! Export chat use case
//!
//! Reads a saved Google Meet page, extracts its chat entries and writes them
//! as plain text and/or Markdown next to a shared base path.
//!
//! # Overview
//!
//! 1. **Resolve base path** - explicit `--output` or `<dir>/<stem><suffix>`
//! 2. **Read document** - a missing input fails before anything is written
//! 3. **Extract** - [`extract_chat_log`] over the raw text
//! 4. **Write outputs** - text first, then Markdown
//!
//! An empty chat log is not an error. Each selected file still gets written,
//! holding a fixed placeholder instead of rendered entries.
//!
//! Writes are not transactional: if the Markdown write fails, a text file
//! written just before it stays on disk.

use crate::config::ExportSettings;
use crate::ports::chat_document::{ChatDocumentPort, DocumentError};
use crate::ports::progress::{ExportProgressNotifier, NoExportProgress};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use transcripty_domain::{
    ChatFormat, MARKDOWN_HEADING, OutputTargets, default_base_path, extract_chat_log, output_path,
};

/// Text written in place of entries when a document has none
pub const EMPTY_LOG_PLACEHOLDER: &str = "No chat messages found.";

/// Placeholder file content for an empty chat log
pub fn placeholder_for(format: ChatFormat) -> String {
    match format {
        ChatFormat::Text => EMPTY_LOG_PLACEHOLDER.to_string(),
        ChatFormat::Markdown => format!("{MARKDOWN_HEADING}\n\n{EMPTY_LOG_PLACEHOLDER}"),
    }
}

/// Errors that can occur during an export
#[derive(Error, Debug)]
pub enum ExportChatError {
    /// The input document does not exist. Nothing has been written.
    #[error("File not found at '{}'. Please check the path.", .0.display())]
    InputNotFound(PathBuf),

    /// The input document exists but could not be read.
    #[error("An unexpected error occurred: {0}")]
    Read(DocumentError),

    /// An output file could not be written. Files written before it remain.
    #[error("An unexpected error occurred while saving the {format} file: {error}")]
    Write {
        format: ChatFormat,
        error: DocumentError,
    },
}

/// Input for the ExportChat use case
#[derive(Debug, Clone)]
pub struct ExportChatInput {
    /// HTML document to read
    pub input_path: PathBuf,
    /// Output path without extension; derived from the input when `None`
    pub base_path: Option<PathBuf>,
    /// Suffix for the derived base path
    pub suffix: String,
    /// Formats to write
    pub targets: OutputTargets,
}

impl ExportChatInput {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self::from_settings(input_path, &ExportSettings::default())
    }

    pub fn from_settings(input_path: impl Into<PathBuf>, settings: &ExportSettings) -> Self {
        Self {
            input_path: input_path.into(),
            base_path: None,
            suffix: settings.suffix.clone(),
            targets: settings.targets,
        }
    }

    pub fn with_base_path(mut self, base_path: Option<PathBuf>) -> Self {
        self.base_path = base_path;
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_targets(mut self, targets: OutputTargets) -> Self {
        self.targets = targets;
        self
    }

    /// Base path the output files are derived from
    pub fn resolved_base_path(&self) -> PathBuf {
        self.base_path
            .clone()
            .unwrap_or_else(|| default_base_path(&self.input_path, &self.suffix))
    }
}

/// A file written by an export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub format: ChatFormat,
    pub path: PathBuf,
    /// True when the file holds the empty-log placeholder
    pub placeholder: bool,
}

/// Output from the ExportChat use case
#[derive(Debug, Clone)]
pub struct ExportChatOutput {
    /// Number of chat entries extracted
    pub entry_count: usize,
    /// Files written, in write order
    pub written: Vec<WrittenFile>,
}

impl ExportChatOutput {
    pub fn is_empty_log(&self) -> bool {
        self.entry_count == 0
    }
}

/// Use case for exporting the chat log of one saved page
pub struct ExportChatUseCase {
    documents: Arc<dyn ChatDocumentPort>,
}

impl ExportChatUseCase {
    pub fn new(documents: Arc<dyn ChatDocumentPort>) -> Self {
        Self { documents }
    }

    /// Executes the export without progress reporting.
    pub async fn execute(&self, input: ExportChatInput) -> Result<ExportChatOutput, ExportChatError> {
        self.execute_with_progress(input, &NoExportProgress).await
    }

    /// Executes the export with progress notifications.
    ///
    /// # Errors
    ///
    /// - [`ExportChatError::InputNotFound`] - input path does not exist
    /// - [`ExportChatError::Read`] - input could not be read
    /// - [`ExportChatError::Write`] - an output file could not be written
    pub async fn execute_with_progress(
        &self,
        input: ExportChatInput,
        progress: &dyn ExportProgressNotifier,
    ) -> Result<ExportChatOutput, ExportChatError> {
        let base_path = input.resolved_base_path();
        debug!("Output base path: {}", base_path.display());

        let html = self
            .documents
            .read_document(&input.input_path)
            .await
            .map_err(|e| match e {
                DocumentError::NotFound(path) => ExportChatError::InputNotFound(path),
                other => ExportChatError::Read(other),
            })?;
        progress.on_document_loaded(&input.input_path, html.len());

        let log = extract_chat_log(&html);
        info!(
            "Extracted {} chat entries from {}",
            log.len(),
            input.input_path.display()
        );
        progress.on_entries_extracted(log.len());

        let placeholder = log.is_empty();
        if placeholder {
            progress.on_no_entries();
        }

        let mut written = Vec::new();
        for format in input.targets.formats() {
            let path = output_path(&base_path, format);
            let content = if placeholder {
                placeholder_for(format)
            } else {
                format.render(&log)
            };

            self.write(format, &path, &content).await?;
            progress.on_file_written(format, &path, placeholder);

            written.push(WrittenFile {
                format,
                path,
                placeholder,
            });
        }

        Ok(ExportChatOutput {
            entry_count: log.len(),
            written,
        })
    }

    async fn write(
        &self,
        format: ChatFormat,
        path: &Path,
        content: &str,
    ) -> Result<(), ExportChatError> {
        debug!("Writing {} bytes to {}", content.len(), path.display());
        self.documents
            .write_output(path, content)
            .await
            .map_err(|error| ExportChatError::Write { format, error })
    }
}
