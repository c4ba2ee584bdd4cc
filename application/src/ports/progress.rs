//! Progress notification port
//!
//! Defines the interface for reporting what an export run did.

use std::path::Path;
use transcripty_domain::ChatFormat;

/// Callback for progress updates during an export
///
/// Implementations live in the presentation layer. All methods have empty
/// default implementations.
pub trait ExportProgressNotifier: Send + Sync {
    /// Called after the input document has been read
    fn on_document_loaded(&self, _path: &Path, _bytes: usize) {}

    /// Called after extraction with the number of entries found
    fn on_entries_extracted(&self, _count: usize) {}

    /// Called when the document contains no chat entries
    fn on_no_entries(&self) {}

    /// Called after an output file has been written
    ///
    /// `placeholder` is true when the file holds the empty-log placeholder
    /// instead of rendered entries.
    fn on_file_written(&self, _format: ChatFormat, _path: &Path, _placeholder: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoExportProgress;

impl ExportProgressNotifier for NoExportProgress {}
