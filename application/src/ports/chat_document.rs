//! Chat document port
//!
//! Defines how the application reads exported pages and writes chat logs.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading or writing documents
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("No such file: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocumentError {
    /// Check if this error means the document does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, DocumentError::NotFound(_))
    }
}

/// Storage for input documents and exported chat logs
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatDocumentPort: Send + Sync {
    /// Read a whole document as text
    async fn read_document(&self, path: &Path) -> Result<String, DocumentError>;

    /// Create or truncate `path` and write `content` to it
    async fn write_output(&self, path: &Path, content: &str) -> Result<(), DocumentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = DocumentError::NotFound(PathBuf::from("missing.html"));
        assert_eq!(error.to_string(), "No such file: missing.html");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_io_display() {
        let error = DocumentError::Io {
            path: PathBuf::from("out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.to_string(), "out.txt: denied");
        assert!(!error.is_not_found());
    }
}
