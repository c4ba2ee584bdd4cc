//! Infrastructure layer for transcripty
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod fs;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileOutputConfig};
pub use fs::LocalDocumentStore;
