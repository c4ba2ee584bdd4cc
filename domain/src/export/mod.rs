//! Export concepts: output formats, format selection and output paths.

pub mod format;
pub mod path;
pub mod targets;
