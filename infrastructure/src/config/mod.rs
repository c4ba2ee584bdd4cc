//! Configuration file loading for transcripty
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TRANSCRIPTY_*` environment variables (e.g. `TRANSCRIPTY_OUTPUT__SUFFIX`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./transcripty.toml` or `./.transcripty.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/transcripty/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileOutputConfig};
pub use loader::ConfigLoader;
