//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod output;

pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use transcripty_application::ExportSettings;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning a message per detected issue.
    ///
    /// Issues are warnings: the configuration is still usable as loaded.
    pub fn validate(&self) -> Vec<String> {
        self.output.validate()
    }

    /// Convert into application-level export settings
    pub fn to_export_settings(&self) -> ExportSettings {
        self.output.to_export_settings()
    }
}
