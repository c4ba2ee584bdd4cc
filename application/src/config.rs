//! Application-level configuration.
//!
//! Settings that control what the export use case writes, independent of
//! where they were loaded from.

use transcripty_domain::{DEFAULT_SUFFIX, OutputTargets};

/// Export behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    /// Suffix appended to the input file stem when no base path is given.
    pub suffix: String,
    /// Formats written when the command line does not narrow the selection.
    pub targets: OutputTargets,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            targets: OutputTargets::both(),
        }
    }
}

impl ExportSettings {
    /// Replace the configured targets with a command-line override, if any.
    pub fn with_targets_override(mut self, targets: Option<OutputTargets>) -> Self {
        if let Some(targets) = targets {
            self.targets = targets;
        }
        self
    }
}
