//! Output path derivation

use super::format::ChatFormat;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to the input file stem for the default base path
pub const DEFAULT_SUFFIX: &str = "_chat";

/// Default base path for an input document.
///
/// Input directory + input file name without its last extension + `suffix`,
/// e.g. `exports/meeting.html` -> `exports/meeting_chat`.
pub fn default_base_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    name.push(suffix);

    match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Path of the output file for `format`.
///
/// The extension is appended to the base path as-is, so dots already present
/// in the base (`notes.v2`) are kept.
pub fn output_path(base: &Path, format: ChatFormat) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(".");
    path.push(format.extension());
    PathBuf::from(path)
}
