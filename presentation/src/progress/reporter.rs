//! Console progress reporting for chat exports

use colored::Colorize;
use std::path::Path;
use transcripty_application::ExportProgressNotifier;
use transcripty_domain::ChatFormat;

/// Warning shown when a document contains no chat entries
pub const NO_ENTRIES_WARNING: &str = "No chat messages found in the provided HTML file.";

/// Reports export progress on the console.
///
/// Success lines go to stdout and can be silenced with `quiet`; the
/// empty-log warning always goes to stderr.
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Line printed after an output file has been written
    pub fn written_message(format: ChatFormat, path: &Path, placeholder: bool) -> String {
        if placeholder {
            format!("Empty chat log ({format}) created at: {}", path.display())
        } else {
            format!("Chat log ({format}) successfully saved to: {}", path.display())
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportProgressNotifier for ConsoleReporter {
    fn on_entries_extracted(&self, count: usize) {
        if !self.quiet && count > 0 {
            println!("{} {count} chat messages", "Found".cyan().bold());
        }
    }

    fn on_no_entries(&self) {
        eprintln!("{} {NO_ENTRIES_WARNING}", "Warning:".yellow().bold());
    }

    fn on_file_written(&self, format: ChatFormat, path: &Path, placeholder: bool) {
        if self.quiet {
            return;
        }
        let line = Self::written_message(format, path, placeholder);
        if placeholder {
            println!("{}", line.yellow());
        } else {
            println!("{}", line.green());
        }
    }
}
