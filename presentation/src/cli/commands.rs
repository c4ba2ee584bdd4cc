//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;
use transcripty_domain::OutputTargets;

/// CLI arguments for transcripty
#[derive(Parser, Debug)]
#[command(name = "transcripty")]
#[command(
    author,
    version,
    about = "Extracts chat logs from Google Meet HTML files and saves them to text and markdown files"
)]
#[command(long_about = r#"
Extracts the chat panel of a saved Google Meet page into plain text and Markdown.

By default both <base>.txt and <base>.md are written, where <base> is the
input file's directory and name (without extension) followed by "_chat".

Configuration files are loaded from (in priority order):
1. TRANSCRIPTY_* environment variables
2. --config <path>        Explicit config file
3. ./transcripty.toml     Project-level config
4. ~/.config/transcripty/config.toml   Global config

Example:
  transcripty meeting.html
  transcripty meeting.html -o notes/standup --md-only
"#)]
pub struct Cli {
    /// Path to the HTML file containing the chat log
    #[arg(value_name = "HTML_FILE", required_unless_present = "show_config")]
    pub input: Option<PathBuf>,

    /// Output directory or file path (without extension)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only generate .txt file
    #[arg(long)]
    pub txt_only: bool,

    /// Only generate .md file
    #[arg(long)]
    pub md_only: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress success messages (warnings are still shown)
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Output selection requested on the command line, if it narrows anything
    pub fn targets_override(&self) -> Option<OutputTargets> {
        OutputTargets::from_flags(self.txt_only, self.md_only)
    }
}
