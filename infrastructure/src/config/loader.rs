//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["transcripty.toml", ".transcripty.toml"];

/// Prefix for environment overrides (`TRANSCRIPTY_OUTPUT__SUFFIX=_log`)
const ENV_PREFIX: &str = "TRANSCRIPTY_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `TRANSCRIPTY_*` environment variables
    /// 2. Explicit config path (if provided; must exist)
    /// 3. Project root: `./transcripty.toml` or `./.transcripty.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/transcripty/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(
            Self::global_config_path(),
            Self::project_config_path(),
            config_path,
        )
    }

    fn load_from(
        global_path: Option<PathBuf>,
        project_path: Option<PathBuf>,
        config_path: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global_path
            && global_path.exists()
        {
            debug!("Merging global config {}", global_path.display());
            figment = figment.merge(Toml::file_exact(&global_path));
        }

        if let Some(project_path) = project_path {
            debug!("Merging project config {}", project_path.display());
            figment = figment.merge(Toml::file_exact(&project_path));
        }

        if let Some(path) = config_path {
            if !path.is_file() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            debug!("Merging explicit config {}", path.display());
            figment = figment.merge(Toml::file_exact(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/transcripty/config.toml if set,
    /// otherwise falls back to ~/.config/transcripty/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("transcripty").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::find_project_config(Path::new("."))
    }

    fn find_project_config(dir: &Path) -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        for line in Self::config_sources(config_path, Self::global_config_path()) {
            println!("{line}");
        }
    }

    fn config_sources(config_path: Option<&Path>, global_path: Option<PathBuf>) -> Vec<String> {
        let mut lines = vec![
            "Configuration sources (in priority order):".to_string(),
            format!("  [     ] Environment: {ENV_PREFIX}<SECTION>__<KEY>"),
        ];

        match config_path {
            Some(path) if path.is_file() => {
                lines.push(format!("  [FOUND] Explicit: {}", path.display()));
            }
            Some(path) => lines.push(format!("  [     ] Explicit: {}", path.display())),
            None => lines.push("  [     ] Explicit: --config <path>".to_string()),
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines
                .push("  [     ] Project: ./transcripty.toml or ./.transcripty.toml".to_string()),
        }

        if let Some(path) = global_path {
            let marker = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{marker}] Global:  {}", path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}
