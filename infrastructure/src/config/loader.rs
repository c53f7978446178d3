//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["quickask.toml", ".quickask.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment (`OLLAMA_HOST`, `QUICKASK_*`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./quickask.toml` or `./.quickask.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/quickask/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::with_env(figment).extract().map_err(Box::new)
    }

    /// Load defaults plus environment overrides (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        let figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        Self::with_env(figment).extract().map_err(Box::new)
    }

    fn with_env(figment: Figment) -> Figment {
        let figment = figment.merge(Env::prefixed("QUICKASK_").split("__"));

        // Passed through verbatim: `Env` would parse `[::1]` as an array
        match std::env::var("OLLAMA_HOST") {
            Ok(host) => figment.merge(Serialized::default("server.host", host)),
            Err(_) => figment,
        }
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/quickask/config.toml if set,
    /// otherwise falls back to ~/.config/quickask/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("quickask").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_config_sources(explicit: Option<&Path>) -> String {
        let mut out = String::from("Configuration sources (in priority order):\n");

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "     " };
            out.push_str(&format!("  [{}] Explicit: {}\n", mark, path.display()));
        }

        if let Some(path) = Self::project_config_path() {
            out.push_str(&format!("  [FOUND] Project: {}\n", path.display()));
        } else {
            out.push_str("  [     ] Project: ./quickask.toml or ./.quickask.toml\n");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            out.push_str(&format!("  [{}] Global:  {}\n", mark, path.display()));
        }

        out.push_str("  [     ] Default: built-in defaults\n");
        out
    }
}
