//! Configuration file loading for quickask
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `OLLAMA_HOST`, `QUICKASK_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./quickask.toml` or `./.quickask.toml`
//! 4. Global: `$XDG_CONFIG_HOME/quickask/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileOutputConfig, FileServerConfig};
pub use loader::ConfigLoader;
