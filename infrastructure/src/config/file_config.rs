//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use quickask_domain::{DomainError, ServerHost};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model server location
    pub server: FileServerConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

/// `[server]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// `host`, `host:port` or `scheme://host:port` (default: 127.0.0.1:11434)
    pub host: Option<String>,
}

impl FileServerConfig {
    /// Resolve the configured host.
    ///
    /// An unusable port is replaced by the scheme default; the error
    /// describing the substitution is returned alongside.
    pub fn server_host(&self) -> (ServerHost, Option<DomainError>) {
        match &self.host {
            Some(raw) => ServerHost::parse_lenient(raw),
            None => (ServerHost::default(), None),
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Write the answer incrementally as it is generated
    pub stream: bool,
}
