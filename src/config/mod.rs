//! Configuration management
//!
//! Static configuration loaded once at startup from a TOML file, then
//! overridden by environment variables. Access goes through the global
//! `get_config()` instance.

use serde::{Deserialize, Serialize};

mod r#impl;

pub use r#impl::{get_config, init_config};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub features: FeaturesConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage backend: `file` or `memory`
    pub backend: String,
    /// Data file holding the serialized link collection. The `_v1` suffix
    /// versions the on-disk format; future migrations rotate the file name.
    pub data_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            backend: "file".to_string(),
            data_file: "linksmart_data_v1.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// Base address printed in front of `/#/<alias>` short links
    pub base_url: String,
    /// Length of generated aliases
    pub random_code_length: usize,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        FeaturesConfig {
            base_url: "http://localhost:8080".to_string(),
            random_code_length: 6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (tracing `EnvFilter` syntax)
    pub level: String,
    /// Optional log file; empty or absent means stderr
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}
