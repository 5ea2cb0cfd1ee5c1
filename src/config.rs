//! Service configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ServiceError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub color: ColorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite database file. Required; there is no default
    /// location for the store.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Path to the seed data file. Optional; when absent or missing on disk
    /// the loader falls back to `challenges.txt` in the working directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Base URL of the color provider
    #[serde(default = "default_color_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_color_timeout")]
    pub timeout_secs: u64,
}

// Defaults
fn default_http_port() -> u16 { 8000 }
fn default_color_base_url() -> String { "https://www.thecolorapi.com".to_string() }
fn default_color_timeout() -> u64 { 3 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { http_port: default_http_port() }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            base_url: default_color_base_url(),
            timeout_secs: default_color_timeout(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            store: StoreConfig::default(),
            seed: SeedConfig::default(),
            color: ColorConfig::default(),
        }
    }
}

impl Config {
    /// Resolve the store path, failing when no location was configured
    pub fn store_path(&self) -> Result<&PathBuf, ServiceError> {
        self.store
            .path
            .as_ref()
            .ok_or_else(|| ServiceError::ConfigurationMissing("store.path".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.http_port, 8000);
        assert_eq!(config.color.base_url, "https://www.thecolorapi.com");
        assert_eq!(config.color.timeout_secs, 3);
        assert!(config.store.path.is_none());
        assert!(config.seed.file.is_none());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[server]
http_port = 9000

[store]
path = "/tmp/sketchspark-test.db"

[seed]
file = "/tmp/challenges-test.txt"

[color]
base_url = "http://127.0.0.1:9123"
timeout_secs = 1
"#;
        let config: Config = toml::from_str(toml_str).expect("valid TOML");
        assert_eq!(config.server.http_port, 9000);
        assert_eq!(
            config.store.path.as_deref(),
            Some(std::path::Path::new("/tmp/sketchspark-test.db"))
        );
        assert_eq!(
            config.seed.file.as_deref(),
            Some(std::path::Path::new("/tmp/challenges-test.txt"))
        );
        assert_eq!(config.color.base_url, "http://127.0.0.1:9123");
        assert_eq!(config.color.timeout_secs, 1);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml_str = r#"
[store]
path = "spark.db"
"#;
        let config: Config = toml::from_str(toml_str).expect("valid TOML");
        assert_eq!(config.server.http_port, 8000);
        assert_eq!(config.color.timeout_secs, 3);
        assert!(config.store.path.is_some());
    }

    #[test]
    fn test_store_path_required() {
        let config = Config::default();
        let err = config.store_path().unwrap_err();
        assert!(matches!(err, ServiceError::ConfigurationMissing(_)));
        assert!(err.to_string().contains("store.path"));
    }
}
