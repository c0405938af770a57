//! # Client Configuration
//!
//! Where the client points and how patient it is. Loaded from a TOML file in
//! the platform config directory, with code-level defaults for every field:
//!
//! ```toml
//! # banca.toml
//! api_url = "https://banca.example.com/api"
//! timeout_secs = 30
//! default_page_size = 10
//! ```
//!
//! Everything here is process-lifetime input; nothing else is persisted by
//! the client (stores, cart and pagination state die with the process).

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Config file name inside the platform config directory.
const CONFIG_FILE: &str = "banca.toml";

// =============================================================================
// Client Configuration
// =============================================================================

/// Configuration for [`ApiClient`](crate::http::ApiClient) construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the REST API, e.g. `https://banca.example.com/api`.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Page size used when a listing does not choose its own.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

fn default_api_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> u32 {
    banca_core::DEFAULT_PAGE_SIZE
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            default_page_size: default_page_size(),
        }
    }
}

impl ClientConfig {
    /// Loads the config from the platform config directory, falling back to
    /// defaults when no file exists yet.
    pub fn load() -> ClientResult<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(ClientConfig::default()),
        }
    }

    /// Loads and parses a specific config file.
    pub fn load_from(path: &Path) -> ClientResult<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ClientError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&raw)
            .map_err(|e| ClientError::ConfigLoad(format!("{}: {}", path.display(), e)))
    }

    /// Platform-specific path of the config file, when one can be derived.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "banca", "banca").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "http://localhost:8080/api");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.default_page_size, banca_core::DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ClientConfig =
            toml::from_str(r#"api_url = "https://banca.example.com/api""#).unwrap();
        assert_eq!(config.api_url, "https://banca.example.com/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_full_toml_round_trip() {
        let config = ClientConfig {
            api_url: "https://banca.example.com/api".to_string(),
            timeout_secs: 10,
            default_page_size: 25,
        };
        let raw = toml::to_string(&config).unwrap();
        let back: ClientConfig = toml::from_str(&raw).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let dir = std::env::temp_dir().join("banca-config-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, "timeout_secs = \"not a number\"").unwrap();

        let err = ClientConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ClientError::ConfigLoad(_)));
    }
}
