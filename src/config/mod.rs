//! Configuration Management Module
//!
//! This module handles loading and managing configuration for the gateway
//! service. Values come from an optional TOML file layered under environment
//! variable overrides. Credentials that are never set stay empty strings and
//! are rejected by the exchange at call time rather than at startup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// CONFIGURATION STRUCTURES
// ============================================================================

/// Default relative path probed by the connectivity check.
pub const DEFAULT_STATUS_PATH: &str = "/api/v5/wallet/chain/supported-chains";

/// Main configuration structure containing all service settings.
///
/// This structure holds configuration for:
/// - The local API server (host, port, CORS settings)
/// - The OKX wallet API connection (base URL, credentials, status path)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    #[serde(default)]
    pub api: ApiConfig,
    /// OKX wallet API configuration
    #[serde(default)]
    pub okx: OkxConfig,
}

/// API server configuration for external communication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host address to bind the API server to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to bind the API server to
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins for cross-origin requests
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// OKX wallet API connection configuration.
///
/// All credential fields default to empty strings. Presence is deliberately
/// not validated here: an unset credential produces an empty header value
/// and the exchange rejects the request at call time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkxConfig {
    /// Base URL of the OKX web3 wallet API
    #[serde(default)]
    pub base_url: String,
    /// API key, transmitted in the `OK-ACCESS-KEY` header
    #[serde(default)]
    pub api_key: String,
    /// Secret key used for HMAC request signing (never transmitted)
    #[serde(default)]
    pub secret_key: String,
    /// Access key associated with the API key pair
    #[serde(default)]
    pub access_key: String,
    /// Passphrase, transmitted in the `OK-ACCESS-PASSPHRASE` header
    #[serde(default)]
    pub passphrase: String,
    /// Relative path probed by the connectivity check
    #[serde(default = "default_status_path")]
    pub status_path: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_status_path() -> String {
    DEFAULT_STATUS_PATH.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl Default for OkxConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            secret_key: String::new(),
            access_key: String::new(),
            passphrase: String::new(),
            status_path: default_status_path(),
        }
    }
}

// ============================================================================
// CONFIGURATION LOADING AND MANAGEMENT
// ============================================================================

impl Config {
    /// Loads configuration from the TOML file and the environment.
    ///
    /// This function:
    /// 1. Loads a local `.env` file if one exists
    /// 2. Reads the TOML file at `OKX_WALLET_CONFIG_PATH`
    ///    (default `config/okx_wallet.toml`); a missing file is not an
    ///    error, the built-in defaults are used instead
    /// 3. Applies environment variable overrides on top
    ///
    /// # Returns
    ///
    /// - `Ok(Config)` - Successfully loaded configuration
    /// - `Err(anyhow::Error)` - Config file or listen address was malformed
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = std::env::var("OKX_WALLET_CONFIG_PATH")
            .unwrap_or_else(|_| "config/okx_wallet.toml".to_string());

        let mut config = if std::path::Path::new(&config_path).exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file '{}'", config_path))?;
            Self::from_toml_str(&content)?
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parses a configuration from TOML content.
    ///
    /// Sections and fields absent from the content fall back to their
    /// defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration TOML")
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Recognized variables: `HTTP_ADDR` (listen address as `host:port`),
    /// `OKX_WEB3_URL`, `OKX_API_KEY`, `OKX_SECRET_KEY`, `OKX_ACCESS_KEY`,
    /// `OKX_PASSPHRASE`, and `OKX_STATUS_PATH`.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(addr) = std::env::var("HTTP_ADDR") {
            let (host, port) = parse_listen_addr(&addr)?;
            self.api.host = host;
            self.api.port = port;
        }
        if let Ok(value) = std::env::var("OKX_WEB3_URL") {
            self.okx.base_url = value;
        }
        if let Ok(value) = std::env::var("OKX_API_KEY") {
            self.okx.api_key = value;
        }
        if let Ok(value) = std::env::var("OKX_SECRET_KEY") {
            self.okx.secret_key = value;
        }
        if let Ok(value) = std::env::var("OKX_ACCESS_KEY") {
            self.okx.access_key = value;
        }
        if let Ok(value) = std::env::var("OKX_PASSPHRASE") {
            self.okx.passphrase = value;
        }
        if let Ok(value) = std::env::var("OKX_STATUS_PATH") {
            self.okx.status_path = value;
        }
        Ok(())
    }
}

/// Parses a `host:port` listen address.
///
/// An empty host (e.g. `":8080"`) binds all interfaces.
pub fn parse_listen_addr(addr: &str) -> Result<(String, u16)> {
    let (host, port) = addr.rsplit_once(':').ok_or_else(|| {
        anyhow::anyhow!("Invalid listen address '{}': expected host:port", addr)
    })?;
    let port: u16 = port
        .parse()
        .with_context(|| format!("Invalid port in listen address '{}'", addr))?;
    let host = if host.is_empty() { "0.0.0.0" } else { host };
    Ok((host.to_string(), port))
}
