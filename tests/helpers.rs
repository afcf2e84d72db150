//! Shared test helpers for unit tests
//!
//! This module provides helper functions used by unit tests:
//! - **Constants**: Dummy credentials shared across test files
//! - **Configuration Builders**: Functions to create test configurations
//!   pointing the exchange client at a mock server

use okx_wallet::config::{ApiConfig, Config, OkxConfig};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Dummy API key transmitted in the `OK-ACCESS-KEY` header
pub const DUMMY_API_KEY: &str = "dummy-api-key";

/// Dummy secret key used for HMAC signing in tests
pub const DUMMY_SECRET_KEY: &str = "dummy-secret-key";

/// Dummy access key (held in configuration, never transmitted)
pub const DUMMY_ACCESS_KEY: &str = "dummy-access-key";

/// Dummy passphrase transmitted in the `OK-ACCESS-PASSPHRASE` header
pub const DUMMY_PASSPHRASE: &str = "dummy-passphrase";

/// Status path used across client tests (the default wallet endpoint)
pub const STATUS_PATH: &str = "/api/v5/wallet/chain/supported-chains";

// ============================================================================
// CONFIGURATION BUILDERS
// ============================================================================

/// Build a config pointing the exchange client at the given base URL,
/// with the full set of dummy credentials.
pub fn build_test_config(base_url: &str) -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: Vec::new(),
        },
        okx: OkxConfig {
            base_url: base_url.to_string(),
            api_key: DUMMY_API_KEY.to_string(),
            secret_key: DUMMY_SECRET_KEY.to_string(),
            access_key: DUMMY_ACCESS_KEY.to_string(),
            passphrase: DUMMY_PASSPHRASE.to_string(),
            status_path: STATUS_PATH.to_string(),
        },
    }
}

/// Build a config with every credential left empty, as happens when no
/// environment variables are set.
pub fn build_test_config_with_empty_credentials(base_url: &str) -> Config {
    Config {
        okx: OkxConfig {
            base_url: base_url.to_string(),
            ..OkxConfig::default()
        },
        ..Config::default()
    }
}
