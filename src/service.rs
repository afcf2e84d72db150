//! Connection Status Service Module
//!
//! Service facade over the wallet status capability. Failures are absorbed
//! at this boundary: outcomes are recorded in the logs and never propagated
//! to the inbound HTTP layer.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::okx_client::{OkxClient, OkxError};

/// Capability for probing the exchange wallet API.
///
/// Anything that can report whether the connection and credentials are
/// currently good satisfies this trait; tests substitute a mock in place
/// of the real client.
#[async_trait]
pub trait WalletStatusApi: Send + Sync {
    /// Performs one status round trip against the exchange.
    async fn api_status(&self) -> Result<bool, OkxError>;
}

#[async_trait]
impl WalletStatusApi for OkxClient {
    async fn api_status(&self) -> Result<bool, OkxError> {
        OkxClient::api_status(self).await
    }
}

/// Service facade orchestrating connectivity checks.
pub struct OkxService {
    wallet_api: Arc<dyn WalletStatusApi>,
}

impl OkxService {
    /// Creates a new service over the given wallet status capability.
    pub fn new(wallet_api: Arc<dyn WalletStatusApi>) -> Self {
        Self { wallet_api }
    }

    /// Runs one connectivity check and logs the outcome.
    ///
    /// Returns nothing: the result is observable only through the logs.
    /// Errors are logged at error severity; the final boolean outcome is
    /// always logged at info severity.
    pub async fn get_connection(&self) {
        let status = match self.wallet_api.api_status().await {
            Ok(ok) => ok,
            Err(e) => {
                error!(error = %e, "Failed to get API status");
                false
            }
        };
        info!(status, "API status");
    }
}
