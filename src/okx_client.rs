//! OKX Wallet API Client Module
//!
//! This module provides a minimal client for the OKX web3 wallet API.
//! Every outbound call is authenticated per the OKX scheme: the request
//! carries the API key, passphrase, a millisecond UTC timestamp, and an
//! HMAC-SHA256 signature computed over that exact timestamp plus the
//! method, path, and body.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::config::{Config, OkxConfig};
use crate::signing;

// ============================================================================
// ERRORS
// ============================================================================

/// Errors from a single OKX API round trip.
#[derive(Debug, Error)]
pub enum OkxError {
    /// Network-level failure reaching the exchange (DNS, TLS, refused
    /// connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The exchange answered outside the HTTP success range.
    #[error("API returned non-success status: {status}")]
    Status {
        /// HTTP status observed on the response
        status: StatusCode,
    },
}

// ============================================================================
// CLIENT
// ============================================================================

/// Client for the OKX wallet API.
///
/// Holds the immutable credentials and a shared HTTP client. The HTTP
/// client is safe for concurrent reuse, so one `OkxClient` serves any
/// number of simultaneous status checks.
pub struct OkxClient {
    client: Client,
    okx: OkxConfig,
}

impl OkxClient {
    /// Creates a new OKX client from the service configuration.
    ///
    /// JSON content-type and accept headers are set once as client
    /// defaults, mirroring what every OKX endpoint expects. No request
    /// timeout is configured beyond the HTTP client's default.
    ///
    /// # Returns
    ///
    /// - `Ok(OkxClient)` - Client ready to issue signed requests
    /// - `Err(anyhow::Error)` - Failed to build the underlying HTTP client
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            okx: config.okx.clone(),
        })
    }

    /// Builds a signed request for the given method, path, and body.
    ///
    /// The timestamp is generated fresh for this specific request and is
    /// captured once: the same string feeds the signature and the
    /// `OK-ACCESS-TIMESTAMP` header. Callers must only invoke this after
    /// the payload is final; mutating path or body afterwards invalidates
    /// the signature.
    fn signed_request(
        &self,
        method: Method,
        request_path: &str,
        body: &str,
    ) -> reqwest::RequestBuilder {
        let timestamp = signing::timestamp_now();
        let signature = signing::sign(
            &self.okx.secret_key,
            &timestamp,
            method.as_str(),
            request_path,
            body,
        );
        let url = format!(
            "{}{}",
            self.okx.base_url.trim_end_matches('/'),
            request_path
        );

        self.client
            .request(method, url)
            .header("OK-ACCESS-KEY", self.okx.api_key.as_str())
            .header("OK-ACCESS-SIGN", signature)
            .header("OK-ACCESS-TIMESTAMP", timestamp)
            .header("OK-ACCESS-PASSPHRASE", self.okx.passphrase.as_str())
    }

    /// Checks whether the OKX API is reachable with the configured
    /// credentials.
    ///
    /// Issues one signed GET (empty body) to the configured status path.
    /// A single failed attempt is reported immediately; there are no
    /// retries.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` - The exchange answered in the HTTP success range
    /// - `Err(OkxError::Transport)` - The exchange could not be reached
    /// - `Err(OkxError::Status)` - The exchange answered outside the
    ///   success range (bad signature, invalid credentials, rate limit)
    pub async fn api_status(&self) -> Result<bool, OkxError> {
        let path = self.okx.status_path.as_str();
        let response = self.signed_request(Method::GET, path, "").send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OkxError::Status { status });
        }

        // Body is captured for observability only; it is never validated.
        match response.json::<serde_json::Value>().await {
            Ok(body) => debug!(%body, "OKX status response"),
            Err(e) => debug!(error = %e, "OKX status response body was not JSON"),
        }

        Ok(true)
    }
}
