//! OKX Wallet Gateway Library
//!
//! This crate provides a minimal gateway service that probes connectivity
//! against the OKX wallet API. Each probe issues one HMAC-signed request
//! to the exchange and records the outcome in the logs; the inbound HTTP
//! caller always receives a fixed acknowledgment.

pub mod api;
pub mod config;
pub mod okx_client;
pub mod service;
pub mod signing;

// Re-export commonly used types
pub use config::{ApiConfig, Config, OkxConfig};
pub use okx_client::{OkxClient, OkxError};
pub use service::{OkxService, WalletStatusApi};
