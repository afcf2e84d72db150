//! OKX Wallet Gateway Service
//!
//! A minimal gateway service that exposes a single HTTP endpoint to probe
//! connectivity against the OKX wallet API.
//!
//! ## Overview
//!
//! The gateway:
//! 1. Loads configuration from an optional TOML file and the environment
//! 2. Builds a signing HTTP client for the OKX wallet API
//! 3. Serves the local REST API
//! 4. On each test request, issues one signed status call to the exchange
//!    and logs the outcome; the inbound caller always receives a fixed
//!    acknowledgment

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use okx_wallet::api::ApiServer;
use okx_wallet::config::Config;
use okx_wallet::okx_client::OkxClient;
use okx_wallet::service::OkxService;

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

/// Main application entry point that initializes and runs the gateway.
///
/// This function:
/// 1. Initializes logging and tracing
/// 2. Loads configuration
/// 3. Wires the OKX client into the service facade
/// 4. Starts the API server and runs until shutdown
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured logging for debugging and monitoring
    tracing_subscriber::fmt::init();

    info!("Starting OKX Wallet Gateway");

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for help flag
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("OKX Wallet Gateway");
        println!();
        println!("Usage: okx-wallet [OPTIONS]");
        println!();
        println!("Options:");
        println!("  --config <path>   Use custom config file path");
        println!("  --help, -h        Show this help message");
        println!();
        println!("Environment variables:");
        println!("  OKX_WALLET_CONFIG_PATH    Path to config file (overrides --config)");
        println!("  HTTP_ADDR                 Listen address as host:port");
        println!("  OKX_WEB3_URL              Base URL of the OKX wallet API");
        println!("  OKX_API_KEY               OKX API key");
        println!("  OKX_SECRET_KEY            OKX secret key (used for signing)");
        println!("  OKX_ACCESS_KEY            OKX access key");
        println!("  OKX_PASSPHRASE            OKX API passphrase");
        println!("  OKX_STATUS_PATH           Relative path of the status endpoint");
        return Ok(());
    }

    // Check for custom config path
    let mut config_path = None;
    for (i, arg) in args.iter().enumerate() {
        if arg == "--config" && i + 1 < args.len() {
            config_path = Some(args[i + 1].clone());
            break;
        }
    }

    if let Some(path) = config_path {
        std::env::set_var("OKX_WALLET_CONFIG_PATH", &path);
        info!("Using custom config: {}", path);
    }

    // Load configuration (TOML file if present, environment on top)
    let config = Config::load()?;
    info!("Configuration loaded successfully");

    // Wire the request path: client -> service facade -> API server
    let client = OkxClient::new(&config)?;
    let service = OkxService::new(Arc::new(client));
    let api_server = ApiServer::new(config, service);

    // Run the service (this blocks until shutdown)
    api_server.run().await?;

    Ok(())
}
