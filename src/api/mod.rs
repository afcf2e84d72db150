//! REST API Server Module
//!
//! This module provides the REST API server for the gateway service. The
//! single operational endpoint triggers a connectivity check against the
//! exchange; its real outcome is visible only in the logs, the inbound
//! caller always receives a fixed acknowledgment.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{error, info};
use warp::http::{Method, StatusCode};
use warp::{Filter, Rejection, Reply};

use crate::config::Config;
use crate::service::OkxService;

// ============================================================================
// SHARED RESPONSE STRUCTURES
// ============================================================================

/// Standardized response structure for service endpoints.
///
/// Provides a consistent response format including success/error status
/// and relevant data. The exchange test endpoint is the one exception:
/// its response body is a fixed acknowledgment string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    pub data: Option<T>,
    /// Error message (if failed)
    pub error: Option<String>,
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Handler for the exchange test endpoint.
///
/// Triggers one connectivity check and acknowledges with a fixed body
/// regardless of the check's outcome. The handler awaits the outbound
/// call to completion; a slow exchange keeps the inbound request open.
pub async fn test_connection_handler(
    service: Arc<OkxService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    service.get_connection().await;
    Ok(warp::reply::json(&"test"))
}

// ============================================================================
// WARP FILTER HELPERS
// ============================================================================

/// Creates a warp filter that injects the service facade into handlers.
fn with_service(
    service: Arc<OkxService>,
) -> impl Filter<Extract = (Arc<OkxService>,), Error = Infallible> + Clone {
    warp::any().map(move || service.clone())
}

// ============================================================================
// CORS CONFIGURATION
// ============================================================================

/// Creates a CORS filter based on the configured allowed origins.
fn create_cors_filter(allowed_origins: &[String]) -> warp::cors::Builder {
    let methods = vec![Method::GET, Method::OPTIONS];

    if allowed_origins.contains(&"*".to_string()) {
        warp::cors()
            .allow_any_origin()
            .allow_methods(methods)
            .allow_headers(vec!["content-type"])
    } else {
        let origins: Vec<&str> = allowed_origins.iter().map(|s| s.as_str()).collect();
        warp::cors()
            .allow_origins(origins)
            .allow_methods(methods)
            .allow_headers(vec!["content-type"])
    }
}

// ============================================================================
// REJECTION HANDLER
// ============================================================================

/// Global rejection handler for all API routes.
///
/// Converts warp rejections into standardized API responses with
/// appropriate HTTP status codes.
pub async fn handle_rejection(rej: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if rej.is_not_found() {
        (StatusCode::NOT_FOUND, "Endpoint not found".to_string())
    } else if rej.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else if let Some(forbidden) = rej.find::<warp::cors::CorsForbidden>() {
        (StatusCode::FORBIDDEN, forbidden.to_string())
    } else {
        error!("Unhandled rejection: {:?}", rej);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(message),
        }),
        status,
    ))
}

// ============================================================================
// API SERVER IMPLEMENTATION
// ============================================================================

/// REST API server for the gateway service.
pub struct ApiServer {
    /// Service configuration
    config: Arc<Config>,
    /// Service facade performing connectivity checks
    service: Arc<OkxService>,
}

impl ApiServer {
    /// Creates a new API server with the given components.
    pub fn new(config: Config, service: OkxService) -> Self {
        Self {
            config: Arc::new(config),
            service: Arc::new(service),
        }
    }

    /// Starts the API server and begins handling HTTP requests.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Server ran to completion
    /// - `Err(anyhow::Error)` - Listen address could not be parsed
    pub async fn run(&self) -> Result<()> {
        info!(
            "Starting API server on {}:{}",
            self.config.api.host, self.config.api.port
        );

        let routes = self.create_routes();

        let addr: std::net::SocketAddr =
            format!("{}:{}", self.config.api.host, self.config.api.port)
                .parse()
                .context("Failed to parse API server address")?;

        warp::serve(routes).run(addr).await;

        Ok(())
    }

    /// Creates all API routes for the server.
    pub(crate) fn create_routes(
        &self,
    ) -> impl Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
        let service = self.service.clone();

        // Health check endpoint - returns service status
        let health = warp::path("health").and(warp::get()).map(|| {
            warp::reply::json(&ApiResponse::<String> {
                success: true,
                data: Some("OKX Wallet Gateway is running".to_string()),
                error: None,
            })
        });

        // Exchange test endpoint - triggers one connectivity check
        let okx_test = warp::path!("api" / "v1" / "okx" / "test")
            .and(warp::get())
            .and(with_service(service))
            .and_then(test_connection_handler);

        let cors = create_cors_filter(&self.config.api.cors_origins).build();

        health
            .or(okx_test)
            .with(cors)
            .recover(handle_rejection)
    }

    /// Full route tree as served, exposed for `warp::test` exercises.
    pub fn test_routes(
        &self,
    ) -> impl Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
        self.create_routes()
    }
}
