//! Health check handlers
//!
//! The root path is the liveness probe; `/health` adds a JSON view for
//! monitoring. Both sit outside the auth gate.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::handlers::AppState;

/// GET / - Liveness probe
///
/// Always answers 200 regardless of auth or CORS configuration.
pub async fn root() -> &'static str {
    "OK"
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status: "healthy" or "degraded"
    pub status: &'static str,
    /// Server version from Cargo.toml
    pub version: &'static str,
    /// Whether the database was reachable at startup
    pub database_connected: bool,
    /// Service name
    pub service: &'static str,
}

/// GET /health - Health check endpoint
///
/// Reports degraded when the process is running without a database.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_connected = state.products.is_some();

    let status = if database_connected {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database_connected,
        service: "catalog-server",
    })
}
