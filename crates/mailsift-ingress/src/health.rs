//! Health endpoints
//!
//! - `/healthz` — liveness probe (200 OK whenever the server is running)
//! - `/readyz` — readiness probe (checks that upstream credentials exist)

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Health check state
#[derive(Debug, Clone)]
pub struct HealthState {
    /// Whether an upstream bearer token is configured
    pub upstream_configured: bool,
}

/// Create the health check router
pub fn router(state: HealthState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: None,
    })
}

async fn readyz(State(state): State<HealthState>) -> Response {
    if state.upstream_configured {
        Json(HealthResponse {
            status: "ready".to_string(),
            message: None,
        })
        .into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unavailable".to_string(),
                message: Some("no inference API token configured".to_string()),
            }),
        )
            .into_response()
    }
}
