//! Health check HTTP route handlers
//!
//! Provides endpoints for checking the health of the API:
//! - `GET /health` - Simple liveness check (returns 200 OK)
//! - `GET /health/ready` - Readiness check (verifies the entity store)
//! - `GET /health/live` - Kubernetes-style liveness probe

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::error::ApiResult;
use crate::repositories::{EntityStore, StoreStats};

/// Shared application state for health check handlers
#[derive(Clone)]
pub struct HealthState {
    /// Entity store probed by the readiness check
    pub store: Arc<EntityStore>,
}

impl HealthState {
    /// Create new health state
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }
}

/// Readiness probe response body
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub collections: StoreStats,
}

/// Create health check router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(simple_health))
        .route("/live", get(liveness_probe))
        .route("/ready", get(readiness_probe))
        .with_state(state)
}

/// Simple health check - always returns OK if the server is running
async fn simple_health() -> &'static str {
    "OK"
}

/// Liveness probe for Kubernetes
///
/// Returns 200 if the server process is running and can handle requests.
async fn liveness_probe() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness probe - checks every store collection can be read
///
/// # Response
/// - 200 OK with collection sizes
/// - 503 Service Unavailable if a collection lock is poisoned
async fn readiness_probe(State(state): State<HealthState>) -> ApiResult<Json<ReadinessResponse>> {
    let collections = state.store.stats()?;
    Ok(Json(ReadinessResponse {
        status: "ready",
        collections,
    }))
}
