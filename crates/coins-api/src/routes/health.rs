//! # Health Probes
//!
//! Unauthenticated liveness and readiness endpoints.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of both probes: `{"status":"ok"}` or `{"status":"ready"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Router for `/health/*`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
}

/// Liveness probe. Always returns 200 if the process is running.
async fn liveness() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

/// Readiness probe. The store is initialized during bootstrap, before the
/// router exists, so a serving process is ready.
async fn readiness() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ready" })
}
