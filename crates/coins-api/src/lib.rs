//! # coins-api: Axum API Service for Coin Balances
//!
//! A single authenticated lookup endpoint: given a username and its token,
//! return the user's coin balance.
//!
//! ## API Surface
//!
//! | Route                    | Module                  | Auth     |
//! |--------------------------|-------------------------|----------|
//! | `GET /account/coins`     | [`routes::account`]     | gate     |
//! | `GET /health/liveness`   | [`routes::health`]      | none     |
//! | `GET /health/readiness`  | [`routes::health`]      | none     |
//!
//! ## Pipeline (execution order)
//!
//! ```text
//! NormalizePath → TraceLayer → MetricsMiddleware → Router → AuthorizationGate → Handler
//! ```
//!
//! The gate is a route layer, so unknown paths get a plain 404 rather than
//! an authorization failure.

pub mod auth;
pub mod bootstrap;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::{AppConfig, AppState};

use axum::middleware::from_fn_with_state;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Assemble the application router with all routes and middleware.
///
/// Health probes are mounted outside the gate so they remain accessible
/// without credentials.
pub fn app(state: AppState) -> Router {
    let account = routes::account::router()
        .route_layer(from_fn_with_state(state.clone(), auth::authorize));

    Router::new()
        .merge(routes::health::router())
        .merge(account)
        .layer(from_fn_with_state(
            state.metrics.clone(),
            middleware::metrics::metrics_middleware,
        ))
        .layer(middleware::tracing_layer::layer())
        .with_state(state)
}

/// The servable application: [`app`] behind trailing-slash normalization,
/// so `/account/coins/` routes like `/account/coins`.
///
/// Path normalization must wrap the router rather than sit inside it,
/// because routing happens before router-level layers run.
pub fn service(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app(state))
}
