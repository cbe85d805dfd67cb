//! # Request Metrics
//!
//! In-process request counters using atomics. No exporter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

/// Shared metrics state.
#[derive(Debug, Clone, Default)]
pub struct ApiMetrics {
    request_count: Arc<AtomicU64>,
    rejection_count: Arc<AtomicU64>,
    failure_count: Arc<AtomicU64>,
}

impl ApiMetrics {
    /// Create a new metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total requests seen.
    pub fn requests(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Requests answered with a 4xx status.
    pub fn rejections(&self) -> u64 {
        self.rejection_count.load(Ordering::Relaxed)
    }

    /// Requests answered with a 5xx status.
    pub fn failures(&self) -> u64 {
        self.failure_count.load(Ordering::Relaxed)
    }
}

/// Middleware that counts every response by status class.
pub async fn metrics_middleware(
    State(metrics): State<ApiMetrics>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    metrics.request_count.fetch_add(1, Ordering::Relaxed);
    if response.status().is_client_error() {
        metrics.rejection_count.fetch_add(1, Ordering::Relaxed);
    } else if response.status().is_server_error() {
        metrics.failure_count.fetch_add(1, Ordering::Relaxed);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn test_app(metrics: ApiMetrics) -> Router {
        Router::new()
            .route("/ok", get(|| async { StatusCode::OK }))
            .route("/bad", get(|| async { StatusCode::BAD_REQUEST }))
            .route("/boom", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .layer(from_fn_with_state(metrics, metrics_middleware))
    }

    async fn hit(app: &Router, uri: &str) {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn counts_by_status_class() {
        let metrics = ApiMetrics::new();
        let app = test_app(metrics.clone());

        hit(&app, "/ok").await;
        hit(&app, "/ok").await;
        hit(&app, "/bad").await;
        hit(&app, "/boom").await;

        assert_eq!(metrics.requests(), 4);
        assert_eq!(metrics.rejections(), 1);
        assert_eq!(metrics.failures(), 1);
    }

    #[test]
    fn new_metrics_start_at_zero() {
        let metrics = ApiMetrics::new();
        assert_eq!(metrics.requests(), 0);
        assert_eq!(metrics.rejections(), 0);
        assert_eq!(metrics.failures(), 0);
    }
}
