//! # Request/Response Tracing
//!
//! Configures `tower_http::trace::TraceLayer` for structured request
//! logging with tracing spans.

use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the `TraceLayer` for the coins API.
///
/// Each request gets an INFO span with method and URI; the response status
/// and latency are logged when the response is produced. The `Authorization`
/// header is not recorded.
///
/// 5xx classification is logged at DEBUG. The ERROR entry for an internal
/// failure is written by `AppError`, which carries the detail.
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
        .on_failure(DefaultOnFailure::new().level(Level::DEBUG))
}
