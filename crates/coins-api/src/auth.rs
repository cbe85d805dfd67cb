//! # Authorization Gate
//!
//! Middleware that admits a request only when its `username` query
//! parameter and `Authorization` header match a stored credential.
//!
//! ## Token Format
//!
//! The header value is the raw token, compared byte-for-byte and
//! case-sensitively with the stored one:
//!
//! ```text
//! GET /account/coins?username=alex
//! Authorization: 123ABC
//! ```
//!
//! No scheme prefix (`Bearer `) is recognized or stripped.
//!
//! ## Outcomes
//!
//! | Condition                                  | Result                |
//! |--------------------------------------------|-----------------------|
//! | `username` or header absent/empty          | 400, no store lookup  |
//! | unknown user or token mismatch             | 400, same message     |
//! | store failure                              | 500                   |
//! | match                                      | request forwarded unchanged |

use std::sync::Arc;

use axum::extract::{Query, Request, State};
use axum::http::{header, HeaderMap, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::AppState;

/// Query fields the gate reads. Unknown keys are ignored here; the balance
/// handler applies its own, stricter decoding.
#[derive(Debug, Deserialize)]
struct GateParams {
    #[serde(default)]
    username: Option<String>,
}

/// Extract a non-empty `username` from the query string.
///
/// A query that cannot be decoded counts as a missing username.
fn query_username(uri: &Uri) -> Option<String> {
    Query::<GateParams>::try_from_uri(uri)
        .ok()
        .and_then(|Query(params)| params.username)
        .filter(|u| !u.is_empty())
}

/// Extract a non-empty `Authorization` header value as raw bytes.
fn presented_token(headers: &HeaderMap) -> Option<Vec<u8>> {
    headers
        .get(header::AUTHORIZATION)
        .map(|v| v.as_bytes().to_vec())
        .filter(|v| !v.is_empty())
}

/// Constant-time comparison of tokens.
///
/// When lengths differ, performs a dummy comparison so timing does not
/// depend on how much of the token matched.
fn constant_time_token_eq(provided: &[u8], expected: &[u8]) -> bool {
    if provided.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

/// Verify a username/token pair against the store.
///
/// The lookup runs on the blocking pool because stores may block.
pub async fn verify_credentials(
    state: &AppState,
    username: Option<String>,
    token: Option<Vec<u8>>,
) -> Result<(), AppError> {
    let (username, token) = match (username, token) {
        (Some(username), Some(token)) => (username, token),
        _ => {
            tracing::warn!("authorization rejected: missing username or token");
            return Err(AppError::MissingCredentials);
        }
    };

    let store = Arc::clone(&state.store);
    let lookup = username.clone();
    let record = tokio::task::spawn_blocking(move || store.get_credential(&lookup)).await??;

    match record {
        Some(record) if constant_time_token_eq(&token, record.token.as_bytes()) => Ok(()),
        Some(_) => {
            tracing::warn!(username = %username, "authorization rejected: token mismatch");
            Err(AppError::InvalidCredentials(username))
        }
        None => {
            tracing::warn!(username = %username, "authorization rejected: unknown user");
            Err(AppError::InvalidCredentials(username))
        }
    }
}

/// Gate middleware. Rejects unauthorized requests, otherwise passes the
/// original request to the next stage untouched.
pub async fn authorize(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let username = query_username(request.uri());
    let token = presented_token(request.headers());

    match verify_credentials(&state, username, token).await {
        Ok(()) => next.run(request).await,
        Err(err) => err.into_response(),
    }
}
