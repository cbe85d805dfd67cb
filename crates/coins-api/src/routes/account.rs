//! # Account Routes
//!
//! `GET /account/coins?username=<name>`: coin balance of an authorized user.
//! Mounted behind the authorization gate; the handler assumes the caller
//! has already been checked.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

/// Query parameters of the balance lookup.
///
/// The single field is accepted as `username` or `Username`. Any other key,
/// or a repeated key, is a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoinBalanceParams {
    #[serde(rename = "username", alias = "Username")]
    pub username: String,
}

/// Successful balance response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoinBalanceResponse {
    pub status_code: u16,
    pub balance: i64,
}

/// Router for `/account/*`.
pub fn router() -> Router<AppState> {
    Router::new().route("/account/coins", get(get_coin_balance))
}

/// Look up the caller's coin balance.
///
/// A user who passed the gate but has no balance record gets a 404.
pub async fn get_coin_balance(
    State(state): State<AppState>,
    params: Result<Query<CoinBalanceParams>, QueryRejection>,
) -> Result<Json<CoinBalanceResponse>, AppError> {
    let Query(params) = params.map_err(|err| AppError::DecodeFailure(err.body_text()))?;
    let username = params.username;

    let store = Arc::clone(&state.store);
    let lookup = username.clone();
    let record = tokio::task::spawn_blocking(move || store.get_balance(&lookup))
        .await??
        .ok_or(AppError::RecordNotFound(username))?;

    Ok(Json(CoinBalanceResponse {
        status_code: StatusCode::OK.as_u16(),
        balance: record.balance,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::Request;
    use axum::response::Response;
    use coins_store::{CredentialRecord, Dataset, InMemoryStore};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Handler-only router (no gate), over the given dataset.
    fn test_app(dataset: Dataset) -> Router {
        let store = InMemoryStore::from_dataset(dataset)
            .unwrap()
            .with_latency(Duration::ZERO);
        router().with_state(AppState::new(Arc::new(store)))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn returns_stored_balance() {
        let response = get(test_app(Dataset::reference()), "/account/coins?username=maria").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            r#"{"StatusCode":200,"Balance":2500}"#
        );
    }

    #[tokio::test]
    async fn accepts_capitalized_key() {
        let response = get(test_app(Dataset::reference()), "/account/coins?Username=john").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: CoinBalanceResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body.balance, 500);
    }

    #[tokio::test]
    async fn missing_balance_record_is_404() {
        let dataset = Dataset {
            credentials: vec![CredentialRecord::new("ghost", "000XYZ")],
            balances: vec![],
        };
        let response = get(test_app(dataset), "/account/coins?username=ghost").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_string(response).await,
            r#"{"StatusCode":404,"Message":"No balance found for user."}"#
        );
    }

    #[tokio::test]
    async fn unknown_query_key_is_decode_failure() {
        let response = get(
            test_app(Dataset::reference()),
            "/account/coins?username=alex&debug=1",
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_string(response).await,
            r#"{"StatusCode":500,"Message":"An Unexpected Error Occured."}"#
        );
    }

    #[tokio::test]
    async fn missing_username_is_decode_failure() {
        let response = get(test_app(Dataset::reference()), "/account/coins").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn negative_and_extreme_balances_round_trip() {
        let dataset = Dataset {
            credentials: vec![],
            balances: vec![
                coins_store::BalanceRecord::new("debtor", -42),
                coins_store::BalanceRecord::new("whale", i64::MAX),
            ],
        };
        let app = test_app(dataset);
        let body = body_string(get(app.clone(), "/account/coins?username=debtor").await).await;
        assert_eq!(body, r#"{"StatusCode":200,"Balance":-42}"#);
        let body = body_string(get(app, "/account/coins?username=whale").await).await;
        assert_eq!(body, format!(r#"{{"StatusCode":200,"Balance":{}}}"#, i64::MAX));
    }
}
