//! Response envelope shared by the datafeed routes.
//!
//! Success bodies are flattened into `{..., message: "Success", statusCode: 200,
//! success: true}`; failures become `{message, statusCode, success: false}` with
//! the matching HTTP status.

use crate::error::AdapterError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Map, Value};

pub const SUCCESS_MESSAGE: &str = "Success";

/// Wrap `body` in the success envelope.
///
/// Object bodies are flattened; anything else is placed under `data`.
pub fn success<T: Serialize>(body: &T) -> Response {
    let value = match serde_json::to_value(body) {
        Ok(value) => value,
        Err(e) => return ApiError::internal(format!("Failed to encode response: {e}")).into_response(),
    };

    let mut fields = match value {
        Value::Object(fields) => fields,
        other => {
            let mut fields = Map::new();
            fields.insert("data".to_string(), other);
            fields
        }
    };
    fields.insert("message".to_string(), json!(SUCCESS_MESSAGE));
    fields.insert("statusCode".to_string(), json!(StatusCode::OK.as_u16()));
    fields.insert("success".to_string(), json!(true));

    (StatusCode::OK, Json(Value::Object(fields))).into_response()
}

/// A failed request, rendered as the failure envelope.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "message": self.message,
            "statusCode": self.status.as_u16(),
            "success": false,
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<AdapterError> for ApiError {
    fn from(e: AdapterError) -> Self {
        let status = match &e {
            AdapterError::SymbolNotFound(_) | AdapterError::PairNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            AdapterError::InvalidResolution(_) => StatusCode::BAD_REQUEST,
            AdapterError::Arithmetic(_) | AdapterError::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AdapterError::UpstreamQueryFailed(_) => StatusCode::BAD_GATEWAY,
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", e);
        }
        ApiError::new(status, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphqlError;

    async fn body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_success_flattens_objects() {
        let response = success(&json!({ "s": "no_data" }));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body(response).await,
            json!({ "s": "no_data", "message": "Success", "statusCode": 200, "success": true })
        );
    }

    #[tokio::test]
    async fn test_success_wraps_scalars() {
        let response = success(&42);
        assert_eq!(
            body(response).await,
            json!({ "data": 42, "message": "Success", "statusCode": 200, "success": true })
        );
    }

    #[tokio::test]
    async fn test_failure_envelope() {
        let response = ApiError::from(AdapterError::SymbolNotFound("x".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body(response).await,
            json!({ "message": "Symbol not found: x", "statusCode": 404, "success": false })
        );
    }

    #[test]
    fn test_status_mapping() {
        let status = |e: AdapterError| ApiError::from(e).status;
        assert_eq!(status(AdapterError::InvalidResolution("abc".into())), StatusCode::BAD_REQUEST);
        assert_eq!(
            status(AdapterError::PairNotFound { token0: "a".into(), token1: "b".into() }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(AdapterError::UpstreamQueryFailed(GraphqlError::Timeout)),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status(AdapterError::Configuration("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
