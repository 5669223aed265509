use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use wishlist_core::storage::{store_error_to_status_code, StoreError};
use wishlist_core::wishlist::WishlistError;

/// Error returned by the API handlers, rendered as `{"error": message}`.
#[derive(Debug)]
pub enum ApiError {
    /// Failure reported by the wishlist store.
    Store(StoreError),
    /// Payload that parsed but failed validation.
    Validation(WishlistError),
    /// Payload that is not the expected JSON.
    InvalidBody(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Store(error) => {
                let code = store_error_to_status_code(error);
                let status =
                    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                if status.is_server_error() {
                    tracing::error!(error = %error, "Store operation failed");
                }
                (status, error.to_string())
            }
            ApiError::Validation(error) => {
                tracing::warn!(error = %error, "Rejected invalid payload");
                (StatusCode::BAD_REQUEST, error.to_string())
            }
            ApiError::InvalidBody(message) => {
                tracing::warn!(error = %message, "Rejected malformed body");
                (StatusCode::BAD_REQUEST, message.clone())
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<WishlistError> for ApiError {
    fn from(err: WishlistError) -> Self {
        Self::Validation(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_access_denied_is_forbidden() {
        let (status, body) = render(ApiError::from(StoreError::AccessDenied {
            list_id: "l1".to_string(),
        }))
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "You do not own the requested list: l1");
    }

    #[tokio::test]
    async fn test_backend_failure_carries_description() {
        let (status, body) =
            render(ApiError::from(StoreError::QueryFailed("throttled".to_string()))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Query failed: throttled");
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request() {
        let (status, _) = render(ApiError::from(WishlistError::EmptyName)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
