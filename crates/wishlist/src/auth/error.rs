use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Auth errors of the server.
///
/// Wraps the core `AuthError` and adds the failures of building a provider,
/// which only happen at startup.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Core(#[from] wishlist_core::auth::AuthError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        use wishlist_core::auth::AuthError as CoreError;

        let (status, message) = match &self {
            AuthError::Core(core_err) => match core_err {
                CoreError::MissingHeader => (StatusCode::UNAUTHORIZED, self.to_string()),
                CoreError::MalformedHeader => (StatusCode::BAD_REQUEST, self.to_string()),
                CoreError::InvalidToken(_) | CoreError::MissingClaim(_) => {
                    tracing::warn!("Rejected credentials: {}", self);
                    (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
                }
                CoreError::Provider(_) => {
                    tracing::error!("Identity provider error: {}", self);
                    (
                        StatusCode::BAD_GATEWAY,
                        "Authentication provider error".to_string(),
                    )
                }
            },
            AuthError::Config(_) => {
                tracing::error!("Config error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
