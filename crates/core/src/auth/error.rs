use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Unauthorized")]
    MissingHeader,

    #[error("Authorization header is malformed")]
    MalformedHeader,

    #[error("invalid access token: {0}")]
    InvalidToken(String),

    #[error("missing required claim: {0}")]
    MissingClaim(String),

    #[error("identity provider error: {0}")]
    Provider(String),
}
