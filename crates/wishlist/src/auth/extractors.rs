//! Axum extractors for authentication.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use wishlist_core::auth::{owner_identity, parse_bearer_token, AuthError as CoreError};

use super::{AuthError, AuthState};

/// Extractor for the authenticated owner identity (the profile's email).
///
/// Rejects with 401 when the header is missing or the token is refused, 400
/// when the header is malformed and 502 when the provider cannot be reached.
pub struct CurrentOwner(pub String);

impl<S> FromRequestParts<S> for CurrentOwner
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let header = match parts.headers.get(AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| CoreError::MalformedHeader)?),
            None => None,
        };
        let token = parse_bearer_token(header)?;

        let profile = auth_state.provider.profile(token).await?;
        let owner = owner_identity(&profile)?;

        Ok(CurrentOwner(owner.to_string()))
    }
}
