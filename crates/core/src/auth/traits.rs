use async_trait::async_trait;

use super::{AuthError, Profile};

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Resolves a bearer token to the profile of the identity holding it.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fails with `InvalidToken` when the provider rejects the token and with
    /// `Provider` when it cannot be reached.
    async fn profile(&self, token: &str) -> Result<Profile>;
}
