//! Bearer token authentication.
//!
//! Mutating routes resolve the caller's bearer token to a profile through an
//! [`IdentityProvider`]; the profile's email is the owner identity handed to
//! the store.

mod error;
mod extractors;
#[cfg(any(test, feature = "auth-mock"))]
mod mock;
#[cfg(any(test, not(feature = "auth-mock")))]
mod userinfo;

use std::sync::Arc;

use wishlist_core::auth::IdentityProvider;

pub use error::AuthError;
pub use extractors::CurrentOwner;
#[cfg(any(test, feature = "auth-mock"))]
pub use mock::MockProvider;
#[cfg(any(test, not(feature = "auth-mock")))]
pub use userinfo::UserInfoProvider;

/// Shared state for authentication.
#[derive(Clone)]
pub struct AuthState {
    pub provider: Arc<dyn IdentityProvider>,
}

impl AuthState {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }
}
