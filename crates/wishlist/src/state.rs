//! Application state.
//!
//! The state handed to every request handler: the wishlist store over the
//! configured key-value backend and the identity provider. Backends and
//! providers are selected via feature flags.

use std::sync::Arc;

use axum::extract::FromRef;
use wishlist_core::auth::IdentityProvider;
use wishlist_core::storage::KeyValueBackend;

use crate::auth::AuthState;
use crate::config::Config;
use crate::store::WishlistStore;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: WishlistStore,
    pub auth: AuthState,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl AppState {
    /// Creates a new AppState with the given backend and identity provider.
    pub fn build(
        backend: Arc<dyn KeyValueBackend>,
        provider: Arc<dyn IdentityProvider>,
        config: &Config,
    ) -> Self {
        Self {
            store: WishlistStore::new(backend, config.index_name.clone()),
            auth: AuthState::new(provider),
        }
    }
}

// ============================================================================
// Identity providers
// ============================================================================

#[cfg(not(feature = "auth-mock"))]
fn identity_provider(config: &Config) -> anyhow::Result<Arc<dyn IdentityProvider>> {
    use crate::auth::UserInfoProvider;

    if config.mock_tokens.is_some() {
        tracing::warn!("MOCK_TOKENS is ignored without the 'auth-mock' feature");
    }

    let base_url = config
        .oauth2_base_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("OAUTH2_BASE_URL must be set"))?;

    tracing::info!(%base_url, "Resolving bearer tokens through OAuth2 userinfo");
    let provider = UserInfoProvider::new(base_url, config.request_timeout())?;
    Ok(Arc::new(provider))
}

#[cfg(feature = "auth-mock")]
fn identity_provider(config: &Config) -> anyhow::Result<Arc<dyn IdentityProvider>> {
    use crate::auth::MockProvider;

    if config.oauth2_base_url.is_some() {
        tracing::warn!("OAUTH2_BASE_URL is ignored with the 'auth-mock' feature");
    }

    let provider = MockProvider::from_pairs(config.mock_tokens.as_deref().unwrap_or_default())
        .map_err(|e| anyhow::anyhow!("invalid MOCK_TOKENS: {e}"))?;

    tracing::warn!("Using mock identity provider");
    Ok(Arc::new(provider))
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryBackend;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for local development without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let backend = Arc::new(InMemoryBackend::new(config.index_name.clone()));
            tracing::info!("Using in-memory storage");

            Ok(Self::build(backend, identity_provider(config)?, config))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::DynamoDbBackend;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);
            let backend = Arc::new(DynamoDbBackend::new(
                dynamodb_client,
                config.table_name.clone(),
            ));
            tracing::info!(table = %config.table_name, "Using DynamoDB storage");

            Ok(Self::build(backend, identity_provider(config)?, config))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::auth::MockProvider;
    use crate::storage::InMemoryBackend;
    use wishlist_core::storage::keys::WISHLIST_ID_INDEX;

    pub const OWNER_TOKEN: &str = "token-a";
    pub const OTHER_TOKEN: &str = "token-b";

    impl Default for AppState {
        fn default() -> Self {
            let provider = MockProvider::default()
                .with_token(OWNER_TOKEN, "a@x.com")
                .with_token(OTHER_TOKEN, "b@x.com");

            Self {
                store: WishlistStore::new(Arc::new(InMemoryBackend::default()), WISHLIST_ID_INDEX),
                auth: AuthState::new(Arc::new(provider)),
            }
        }
    }
}

#[cfg(test)]
pub use test_support::{OTHER_TOKEN, OWNER_TOKEN};
