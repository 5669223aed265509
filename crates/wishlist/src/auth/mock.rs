//! Fixed-token identity provider for development and testing.

use std::collections::HashMap;

use async_trait::async_trait;
use wishlist_core::auth::{AuthError, IdentityProvider, Profile, Result};

/// Identity provider that maps known tokens to emails.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    tokens: HashMap<String, String>,
}

impl MockProvider {
    /// Parses `token=email` pairs separated by commas.
    ///
    /// Blank entries are skipped; an entry without `=` is an error.
    pub fn from_pairs(pairs: &str) -> std::result::Result<Self, String> {
        let mut tokens = HashMap::new();

        for entry in pairs.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (token, email) = entry
                .split_once('=')
                .ok_or_else(|| format!("expected token=email, got: {entry}"))?;
            tokens.insert(token.trim().to_string(), email.trim().to_string());
        }

        Ok(Self { tokens })
    }

    pub fn with_token(mut self, token: impl Into<String>, email: impl Into<String>) -> Self {
        self.tokens.insert(token.into(), email.into());
        self
    }
}

#[async_trait]
impl IdentityProvider for MockProvider {
    async fn profile(&self, token: &str) -> Result<Profile> {
        self.tokens
            .get(token)
            .map(Profile::with_email)
            .ok_or_else(|| AuthError::InvalidToken("unknown token".to_string()))
    }
}
