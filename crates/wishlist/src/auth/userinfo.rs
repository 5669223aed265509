//! OAuth2 `userinfo` identity provider.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;
use wishlist_core::auth::{AuthError as CoreError, IdentityProvider, Profile, Result};

use super::AuthError;

/// Resolves tokens by calling `GET {base_url}/userinfo` with the token as
/// bearer credentials.
pub struct UserInfoProvider {
    client: reqwest::Client,
    userinfo_url: Url,
}

impl UserInfoProvider {
    pub fn new(base_url: &str, timeout: Duration) -> std::result::Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Config(format!("failed to build HTTP client: {e}")))?;

        let userinfo_url = userinfo_url(base_url)
            .map_err(|e| AuthError::Config(format!("invalid OAuth2 base URL {base_url:?}: {e}")))?;

        Ok(Self {
            client,
            userinfo_url,
        })
    }
}

/// `{base_url}/userinfo`, keeping any path the base URL already has.
fn userinfo_url(base_url: &str) -> std::result::Result<Url, url::ParseError> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("userinfo")
}

#[async_trait]
impl IdentityProvider for UserInfoProvider {
    async fn profile(&self, token: &str) -> Result<Profile> {
        let response = self
            .client
            .get(self.userinfo_url.clone())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| CoreError::Provider(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::InvalidToken(format!(
                "userinfo returned {status}"
            )));
        }

        response
            .json::<Profile>()
            .await
            .map_err(|e| CoreError::Provider(format!("invalid userinfo response: {e}")))
    }
}
