//! HTTP client for the wishlist API.

pub mod health;
pub mod items;
pub mod wishlists;

use crate::error::{ClientError, Result};

/// HTTP client for the wishlist API.
#[derive(Debug, Clone)]
pub struct WishlistClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl WishlistClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Send the given bearer token with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Create from environment (WISHLIST_URL or default, WISHLIST_TOKEN).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("WISHLIST_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
        let client = Self::new(base_url);
        match std::env::var("WISHLIST_TOKEN") {
            Ok(token) => client.with_token(token),
            Err(_) => client,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request, attaching the bearer token when present.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let response = check_status(response).await?;
        response.json().await.map_err(ClientError::from)
    }

    /// Handle responses without a body (204).
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        check_status(response).await.map(|_| ())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    let message = error_message(&body);

    Err(match status.as_u16() {
        403 => ClientError::Forbidden { message },
        404 => ClientError::NotFound { message },
        status => ClientError::ServerError { status, message },
    })
}

/// Extract the message of an `{"error": ...}` body, or return the body as is.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
