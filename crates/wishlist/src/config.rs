use std::{env, time::Duration};

use wishlist_core::storage::keys::WISHLIST_ID_INDEX;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding lists and items (default: "wishlist")
    pub table_name: String,
    /// Secondary index on the sort key (default: "wishlist_id")
    pub index_name: String,
    /// Base URL of the OAuth2 provider; `/userinfo` is appended.
    pub oauth2_base_url: Option<String>,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// `token=email` pairs for the mock identity provider.
    pub mock_tokens: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - DynamoDB table name (default: "wishlist")
    /// - `WISHLIST_INDEX_NAME` - sort key index name (default: "wishlist_id")
    /// - `OAUTH2_BASE_URL` - OAuth2 provider base URL (required unless `auth-mock`)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    /// - `MOCK_TOKENS` - `token=email,...` pairs (`auth-mock` only)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: lookup("DYNAMODB_TABLE_NAME").unwrap_or_else(|| "wishlist".to_string()),
            index_name: lookup("WISHLIST_INDEX_NAME")
                .unwrap_or_else(|| WISHLIST_ID_INDEX.to_string()),
            oauth2_base_url: lookup("OAUTH2_BASE_URL").filter(|v| !v.is_empty()),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            mock_tokens: lookup("MOCK_TOKENS"),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]);

        assert_eq!(config.table_name, "wishlist");
        assert_eq!(config.index_name, "wishlist_id");
        assert_eq!(config.oauth2_base_url, None);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.mock_tokens, None);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DYNAMODB_TABLE_NAME", "wishlist-prod"),
            ("OAUTH2_BASE_URL", "https://id.example.com/oauth2"),
            ("REQUEST_TIMEOUT_SECONDS", "3"),
        ]);

        assert_eq!(config.table_name, "wishlist-prod");
        assert_eq!(
            config.oauth2_base_url.as_deref(),
            Some("https://id.example.com/oauth2")
        );
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        let config = config_from(&[("REQUEST_TIMEOUT_SECONDS", "soon")]);
        assert_eq!(config.request_timeout_seconds, 10);
    }

    #[test]
    fn test_empty_oauth2_base_url_is_unset() {
        let config = config_from(&[("OAUTH2_BASE_URL", "")]);
        assert_eq!(config.oauth2_base_url, None);
    }
}
