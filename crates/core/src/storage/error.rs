use thiserror::Error;

/// Errors that can occur when parsing a tagged sort key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Unknown sort key tag: {0}")]
    UnknownTag(String),
    #[error("Sort key has no id: {0}")]
    MissingId(String),
    #[error("Expected a {expected} sort key, got: {key}")]
    UnexpectedKind { expected: &'static str, key: String },
}

/// Errors that can occur during store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("You do not own the requested list: {list_id}")]
    AccessDenied { list_id: String },
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl StoreError {
    pub fn wishlist_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Wishlist",
            id: id.into(),
        }
    }

    pub fn item_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Item",
            id: id.into(),
        }
    }
}

impl From<KeyError> for StoreError {
    fn from(error: KeyError) -> Self {
        Self::InvalidData(error.to_string())
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_denied_display() {
        let error = StoreError::AccessDenied {
            list_id: "abc".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "You do not own the requested list: abc"
        );
    }

    #[test]
    fn test_not_found_display() {
        assert_eq!(
            StoreError::wishlist_not_found("abc").to_string(),
            "Wishlist not found: abc"
        );
        assert_eq!(
            StoreError::item_not_found("def").to_string(),
            "Item not found: def"
        );
    }

    #[test]
    fn test_connection_failed_display() {
        let error = StoreError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_key_error_becomes_invalid_data() {
        let error: StoreError = KeyError::UnknownTag("list_1".to_string()).into();
        assert_eq!(
            error,
            StoreError::InvalidData("Unknown sort key tag: list_1".to_string())
        );
    }
}
