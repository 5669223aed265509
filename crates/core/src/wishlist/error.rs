use thiserror::Error;

/// Errors raised while validating wishlist and item payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WishlistError {
    #[error("Wishlist name cannot be empty")]
    EmptyName,
    #[error("Item description cannot be empty")]
    EmptyDescription,
    #[error("Not a valid URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wishlist_error_display() {
        assert_eq!(
            WishlistError::EmptyName.to_string(),
            "Wishlist name cannot be empty"
        );
        assert_eq!(
            WishlistError::InvalidUrl("ftp:/x".to_string()).to_string(),
            "Not a valid URL: ftp:/x"
        );
    }
}
