//! Pure functions for mapping store errors to HTTP status codes.

use super::StoreError;

/// Maps a [`StoreError`] to an HTTP status code.
///
/// - `AccessDenied` -> 403 (Forbidden)
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// `InvalidData` is a row that could not be decoded, so it is a server fault
/// rather than a bad request.
///
/// # Examples
///
/// ```
/// use wishlist_core::storage::{StoreError, store_error_to_status_code};
///
/// let error = StoreError::AccessDenied { list_id: "abc".to_string() };
/// assert_eq!(store_error_to_status_code(&error), 403);
/// ```
pub fn store_error_to_status_code(error: &StoreError) -> u16 {
    match error {
        StoreError::AccessDenied { .. } => 403,
        StoreError::NotFound { .. } => 404,
        StoreError::ConnectionFailed(_) => 503,
        StoreError::QueryFailed(_) => 500,
        StoreError::InvalidData(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_denied_maps_to_403() {
        let error = StoreError::AccessDenied {
            list_id: "l1".to_string(),
        };
        assert_eq!(store_error_to_status_code(&error), 403);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            store_error_to_status_code(&StoreError::item_not_found("i1")),
            404
        );
    }

    #[test]
    fn test_connection_failed_maps_to_503() {
        let error = StoreError::ConnectionFailed("dispatch failure".to_string());
        assert_eq!(store_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_backend_failures_map_to_500() {
        let query = StoreError::QueryFailed("throttled".to_string());
        let data = StoreError::InvalidData("missing name".to_string());
        assert_eq!(store_error_to_status_code(&query), 500);
        assert_eq!(store_error_to_status_code(&data), 500);
    }
}
