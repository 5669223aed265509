//! Pure validation and normalization of wishlist payloads.

use url::Url;

use super::{ItemFields, ItemRequest, WishlistError};

/// Treat an empty string the same as an absent value.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Validate a wishlist name.
pub fn validate_wishlist_name(name: &str) -> Result<(), WishlistError> {
    if name.trim().is_empty() {
        return Err(WishlistError::EmptyName);
    }
    Ok(())
}

/// Validate an item payload and turn it into store fields.
///
/// An empty `url` is treated as not set. A present `url` must be an absolute
/// http(s) URL.
pub fn validate_item_request(request: ItemRequest) -> Result<ItemFields, WishlistError> {
    if request.description.trim().is_empty() {
        return Err(WishlistError::EmptyDescription);
    }

    let url = non_empty(request.url);
    if let Some(raw) = &url {
        let parsed = Url::parse(raw).map_err(|_| WishlistError::InvalidUrl(raw.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
            return Err(WishlistError::InvalidUrl(raw.clone()));
        }
    }

    Ok(ItemFields {
        description: request.description,
        url,
        price: request.price,
    })
}
