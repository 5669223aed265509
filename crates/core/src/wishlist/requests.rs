//! API request types for wishlist operations.
//!
//! Shared between the server and the client. Pure data, no I/O.

use serde::{Deserialize, Serialize};

/// Request payload for creating a wishlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWishlistRequest {
    pub name: String,
}

impl CreateWishlistRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request payload for renaming a wishlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWishlistRequest {
    pub name: String,
}

impl UpdateWishlistRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request payload for creating or replacing an item.
///
/// Used by both `POST /wishlists/{id}/items` and
/// `PUT /wishlists/{id}/items/{item_id}`: an update always sends the full set
/// of attributes, and an omitted `url`/`price` clears it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRequest {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl ItemRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            url: None,
            price: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }
}
