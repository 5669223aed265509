//! Wishlist API operations.

use reqwest::Method;
use wishlist_core::wishlist::{CreateWishlistRequest, UpdateWishlistRequest, Wishlist};

use super::WishlistClient;
use crate::error::Result;

impl WishlistClient {
    /// List the caller's wishlists.
    pub async fn list_wishlists(&self) -> Result<Vec<Wishlist>> {
        let response = self.request(Method::GET, "/wishlists").send().await?;
        self.handle_response(response).await
    }

    /// Create a new wishlist.
    pub async fn create_wishlist(&self, name: &str) -> Result<Wishlist> {
        let response = self
            .request(Method::POST, "/wishlists")
            .json(&CreateWishlistRequest::new(name))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get a wishlist by ID; `None` when it does not exist.
    pub async fn get_wishlist(&self, id: &str) -> Result<Option<Wishlist>> {
        let response = self
            .request(Method::GET, &format!("/wishlists/{}", id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Rename a wishlist.
    pub async fn update_wishlist(&self, id: &str, name: &str) -> Result<Wishlist> {
        let response = self
            .request(Method::PUT, &format!("/wishlists/{}", id))
            .json(&UpdateWishlistRequest::new(name))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete a wishlist and its items.
    pub async fn delete_wishlist(&self, id: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/wishlists/{}", id))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
