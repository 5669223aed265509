//! Item API operations.

use reqwest::Method;
use wishlist_core::wishlist::{Item, ItemRequest};

use super::WishlistClient;
use crate::error::Result;

impl WishlistClient {
    /// List the items of a wishlist.
    pub async fn list_items(&self, list_id: &str) -> Result<Vec<Item>> {
        let response = self
            .request(Method::GET, &format!("/wishlists/{}/items", list_id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Add an item to a wishlist.
    pub async fn create_item(&self, list_id: &str, req: &ItemRequest) -> Result<Item> {
        let response = self
            .request(Method::POST, &format!("/wishlists/{}/items", list_id))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Replace an item. Omitted `url`/`price` are cleared.
    pub async fn update_item(
        &self,
        list_id: &str,
        item_id: &str,
        req: &ItemRequest,
    ) -> Result<Item> {
        let response = self
            .request(
                Method::PUT,
                &format!("/wishlists/{}/items/{}", list_id, item_id),
            )
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete an item.
    pub async fn delete_item(&self, list_id: &str, item_id: &str) -> Result<()> {
        let response = self
            .request(
                Method::DELETE,
                &format!("/wishlists/{}/items/{}", list_id, item_id),
            )
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
