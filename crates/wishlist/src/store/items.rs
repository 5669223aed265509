//! Item operations of the wishlist store.

use wishlist_core::storage::{
    codec, keys, OwnerCheck, Result, SortKeyCondition, StoreError, UpdateCondition,
};
use wishlist_core::wishlist::{new_id, Item, ItemFields};

use super::{not_found_as, WishlistStore};

impl WishlistStore {
    /// Items of a list. Anyone holding the list id may read them.
    #[tracing::instrument(skip(self))]
    pub async fn list_items(&self, list_id: &str) -> Result<Vec<Item>> {
        let rows = self
            .backend
            .query(
                &keys::item_partition(list_id),
                SortKeyCondition::BeginsWith(keys::ITEM_PREFIX.to_string()),
            )
            .await?;

        tracing::debug!(count = rows.len(), "Listed items");
        rows.iter().map(codec::row_to_item).collect()
    }

    /// Adds an item to a list owned by `owner`.
    ///
    /// Empty `url` and `price` are not stored and come back as `None`.
    #[tracing::instrument(skip(self))]
    pub async fn create_item(
        &self,
        list_id: &str,
        owner: &str,
        fields: ItemFields,
    ) -> Result<Item> {
        self.authorize(list_id, owner).await?;

        let item = Item::from_fields(new_id(), fields);
        self.backend.put(codec::item_to_row(list_id, &item)).await?;

        tracing::info!(wishlist_id = %list_id, item_id = %item.id, "Created item");
        Ok(item)
    }

    /// Replaces the attributes of an existing item.
    ///
    /// `url` and `price` are removed when empty. Updating an unknown item
    /// fails with `NotFound` and writes nothing.
    #[tracing::instrument(skip(self))]
    pub async fn update_item(
        &self,
        list_id: &str,
        item_id: &str,
        owner: &str,
        fields: ItemFields,
    ) -> Result<Item> {
        self.authorize(list_id, owner).await?;

        let row = self
            .backend
            .update(
                keys::item_key(list_id, item_id),
                &codec::item_edits(&fields),
                UpdateCondition::MustExist,
            )
            .await
            .map_err(|e| not_found_as(e, StoreError::item_not_found(item_id)))?;

        tracing::info!(wishlist_id = %list_id, %item_id, "Updated item");
        codec::row_to_item(&row)
    }

    /// Deletes an item of a list owned by `owner`.
    ///
    /// Deleting an unknown item of an existing list succeeds.
    pub async fn delete_item(&self, list_id: &str, item_id: &str, owner: &str) -> Result<()> {
        self.remove_item(list_id, item_id, owner, OwnerCheck::Enforce)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub(super) async fn remove_item(
        &self,
        list_id: &str,
        item_id: &str,
        owner: &str,
        check: OwnerCheck,
    ) -> Result<()> {
        if check == OwnerCheck::Enforce {
            self.authorize(list_id, owner).await?;
        }

        self.backend.delete(keys::item_key(list_id, item_id)).await?;

        tracing::info!(wishlist_id = %list_id, %item_id, "Deleted item");
        Ok(())
    }
}
