//! The wishlist store.
//!
//! Translates between wishlist entities and backend rows and enforces list
//! ownership on every mutation. Backend failures are propagated unchanged;
//! nothing is retried.

mod items;
#[cfg(test)]
mod testing;

use std::sync::Arc;

use wishlist_core::storage::{
    codec, ensure_owner, keys, require_owned, CascadeDelete, CascadeStep, KeyValueBackend,
    OwnerCheck, Result, SortKeyCondition, StoreError, UpdateCondition,
};
use wishlist_core::wishlist::{new_id, Wishlist};

/// Facade over a key-value backend holding lists and items in one table.
///
/// Cheap to clone; holds no state besides the injected backend.
#[derive(Clone)]
pub struct WishlistStore {
    backend: Arc<dyn KeyValueBackend>,
    index_name: String,
}

impl WishlistStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>, index_name: impl Into<String>) -> Self {
        Self {
            backend,
            index_name: index_name.into(),
        }
    }

    /// Lists owned by `owner`.
    #[tracing::instrument(skip(self))]
    pub async fn list_lists(&self, owner: &str) -> Result<Vec<Wishlist>> {
        let rows = self
            .backend
            .query(
                owner,
                SortKeyCondition::BeginsWith(keys::WISHLIST_PREFIX.to_string()),
            )
            .await?;

        tracing::debug!(count = rows.len(), "Listed wishlists");
        rows.iter().map(codec::row_to_wishlist).collect()
    }

    /// Creates a list with a fresh id. Not idempotent.
    #[tracing::instrument(skip(self))]
    pub async fn create_list(&self, owner: &str, name: &str) -> Result<Wishlist> {
        let wishlist = Wishlist::new(new_id(), name, owner);
        self.backend.put(codec::wishlist_to_row(&wishlist)).await?;

        tracing::info!(wishlist_id = %wishlist.id, "Created wishlist");
        Ok(wishlist)
    }

    /// Looks a list up by id through the secondary index.
    ///
    /// An unknown id is `None`, not an error. The index may lag behind a
    /// fresh write.
    #[tracing::instrument(skip(self))]
    pub async fn get_list(&self, id: &str) -> Result<Option<Wishlist>> {
        let rows = self
            .backend
            .query_by_index(&self.index_name, &keys::wishlist_sk(id))
            .await?;

        match rows.first() {
            Some(row) => Ok(Some(codec::row_to_wishlist(row)?)),
            None => {
                tracing::debug!("Wishlist not found");
                Ok(None)
            }
        }
    }

    /// Renames a list owned by `owner`.
    #[tracing::instrument(skip(self))]
    pub async fn update_list(&self, id: &str, name: &str, owner: &str) -> Result<Wishlist> {
        self.authorize(id, owner).await?;

        let row = self
            .backend
            .update(
                keys::wishlist_key(owner, id),
                &codec::rename_edits(name),
                UpdateCondition::MustExist,
            )
            .await
            .map_err(|e| not_found_as(e, StoreError::wishlist_not_found(id)))?;

        tracing::info!(wishlist_id = %id, "Updated wishlist");
        codec::row_to_wishlist(&row)
    }

    /// Deletes a list and every item under it.
    ///
    /// Deleting an unknown list is a no-op. Items are deleted one by one
    /// before the list row; a failure stops the cascade and is returned as
    /// is, leaving the remaining rows in place.
    #[tracing::instrument(skip(self))]
    pub async fn delete_list(&self, id: &str, owner: &str) -> Result<()> {
        let Some(wishlist) = self.get_list(id).await? else {
            tracing::debug!("Nothing to delete");
            return Ok(());
        };
        self.check_owner(&wishlist, owner)?;

        let item_rows = self
            .backend
            .query(
                &keys::item_partition(id),
                SortKeyCondition::BeginsWith(keys::ITEM_PREFIX.to_string()),
            )
            .await?;
        let plan = CascadeDelete::plan(&wishlist, &item_rows)?;

        for (completed, step) in plan.steps().iter().enumerate() {
            let result = match step {
                CascadeStep::Item { list_id, item_id } => {
                    self.remove_item(list_id, item_id, owner, OwnerCheck::Skip)
                        .await
                }
                CascadeStep::Wishlist { .. } => self.backend.delete(step.key()).await,
            };

            if let Err(err) = result {
                let progress = plan.progress(completed);
                tracing::error!(
                    wishlist_id = %id,
                    completed = progress.completed,
                    remaining = progress.remaining,
                    error = %err,
                    "Cascade delete interrupted"
                );
                return Err(err);
            }
        }

        tracing::info!(wishlist_id = %id, items = plan.len() - 1, "Deleted wishlist");
        Ok(())
    }

    /// Resolves a list for a mutation by `owner`.
    async fn authorize(&self, list_id: &str, owner: &str) -> Result<Wishlist> {
        let wishlist = self.get_list(list_id).await?;
        require_owned(wishlist, list_id, owner).inspect_err(|err| {
            if matches!(err, StoreError::AccessDenied { .. }) {
                tracing::warn!(wishlist_id = %list_id, %owner, "Ownership check failed");
            }
        })
    }

    fn check_owner(&self, wishlist: &Wishlist, owner: &str) -> Result<()> {
        ensure_owner(wishlist, owner).inspect_err(|_| {
            tracing::warn!(wishlist_id = %wishlist.id, %owner, "Ownership check failed");
        })
    }
}

/// Replaces a backend `NotFound` with the entity-specific one.
fn not_found_as(err: StoreError, not_found: StoreError) -> StoreError {
    match err {
        StoreError::NotFound { .. } => not_found,
        err => err,
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{store_with, FailingBackend};
    use super::*;
    use crate::storage::InMemoryBackend;
    use wishlist_core::wishlist::ItemFields;

    fn store() -> (WishlistStore, InMemoryBackend) {
        let backend = InMemoryBackend::default();
        (store_with(backend.clone()), backend)
    }

    #[tokio::test]
    async fn test_create_then_get_list() {
        let (store, _) = store();

        let created = store.create_list("a@x.com", "Birthday").await.unwrap();
        let fetched = store.get_list(&created.id).await.unwrap().unwrap();

        assert_eq!(fetched.name, "Birthday");
        assert_eq!(fetched.owner, "a@x.com");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_list_is_not_idempotent() {
        let (store, _) = store();

        let first = store.create_list("a@x.com", "Birthday").await.unwrap();
        let second = store.create_list("a@x.com", "Birthday").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.list_lists("a@x.com").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_unknown_list_is_none() {
        let (store, _) = store();
        assert_eq!(store.get_list("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_lists_only_returns_own_lists() {
        let (store, _) = store();
        store.create_list("a@x.com", "Birthday").await.unwrap();
        store.create_list("b@x.com", "Holidays").await.unwrap();

        let lists = store.list_lists("a@x.com").await.unwrap();

        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].name, "Birthday");
        assert!(store.list_lists("c@x.com").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_list_renames() {
        let (store, _) = store();
        let list = store.create_list("a@x.com", "Birthday").await.unwrap();

        let updated = store
            .update_list(&list.id, "Holidays", "a@x.com")
            .await
            .unwrap();

        assert_eq!(updated.name, "Holidays");
        assert_eq!(updated.id, list.id);
        assert_eq!(
            store.get_list(&list.id).await.unwrap().unwrap().name,
            "Holidays"
        );
    }

    #[tokio::test]
    async fn test_update_list_by_other_owner_is_denied() {
        let (store, _) = store();
        let list = store.create_list("a@x.com", "Birthday").await.unwrap();

        let result = store.update_list(&list.id, "Mine now", "b@x.com").await;

        assert_eq!(
            result,
            Err(StoreError::AccessDenied {
                list_id: list.id.clone()
            })
        );
        assert_eq!(
            store.get_list(&list.id).await.unwrap().unwrap().name,
            "Birthday"
        );
    }

    #[tokio::test]
    async fn test_update_unknown_list_is_not_found() {
        let (store, backend) = store();

        let result = store.update_list("missing", "Holidays", "a@x.com").await;

        assert_eq!(result, Err(StoreError::wishlist_not_found("missing")));
        assert_eq!(backend.len().await, 0);
    }

    #[tokio::test]
    async fn test_delete_list_cascades_to_items() {
        let (store, backend) = store();
        let list = store.create_list("a@x.com", "Birthday").await.unwrap();
        store
            .create_item(&list.id, "a@x.com", ItemFields::new("Book"))
            .await
            .unwrap();
        store
            .create_item(&list.id, "a@x.com", ItemFields::new("Lamp"))
            .await
            .unwrap();

        store.delete_list(&list.id, "a@x.com").await.unwrap();

        assert!(store.list_items(&list.id).await.unwrap().is_empty());
        assert_eq!(store.get_list(&list.id).await.unwrap(), None);
        assert_eq!(backend.len().await, 0);
    }

    #[tokio::test]
    async fn test_delete_unknown_list_is_noop() {
        let (store, _) = store();
        assert!(store.delete_list("missing", "a@x.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_list_by_other_owner_is_denied() {
        let (store, _) = store();
        let list = store.create_list("a@x.com", "Birthday").await.unwrap();
        store
            .create_item(&list.id, "a@x.com", ItemFields::new("Book"))
            .await
            .unwrap();

        let result = store.delete_list(&list.id, "b@x.com").await;

        assert!(matches!(result, Err(StoreError::AccessDenied { .. })));
        assert!(store.get_list(&list.id).await.unwrap().is_some());
        assert_eq!(store.list_items(&list.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_interrupted_cascade_keeps_list_row() {
        let inner = InMemoryBackend::default();
        let setup = store_with(inner.clone());
        let list = setup.create_list("a@x.com", "Birthday").await.unwrap();
        for description in ["Book", "Lamp", "Pen"] {
            setup
                .create_item(&list.id, "a@x.com", ItemFields::new(description))
                .await
                .unwrap();
        }

        let failing = FailingBackend::fail_deletes_after(inner.clone(), 1);
        let store = store_with(failing);

        let result = store.delete_list(&list.id, "a@x.com").await;

        assert!(matches!(result, Err(StoreError::ConnectionFailed(_))));
        assert!(setup.get_list(&list.id).await.unwrap().is_some());
        assert_eq!(setup.list_items(&list.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_backend_failure_is_propagated_unchanged() {
        let failing = FailingBackend::fail_queries(InMemoryBackend::default());
        let store = store_with(failing);

        let result = store.list_lists("a@x.com").await;

        assert_eq!(
            result,
            Err(StoreError::QueryFailed("injected query failure".to_string()))
        );
    }

    #[test]
    fn test_not_found_as_keeps_other_errors() {
        let err = StoreError::QueryFailed("boom".to_string());
        assert_eq!(
            not_found_as(err.clone(), StoreError::item_not_found("i")),
            err
        );
        assert_eq!(
            not_found_as(
                StoreError::NotFound {
                    entity_type: "Row",
                    id: "x".to_string()
                },
                StoreError::item_not_found("i")
            ),
            StoreError::item_not_found("i")
        );
    }
}
