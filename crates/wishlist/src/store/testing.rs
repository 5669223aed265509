//! Test doubles for the store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use wishlist_core::storage::{
    keys::WISHLIST_ID_INDEX, AttributeEdit, KeyValueBackend, Result, Row, RowKey,
    SortKeyCondition, StoreError, UpdateCondition,
};

use super::WishlistStore;
use crate::storage::InMemoryBackend;

pub fn store_with(backend: impl KeyValueBackend + 'static) -> WishlistStore {
    WishlistStore::new(Arc::new(backend), WISHLIST_ID_INDEX)
}

/// Wraps the in-memory backend and fails selected calls.
pub struct FailingBackend {
    inner: InMemoryBackend,
    deletes_before_failure: Option<usize>,
    deletes: AtomicUsize,
    fail_queries: bool,
}

impl FailingBackend {
    /// Lets `count` deletes through, then fails every delete.
    pub fn fail_deletes_after(inner: InMemoryBackend, count: usize) -> Self {
        Self {
            inner,
            deletes_before_failure: Some(count),
            deletes: AtomicUsize::new(0),
            fail_queries: false,
        }
    }

    /// Fails every partition query.
    pub fn fail_queries(inner: InMemoryBackend) -> Self {
        Self {
            inner,
            deletes_before_failure: None,
            deletes: AtomicUsize::new(0),
            fail_queries: true,
        }
    }
}

#[async_trait]
impl KeyValueBackend for FailingBackend {
    async fn query(&self, partition_key: &str, condition: SortKeyCondition) -> Result<Vec<Row>> {
        if self.fail_queries {
            return Err(StoreError::QueryFailed("injected query failure".to_string()));
        }
        self.inner.query(partition_key, condition).await
    }

    async fn query_by_index(&self, index_name: &str, sort_key: &str) -> Result<Vec<Row>> {
        self.inner.query_by_index(index_name, sort_key).await
    }

    async fn put(&self, row: Row) -> Result<()> {
        self.inner.put(row).await
    }

    async fn update(
        &self,
        key: RowKey,
        edits: &[AttributeEdit],
        condition: UpdateCondition,
    ) -> Result<Row> {
        self.inner.update(key, edits, condition).await
    }

    async fn delete(&self, key: RowKey) -> Result<()> {
        let done = self.deletes.fetch_add(1, Ordering::SeqCst);
        if matches!(self.deletes_before_failure, Some(limit) if done >= limit) {
            return Err(StoreError::ConnectionFailed(
                "injected delete failure".to_string(),
            ));
        }
        self.inner.delete(key).await
    }
}
