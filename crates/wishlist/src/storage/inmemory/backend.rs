//! In-memory key-value backend implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use wishlist_core::storage::{
    keys::WISHLIST_ID_INDEX, AttributeEdit, KeyValueBackend, Result, Row, RowKey,
    SortKeyCondition, StoreError, UpdateCondition,
};

type Attributes = BTreeMap<String, String>;

/// In-memory key-value backend.
///
/// Serves a single secondary index on the sort key. The index is read from
/// the same map, so unlike DynamoDB it never lags behind writes.
#[derive(Debug, Clone)]
pub struct InMemoryBackend {
    rows: Arc<RwLock<BTreeMap<RowKey, Attributes>>>,
    index_name: String,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new(WISHLIST_ID_INDEX)
    }
}

impl InMemoryBackend {
    /// Creates an empty backend serving the named sort key index.
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
            index_name: index_name.into(),
        }
    }

    /// Number of stored rows.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

fn to_row(key: &RowKey, attributes: &Attributes) -> Row {
    Row {
        key: key.clone(),
        attributes: attributes.clone(),
    }
}

fn apply_edits(attributes: &mut Attributes, edits: &[AttributeEdit]) {
    for edit in edits {
        match edit {
            AttributeEdit::Set { name, value } => {
                attributes.insert(name.clone(), value.clone());
            }
            AttributeEdit::Remove { name } => {
                attributes.remove(name);
            }
        }
    }
}

#[async_trait]
impl KeyValueBackend for InMemoryBackend {
    async fn query(&self, partition_key: &str, condition: SortKeyCondition) -> Result<Vec<Row>> {
        let rows = self.rows.read().await;
        Ok(rows
            .range(RowKey::new(partition_key, "")..)
            .take_while(|(key, _)| key.pk == partition_key)
            .filter(|(key, _)| condition.matches(&key.sk))
            .map(|(key, attributes)| to_row(key, attributes))
            .collect())
    }

    async fn query_by_index(&self, index_name: &str, sort_key: &str) -> Result<Vec<Row>> {
        if index_name != self.index_name {
            return Err(StoreError::QueryFailed(format!(
                "Unknown index: {index_name}"
            )));
        }

        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|(key, _)| key.sk == sort_key)
            .map(|(key, attributes)| to_row(key, attributes))
            .collect())
    }

    async fn put(&self, row: Row) -> Result<()> {
        let mut rows = self.rows.write().await;
        rows.insert(row.key, row.attributes);
        Ok(())
    }

    async fn update(
        &self,
        key: RowKey,
        edits: &[AttributeEdit],
        condition: UpdateCondition,
    ) -> Result<Row> {
        let mut rows = self.rows.write().await;

        if condition == UpdateCondition::MustExist && !rows.contains_key(&key) {
            return Err(StoreError::NotFound {
                entity_type: "Row",
                id: key.to_string(),
            });
        }

        let attributes = rows.entry(key.clone()).or_default();
        apply_edits(attributes, edits);
        Ok(to_row(&key, attributes))
    }

    async fn delete(&self, key: RowKey) -> Result<()> {
        let mut rows = self.rows.write().await;
        rows.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pk: &str, sk: &str) -> Row {
        Row::new(RowKey::new(pk, sk)).with("name", sk)
    }

    #[tokio::test]
    async fn test_query_stays_within_partition() {
        let backend = InMemoryBackend::default();
        backend.put(row("a@x.com", "wishlist_1")).await.unwrap();
        backend.put(row("a@x.com", "wishlist_2")).await.unwrap();
        backend.put(row("a@x.com.au", "wishlist_3")).await.unwrap();
        backend.put(row("b@x.com", "wishlist_4")).await.unwrap();

        let rows = backend
            .query("a@x.com", SortKeyCondition::Any)
            .await
            .unwrap();

        let sks: Vec<&str> = rows.iter().map(|r| r.key.sk.as_str()).collect();
        assert_eq!(sks, vec!["wishlist_1", "wishlist_2"]);
    }

    #[tokio::test]
    async fn test_query_applies_sort_key_condition() {
        let backend = InMemoryBackend::default();
        backend.put(row("wishlist_1", "item_a")).await.unwrap();
        backend.put(row("wishlist_1", "other_b")).await.unwrap();

        let rows = backend
            .query(
                "wishlist_1",
                SortKeyCondition::BeginsWith("item_".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key.sk, "item_a");
    }

    #[tokio::test]
    async fn test_query_by_index_finds_sort_key_across_partitions() {
        let backend = InMemoryBackend::default();
        backend.put(row("a@x.com", "wishlist_1")).await.unwrap();
        backend.put(row("b@x.com", "wishlist_2")).await.unwrap();

        let rows = backend
            .query_by_index(WISHLIST_ID_INDEX, "wishlist_2")
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key.pk, "b@x.com");
    }

    #[tokio::test]
    async fn test_query_by_unknown_index_fails() {
        let backend = InMemoryBackend::default();
        let result = backend.query_by_index("GSI1", "wishlist_1").await;
        assert!(matches!(result, Err(StoreError::QueryFailed(_))));
    }

    #[tokio::test]
    async fn test_update_must_exist_writes_nothing() {
        let backend = InMemoryBackend::default();
        let result = backend
            .update(
                RowKey::new("wishlist_1", "item_x"),
                &[AttributeEdit::set("description", "Book")],
                UpdateCondition::MustExist,
            )
            .await;

        assert!(matches!(result, Err(StoreError::NotFound { .. })));
        assert_eq!(backend.len().await, 0);
    }

    #[tokio::test]
    async fn test_update_sets_and_removes() {
        let backend = InMemoryBackend::default();
        let key = RowKey::new("wishlist_1", "item_x");
        backend
            .put(
                Row::new(key.clone())
                    .with("description", "Book")
                    .with("url", "https://x.io"),
            )
            .await
            .unwrap();

        let updated = backend
            .update(
                key,
                &[
                    AttributeEdit::set("description", "Lamp"),
                    AttributeEdit::remove("url"),
                    AttributeEdit::set("price", "10"),
                ],
                UpdateCondition::MustExist,
            )
            .await
            .unwrap();

        assert_eq!(updated.get("description"), Some("Lamp"));
        assert_eq!(updated.get("url"), None);
        assert_eq!(updated.get("price"), Some("10"));
    }

    #[tokio::test]
    async fn test_upsert_creates_row() {
        let backend = InMemoryBackend::default();
        let row = backend
            .update(
                RowKey::new("a@x.com", "wishlist_1"),
                &[AttributeEdit::set("name", "Birthday")],
                UpdateCondition::Upsert,
            )
            .await
            .unwrap();

        assert_eq!(row.get("name"), Some("Birthday"));
        assert_eq!(backend.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let backend = InMemoryBackend::default();
        let key = RowKey::new("a@x.com", "wishlist_1");
        backend.put(Row::new(key.clone())).await.unwrap();

        backend.delete(key.clone()).await.unwrap();
        backend.delete(key).await.unwrap();

        assert_eq!(backend.len().await, 0);
    }
}
