use async_trait::async_trait;

use super::{AttributeEdit, Result, Row, RowKey, SortKeyCondition, UpdateCondition};

/// A partitioned key-value table with a secondary index on the sort key.
///
/// Reads are strongly consistent per row. The secondary index may lag
/// behind writes.
#[async_trait]
pub trait KeyValueBackend: Send + Sync {
    /// Returns every row of a partition whose sort key satisfies `condition`.
    async fn query(&self, partition_key: &str, condition: SortKeyCondition) -> Result<Vec<Row>>;

    /// Returns every row whose sort key equals `sort_key` through the named
    /// secondary index.
    async fn query_by_index(&self, index_name: &str, sort_key: &str) -> Result<Vec<Row>>;

    /// Writes a row, replacing any existing row with the same key.
    async fn put(&self, row: Row) -> Result<()>;

    /// Applies attribute edits to a row and returns the row after the update.
    ///
    /// With [`UpdateCondition::MustExist`] a missing row fails with
    /// `StoreError::NotFound` and nothing is written.
    async fn update(
        &self,
        key: RowKey,
        edits: &[AttributeEdit],
        condition: UpdateCondition,
    ) -> Result<Row>;

    /// Deletes a row. Deleting a missing row succeeds.
    async fn delete(&self, key: RowKey) -> Result<()>;
}
