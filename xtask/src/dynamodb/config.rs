//! Table configuration (Functional Core - pure data).

use wishlist_core::storage::keys::{PARTITION_KEY, SORT_KEY, WISHLIST_ID_INDEX};

/// The wishlist table: one `pk`/`sk` table holding lists and items, plus one
/// index that finds a list row by id.
///
/// Every key attribute is a string, the table bills per request and the
/// index projects all attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: String,
    pub sort_key: String,
    pub index: IndexConfig,
}

/// The secondary index. It has a partition key and no sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    pub name: String,
    pub partition_key: String,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }

    /// Key attributes to define on the table, without duplicates.
    ///
    /// The index is keyed on `sk`, which the table already defines.
    pub fn key_attributes(&self) -> Vec<&str> {
        let mut names = vec![self.partition_key.as_str(), self.sort_key.as_str()];
        if !names.contains(&self.index.partition_key.as_str()) {
            names.push(&self.index.partition_key);
        }
        names
    }
}

/// Returns the canonical table configuration for the wishlist table.
pub fn wishlist_table_config() -> TableConfig {
    TableConfig {
        table_name: "wishlist".to_string(),
        partition_key: PARTITION_KEY.to_string(),
        sort_key: SORT_KEY.to_string(),
        index: IndexConfig {
            name: WISHLIST_ID_INDEX.to_string(),
            partition_key: SORT_KEY.to_string(),
        },
    }
}
