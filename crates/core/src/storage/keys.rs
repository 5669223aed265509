//! Single-table key scheme.
//!
//! Pure functions for building and parsing the composite keys of list and item
//! rows. The tag at the front of a sort key identifies the entity kind:
//!
//! | Row  | `pk`                 | `sk`                 |
//! |------|----------------------|----------------------|
//! | List | `<owner>`            | `wishlist_<list_id>` |
//! | Item | `wishlist_<list_id>` | `item_<item_id>`     |
//!
//! The `wishlist_id` secondary index is keyed on `sk` alone, so a list row can
//! be found from its id without knowing the owner.

use super::{KeyError, RowKey};

// ============================================================================
// Attribute names and prefixes
// ============================================================================

pub const PARTITION_KEY: &str = "pk";
pub const SORT_KEY: &str = "sk";

pub const WISHLIST_PREFIX: &str = "wishlist_";
pub const ITEM_PREFIX: &str = "item_";

/// Name of the secondary index on the sort key.
pub const WISHLIST_ID_INDEX: &str = "wishlist_id";

// ============================================================================
// Builders
// ============================================================================

/// Sort key of a list row, also the partition of its items.
///
/// Pattern: `wishlist_<list_id>`
pub fn wishlist_sk(list_id: &str) -> String {
    format!("{WISHLIST_PREFIX}{list_id}")
}

/// Primary key of a list row.
pub fn wishlist_key(owner: &str, list_id: &str) -> RowKey {
    RowKey::new(owner, wishlist_sk(list_id))
}

/// Partition holding the item rows of a list.
///
/// Pattern: `wishlist_<list_id>`
pub fn item_partition(list_id: &str) -> String {
    wishlist_sk(list_id)
}

/// Sort key of an item row.
///
/// Pattern: `item_<item_id>`
pub fn item_sk(item_id: &str) -> String {
    format!("{ITEM_PREFIX}{item_id}")
}

/// Primary key of an item row.
pub fn item_key(list_id: &str, item_id: &str) -> RowKey {
    RowKey::new(item_partition(list_id), item_sk(item_id))
}

// ============================================================================
// Parsing
// ============================================================================

/// A parsed sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    Wishlist(String),
    Item(String),
}

impl SortKey {
    /// The entity id without its tag.
    pub fn id(&self) -> &str {
        match self {
            Self::Wishlist(id) | Self::Item(id) => id,
        }
    }
}

/// Parse a sort key into its entity kind and id.
pub fn parse_sort_key(sk: &str) -> Result<SortKey, KeyError> {
    let parsed = if let Some(id) = sk.strip_prefix(WISHLIST_PREFIX) {
        SortKey::Wishlist(id.to_string())
    } else if let Some(id) = sk.strip_prefix(ITEM_PREFIX) {
        SortKey::Item(id.to_string())
    } else {
        return Err(KeyError::UnknownTag(sk.to_string()));
    };

    if parsed.id().is_empty() {
        return Err(KeyError::MissingId(sk.to_string()));
    }

    Ok(parsed)
}

/// Parse a sort key that must belong to a list row.
pub fn parse_wishlist_sk(sk: &str) -> Result<String, KeyError> {
    match parse_sort_key(sk)? {
        SortKey::Wishlist(id) => Ok(id),
        SortKey::Item(_) => Err(KeyError::UnexpectedKind {
            expected: "wishlist",
            key: sk.to_string(),
        }),
    }
}

/// Parse a sort key that must belong to an item row.
pub fn parse_item_sk(sk: &str) -> Result<String, KeyError> {
    match parse_sort_key(sk)? {
        SortKey::Item(id) => Ok(id),
        SortKey::Wishlist(_) => Err(KeyError::UnexpectedKind {
            expected: "item",
            key: sk.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_ID: &str = "9f86d081884c7d659a2feaa0c55ad015";
    const ITEM_ID: &str = "e3b0c44298fc1c149afbf4c8996fb924";

    #[test]
    fn test_wishlist_key() {
        let key = wishlist_key("a@x.com", LIST_ID);
        assert_eq!(key.pk, "a@x.com");
        assert_eq!(key.sk, "wishlist_9f86d081884c7d659a2feaa0c55ad015");
    }

    #[test]
    fn test_item_key() {
        let key = item_key(LIST_ID, ITEM_ID);
        assert_eq!(key.pk, "wishlist_9f86d081884c7d659a2feaa0c55ad015");
        assert_eq!(key.sk, "item_e3b0c44298fc1c149afbf4c8996fb924");
    }

    #[test]
    fn test_item_partition_matches_list_sort_key() {
        assert_eq!(item_partition(LIST_ID), wishlist_sk(LIST_ID));
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!(
            parse_sort_key(&wishlist_sk(LIST_ID)).unwrap(),
            SortKey::Wishlist(LIST_ID.to_string())
        );
        assert_eq!(
            parse_sort_key(&item_sk(ITEM_ID)).unwrap(),
            SortKey::Item(ITEM_ID.to_string())
        );
    }

    #[test]
    fn test_parse_sort_key_rejects_unknown_tag() {
        assert_eq!(
            parse_sort_key("order_123"),
            Err(KeyError::UnknownTag("order_123".to_string()))
        );
    }

    #[test]
    fn test_parse_sort_key_rejects_missing_id() {
        assert_eq!(
            parse_sort_key("item_"),
            Err(KeyError::MissingId("item_".to_string()))
        );
    }

    #[test]
    fn test_parse_kind_specific_sort_keys() {
        assert_eq!(parse_wishlist_sk("wishlist_abc").unwrap(), "abc");
        assert_eq!(parse_item_sk("item_def").unwrap(), "def");
        assert!(parse_wishlist_sk("item_def").is_err());
        assert!(parse_item_sk("wishlist_abc").is_err());
    }

    #[test]
    fn test_sort_key_id() {
        assert_eq!(SortKey::Item("x".to_string()).id(), "x");
    }
}
