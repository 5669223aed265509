//! Backend-neutral row representation.
//!
//! Every attribute of the wishlist table is a string, so a row is its
//! composite key plus a map of string attributes. Backends translate this to
//! their native format.

use std::collections::BTreeMap;

/// Composite primary key of a row.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey {
    pub pk: String,
    pub sk: String,
}

impl RowKey {
    pub fn new(pk: impl Into<String>, sk: impl Into<String>) -> Self {
        Self {
            pk: pk.into(),
            sk: sk.into(),
        }
    }
}

impl std::fmt::Display for RowKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.pk, self.sk)
    }
}

/// A stored row: key attributes plus the remaining string attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: RowKey,
    pub attributes: BTreeMap<String, String>,
}

impl Row {
    pub fn new(key: RowKey) -> Self {
        Self {
            key,
            attributes: BTreeMap::new(),
        }
    }

    /// Set an attribute.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// Set an attribute only when a value is present.
    pub fn with_optional(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Restriction on the sort key of a partition query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKeyCondition {
    /// Every row of the partition.
    Any,
    /// Only the row with this exact sort key.
    Equals(String),
    /// Rows whose sort key starts with this prefix.
    BeginsWith(String),
}

impl SortKeyCondition {
    pub fn matches(&self, sk: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Equals(value) => sk == value,
            Self::BeginsWith(prefix) => sk.starts_with(prefix.as_str()),
        }
    }
}

/// A single attribute change of a partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeEdit {
    Set { name: String, value: String },
    Remove { name: String },
}

impl AttributeEdit {
    pub fn set(name: &str, value: impl Into<String>) -> Self {
        Self::Set {
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn remove(name: &str) -> Self {
        Self::Remove {
            name: name.to_string(),
        }
    }

    /// Set when a value is present, remove otherwise.
    pub fn set_or_remove(name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => Self::set(name, value),
            None => Self::remove(name),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Set { name, .. } | Self::Remove { name } => name,
        }
    }
}

/// Existence requirement of an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateCondition {
    /// Create the row if it does not exist.
    Upsert,
    /// Fail with `NotFound` if the row does not exist.
    MustExist,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_optional_attributes() {
        let row = Row::new(RowKey::new("p", "s"))
            .with("description", "Book")
            .with_optional("url", None)
            .with_optional("price", Some("20"));

        assert_eq!(row.get("description"), Some("Book"));
        assert_eq!(row.get("url"), None);
        assert_eq!(row.get("price"), Some("20"));
    }

    #[test]
    fn test_sort_key_condition_matches() {
        assert!(SortKeyCondition::Any.matches("anything"));
        assert!(SortKeyCondition::Equals("item_1".to_string()).matches("item_1"));
        assert!(!SortKeyCondition::Equals("item_1".to_string()).matches("item_12"));
        assert!(SortKeyCondition::BeginsWith("wishlist_".to_string()).matches("wishlist_a"));
        assert!(!SortKeyCondition::BeginsWith("wishlist_".to_string()).matches("item_a"));
    }

    #[test]
    fn test_set_or_remove() {
        assert_eq!(
            AttributeEdit::set_or_remove("url", Some("https://x.io")),
            AttributeEdit::set("url", "https://x.io")
        );
        assert_eq!(
            AttributeEdit::set_or_remove("url", None),
            AttributeEdit::remove("url")
        );
        assert_eq!(AttributeEdit::remove("price").name(), "price");
    }

    #[test]
    fn test_row_key_display() {
        assert_eq!(RowKey::new("a@x.com", "wishlist_1").to_string(), "a@x.com/wishlist_1");
    }
}
