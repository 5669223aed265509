use serde::{Deserialize, Serialize};

use super::operations::non_empty;

/// A named collection of items owned by one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    pub id: String,
    pub name: String,
    /// Identity (email) of the creator. Never changes after creation.
    pub owner: String,
}

impl Wishlist {
    pub fn new(id: impl Into<String>, name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner: owner.into(),
        }
    }

    /// Whether `owner` is allowed to mutate this list and its items.
    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.owner == owner
    }
}

/// An entry of a wishlist.
///
/// Items carry no owner; mutation rights come from the parent list.
/// `url` and `price` serialize as `null` when not set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub description: String,
    pub url: Option<String>,
    pub price: Option<String>,
}

impl Item {
    /// Builds an item from caller supplied fields, dropping empty `url`/`price`.
    pub fn from_fields(id: impl Into<String>, fields: ItemFields) -> Self {
        Self {
            id: id.into(),
            description: fields.description,
            url: non_empty(fields.url),
            price: non_empty(fields.price),
        }
    }
}

/// The mutable attributes of an item, as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFields {
    pub description: String,
    pub url: Option<String>,
    pub price: Option<String>,
}

impl ItemFields {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            url: None,
            price: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }
}
