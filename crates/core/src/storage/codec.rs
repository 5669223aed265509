//! Row conversion functions.
//!
//! Pure functions for converting between backend rows and wishlist entities.
//! Optional item attributes are written only when non-empty and read back as
//! `None` when absent.

use crate::wishlist::{Item, ItemFields, Wishlist};

use super::keys;
use super::{AttributeEdit, Row, StoreError};

// ============================================================================
// Attribute names
// ============================================================================

pub const ATTR_NAME: &str = "name";
pub const ATTR_DESCRIPTION: &str = "description";
pub const ATTR_URL: &str = "url";
pub const ATTR_PRICE: &str = "price";

// ============================================================================
// Wishlist conversions
// ============================================================================

/// Convert a Wishlist to its row.
pub fn wishlist_to_row(wishlist: &Wishlist) -> Row {
    Row::new(keys::wishlist_key(&wishlist.owner, &wishlist.id)).with(ATTR_NAME, &wishlist.name)
}

/// Convert a list row to a Wishlist. The owner is the row's partition key.
pub fn row_to_wishlist(row: &Row) -> Result<Wishlist, StoreError> {
    let id = keys::parse_wishlist_sk(&row.key.sk)?;
    Ok(Wishlist {
        id,
        name: required(row, ATTR_NAME)?,
        owner: row.key.pk.clone(),
    })
}

/// Edits that rename a list.
pub fn rename_edits(name: &str) -> Vec<AttributeEdit> {
    vec![AttributeEdit::set(ATTR_NAME, name)]
}

// ============================================================================
// Item conversions
// ============================================================================

/// Convert an Item of the given list to its row.
pub fn item_to_row(list_id: &str, item: &Item) -> Row {
    Row::new(keys::item_key(list_id, &item.id))
        .with(ATTR_DESCRIPTION, &item.description)
        .with_optional(ATTR_URL, present(item.url.as_deref()))
        .with_optional(ATTR_PRICE, present(item.price.as_deref()))
}

/// Convert an item row to an Item.
pub fn row_to_item(row: &Row) -> Result<Item, StoreError> {
    let id = keys::parse_item_sk(&row.key.sk)?;
    Ok(Item {
        id,
        description: required(row, ATTR_DESCRIPTION)?,
        url: present(row.get(ATTR_URL)).map(str::to_string),
        price: present(row.get(ATTR_PRICE)).map(str::to_string),
    })
}

/// Edits that replace the attributes of an item.
///
/// `description` is always set; `url` and `price` are set when non-empty and
/// removed otherwise.
pub fn item_edits(fields: &ItemFields) -> Vec<AttributeEdit> {
    vec![
        AttributeEdit::set(ATTR_DESCRIPTION, &fields.description),
        AttributeEdit::set_or_remove(ATTR_URL, present(fields.url.as_deref())),
        AttributeEdit::set_or_remove(ATTR_PRICE, present(fields.price.as_deref())),
    ]
}

// ============================================================================
// Helpers
// ============================================================================

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn required(row: &Row, name: &str) -> Result<String, StoreError> {
    row.get(name)
        .map(str::to_string)
        .ok_or_else(|| StoreError::InvalidData(format!("Missing attribute {name} on {}", row.key)))
}
