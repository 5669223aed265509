//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! backend rows, and for building the query and update expressions. These
//! are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use wishlist_core::storage::{
    keys::{PARTITION_KEY, SORT_KEY},
    AttributeEdit, Row, RowKey, SortKeyCondition, StoreError,
};

pub type Item = HashMap<String, AttributeValue>;

// ============================================================================
// Row conversions
// ============================================================================

/// Convert a row to a DynamoDB item.
pub fn row_to_item(row: Row) -> Item {
    let mut item = key_to_item(row.key);
    for (name, value) in row.attributes {
        item.insert(name, AttributeValue::S(value));
    }
    item
}

/// Convert a primary key to the DynamoDB key map.
pub fn key_to_item(key: RowKey) -> Item {
    HashMap::from([
        (PARTITION_KEY.to_string(), AttributeValue::S(key.pk)),
        (SORT_KEY.to_string(), AttributeValue::S(key.sk)),
    ])
}

/// Convert a DynamoDB item to a row.
///
/// Every attribute of the table is a string; anything else is invalid data.
pub fn item_to_row(item: &Item) -> Result<Row, StoreError> {
    let key = RowKey::new(get_string(item, PARTITION_KEY)?, get_string(item, SORT_KEY)?);
    let mut row = Row::new(key);

    for name in item.keys() {
        if name == PARTITION_KEY || name == SORT_KEY {
            continue;
        }
        row.attributes.insert(name.clone(), get_string(item, name)?);
    }

    Ok(row)
}

// ============================================================================
// Expressions
// ============================================================================

/// Key condition expression of a partition query.
///
/// Returns the expression and the sort key operand, if the condition has one.
pub fn key_condition(condition: &SortKeyCondition) -> (String, Option<&str>) {
    match condition {
        SortKeyCondition::Any => (format!("{PARTITION_KEY} = :pk"), None),
        SortKeyCondition::Equals(sk) => (
            format!("{PARTITION_KEY} = :pk AND {SORT_KEY} = :sk"),
            Some(sk.as_str()),
        ),
        SortKeyCondition::BeginsWith(prefix) => (
            format!("{PARTITION_KEY} = :pk AND begins_with({SORT_KEY}, :sk)"),
            Some(prefix.as_str()),
        ),
    }
}

/// A `SET ... REMOVE ...` update expression with its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Build one update expression from a list of attribute edits.
///
/// Attribute names always go through `#aN` placeholders so reserved words
/// such as `name` and `url` are safe. Returns `None` for an empty edit list.
pub fn update_expression(edits: &[AttributeEdit]) -> Option<UpdateExpression> {
    if edits.is_empty() {
        return None;
    }

    let mut sets = Vec::new();
    let mut removes = Vec::new();
    let mut names = HashMap::new();
    let mut values = HashMap::new();

    for (index, edit) in edits.iter().enumerate() {
        let name_placeholder = format!("#a{index}");
        names.insert(name_placeholder.clone(), edit.name().to_string());

        match edit {
            AttributeEdit::Set { value, .. } => {
                let value_placeholder = format!(":v{index}");
                sets.push(format!("{name_placeholder} = {value_placeholder}"));
                values.insert(value_placeholder, AttributeValue::S(value.clone()));
            }
            AttributeEdit::Remove { .. } => removes.push(name_placeholder),
        }
    }

    let mut clauses = Vec::new();
    if !sets.is_empty() {
        clauses.push(format!("SET {}", sets.join(", ")));
    }
    if !removes.is_empty() {
        clauses.push(format!("REMOVE {}", removes.join(", ")));
    }

    Some(UpdateExpression {
        expression: clauses.join(" "),
        names,
        values,
    })
}

/// Condition that makes an update fail when the row does not exist.
pub fn row_exists_condition() -> String {
    format!("attribute_exists({PARTITION_KEY})")
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, StoreError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StoreError::InvalidData(format!("Missing or invalid field: {}", key)))
}
