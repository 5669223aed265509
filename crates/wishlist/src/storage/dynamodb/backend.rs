//! DynamoDB key-value backend implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use wishlist_core::storage::{
    keys::SORT_KEY, AttributeEdit, KeyValueBackend, Result, Row, RowKey, SortKeyCondition,
    StoreError, UpdateCondition,
};

use super::conversions::{
    item_to_row, key_condition, key_to_item, row_exists_condition, row_to_item,
    update_expression, Item,
};
use super::error::{
    map_delete_item_error, map_put_item_error, map_query_error, map_update_item_error,
};

/// DynamoDB-based key-value backend over one table.
pub struct DynamoDbBackend {
    client: Client,
    table_name: String,
}

impl DynamoDbBackend {
    /// Creates a new backend with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Runs a query until `LastEvaluatedKey` is exhausted.
    async fn query_all(
        &self,
        index_name: Option<&str>,
        key_condition_expression: String,
        values: HashMap<String, AttributeValue>,
    ) -> Result<Vec<Row>> {
        let mut rows = Vec::new();
        let mut start_key: Option<Item> = None;

        loop {
            let output = self
                .client
                .query()
                .table_name(&self.table_name)
                .set_index_name(index_name.map(str::to_string))
                .key_condition_expression(&key_condition_expression)
                .set_expression_attribute_values(Some(values.clone()))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_query_error)?;

            for item in output.items.unwrap_or_default() {
                rows.push(item_to_row(&item)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => {
                    tracing::trace!(page_rows = rows.len(), "Following LastEvaluatedKey");
                    start_key = Some(key);
                }
                _ => break,
            }
        }

        Ok(rows)
    }
}

#[async_trait]
impl KeyValueBackend for DynamoDbBackend {
    async fn query(&self, partition_key: &str, condition: SortKeyCondition) -> Result<Vec<Row>> {
        let (expression, sort_operand) = key_condition(&condition);

        let mut values = HashMap::from([(
            ":pk".to_string(),
            AttributeValue::S(partition_key.to_string()),
        )]);
        if let Some(sk) = sort_operand {
            values.insert(":sk".to_string(), AttributeValue::S(sk.to_string()));
        }

        self.query_all(None, expression, values).await
    }

    async fn query_by_index(&self, index_name: &str, sort_key: &str) -> Result<Vec<Row>> {
        let values = HashMap::from([(
            ":sk".to_string(),
            AttributeValue::S(sort_key.to_string()),
        )]);

        self.query_all(Some(index_name), format!("{SORT_KEY} = :sk"), values)
            .await
    }

    async fn put(&self, row: Row) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(row_to_item(row)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update(
        &self,
        key: RowKey,
        edits: &[AttributeEdit],
        condition: UpdateCondition,
    ) -> Result<Row> {
        let update = update_expression(edits).ok_or_else(|| {
            StoreError::InvalidData(format!("Update of {key} has no attribute edits"))
        })?;

        let condition_expression = match condition {
            UpdateCondition::MustExist => Some(row_exists_condition()),
            UpdateCondition::Upsert => None,
        };

        let values = (!update.values.is_empty()).then_some(update.values);

        let output = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_item(key.clone())))
            .update_expression(update.expression)
            .set_expression_attribute_names(Some(update.names))
            .set_expression_attribute_values(values)
            .set_condition_expression(condition_expression)
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, &key))?;

        let attributes = output.attributes.ok_or_else(|| {
            StoreError::InvalidData(format!("Update of {key} returned no attributes"))
        })?;

        item_to_row(&attributes)
    }

    async fn delete(&self, key: RowKey) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_item(key)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
