//! Plan execution (Imperative Shell).

use super::client;
use super::config::{IndexConfig, TableConfig};
use super::error::{DynamodbError, Result};
use super::planning::Plan;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, CreateGlobalSecondaryIndexAction, GlobalSecondaryIndex,
    GlobalSecondaryIndexUpdate, KeySchemaElement, KeyType, Projection, ProjectionType,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use std::time::Duration;

const ACTIVATION_POLLS: u32 = 60;
const ACTIVATION_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Apply a plan and wait until the table accepts traffic again.
pub async fn execute_plan(client: &Client, plan: &Plan) -> Result<()> {
    match plan {
        Plan::CreateTable { config } => {
            create_table(client, config).await?;
            wait_until_ready(client, &config.table_name).await
        }
        Plan::AddIndex { table_name, index } => {
            add_index(client, table_name, index).await?;
            wait_until_ready(client, table_name).await
        }
        Plan::DeleteTable { table_name } => {
            client
                .delete_table()
                .table_name(table_name)
                .send()
                .await
                .map_err(sdk_error)?;
            Ok(())
        }
        Plan::UpToDate { .. } | Plan::AlreadyGone { .. } => Ok(()),
    }
}

async fn create_table(client: &Client, config: &TableConfig) -> Result<()> {
    let table_keys = vec![
        key_element(&config.partition_key, KeyType::Hash)?,
        key_element(&config.sort_key, KeyType::Range)?,
    ];

    let index = GlobalSecondaryIndex::builder()
        .index_name(&config.index.name)
        .key_schema(key_element(&config.index.partition_key, KeyType::Hash)?)
        .projection(all_attributes())
        .build()
        .map_err(sdk_error)?;

    client
        .create_table()
        .table_name(&config.table_name)
        .set_key_schema(Some(table_keys))
        .set_attribute_definitions(Some(
            config
                .key_attributes()
                .into_iter()
                .map(string_attribute)
                .collect::<Result<Vec<_>>>()?,
        ))
        .global_secondary_indexes(index)
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .map_err(sdk_error)?;
    Ok(())
}

async fn add_index(client: &Client, table_name: &str, index: &IndexConfig) -> Result<()> {
    let create = CreateGlobalSecondaryIndexAction::builder()
        .index_name(&index.name)
        .key_schema(key_element(&index.partition_key, KeyType::Hash)?)
        .projection(all_attributes())
        .build()
        .map_err(sdk_error)?;

    client
        .update_table()
        .table_name(table_name)
        .attribute_definitions(string_attribute(&index.partition_key)?)
        .global_secondary_index_updates(GlobalSecondaryIndexUpdate::builder().create(create).build())
        .send()
        .await
        .map_err(sdk_error)?;
    Ok(())
}

async fn wait_until_ready(client: &Client, table_name: &str) -> Result<()> {
    for _ in 0..ACTIVATION_POLLS {
        let state = client::get_table_state(client, table_name).await?;
        if state.is_some_and(|state| state.is_ready()) {
            return Ok(());
        }
        tokio::time::sleep(ACTIVATION_POLL_INTERVAL).await;
    }

    Err(DynamodbError::TableActivationTimeout)
}

fn key_element(name: &str, key_type: KeyType) -> Result<KeySchemaElement> {
    KeySchemaElement::builder()
        .attribute_name(name)
        .key_type(key_type)
        .build()
        .map_err(sdk_error)
}

fn string_attribute(name: &str) -> Result<AttributeDefinition> {
    AttributeDefinition::builder()
        .attribute_name(name)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(sdk_error)
}

fn all_attributes() -> Projection {
    Projection::builder()
        .projection_type(ProjectionType::All)
        .build()
}

fn sdk_error(err: impl std::fmt::Display) -> DynamodbError {
    DynamodbError::AwsSdk(err.to_string())
}
