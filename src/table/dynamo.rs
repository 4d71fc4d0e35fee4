//! DynamoDB Table Module
//!
//! Item table backed by an Amazon DynamoDB table with a string hash key `id`.

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_json::Number;
use tracing::debug;

use crate::config::Config;
use crate::error::{TableError, TableResult};
use crate::models::Item;
use crate::table::{ItemTable, ID_ATTRIBUTE};

const PRICE_ATTRIBUTE: &str = "price";
const NAME_ATTRIBUTE: &str = "name";

// == Dynamo Table ==
/// DynamoDB-backed item table.
pub struct DynamoTable {
    client: Client,
    table_name: String,
}

impl DynamoTable {
    /// Creates a table over an existing client.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a table using the SDK default credential chain, honouring the
    /// configured region and endpoint overrides.
    pub async fn from_config(config: &Config, table_name: &str) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &config.aws_region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.aws_endpoint_url {
            debug!("Using DynamoDB endpoint {}", endpoint);
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), table_name)
    }
}

#[async_trait]
impl ItemTable for DynamoTable {
    fn name(&self) -> &str {
        &self.table_name
    }

    async fn get(&self, id: &str) -> TableResult<Option<Item>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| map_sdk_error("GetItem", e))?;

        output.item().map(attributes_to_item).transpose()
    }

    async fn put(&self, item: Item) -> TableResult<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(&item)))
            .send()
            .await
            .map_err(|e| map_sdk_error("PutItem", e))?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> TableResult<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| map_sdk_error("DeleteItem", e))?;
        Ok(())
    }

    // A single Scan call: DynamoDB returns at most one 1 MB page and the
    // LastEvaluatedKey is not followed.
    async fn scan(&self) -> TableResult<Vec<Item>> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| map_sdk_error("Scan", e))?;

        output.items().iter().map(attributes_to_item).collect()
    }
}

fn map_sdk_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> TableError
where
    E: std::error::Error + Send + Sync + 'static,
    R: Debug,
{
    TableError::Backend {
        operation,
        message: DisplayErrorContext(&err).to_string(),
    }
}

// == Conversions ==
/// Converts an item to its DynamoDB attribute map.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    let mut attributes = HashMap::new();
    attributes.insert(ID_ATTRIBUTE.to_string(), AttributeValue::S(item.id.clone()));
    if let Some(price) = &item.price {
        attributes.insert(PRICE_ATTRIBUTE.to_string(), AttributeValue::N(price.to_string()));
    }
    if let Some(name) = &item.name {
        attributes.insert(NAME_ATTRIBUTE.to_string(), AttributeValue::S(name.clone()));
    }
    attributes
}

/// Converts a DynamoDB attribute map back to an item.
pub fn attributes_to_item(attributes: &HashMap<String, AttributeValue>) -> TableResult<Item> {
    let id = match attributes.get(ID_ATTRIBUTE) {
        Some(AttributeValue::S(id)) => id.clone(),
        _ => {
            return Err(TableError::InvalidData(format!(
                "missing string attribute '{}'",
                ID_ATTRIBUTE
            )))
        }
    };

    let price = match attributes.get(PRICE_ATTRIBUTE) {
        None | Some(AttributeValue::Null(_)) => None,
        Some(AttributeValue::N(n)) => Some(serde_json::from_str::<Number>(n).map_err(|e| {
            TableError::InvalidData(format!("item '{}' has unreadable price '{}': {}", id, n, e))
        })?),
        Some(_) => {
            return Err(TableError::InvalidData(format!(
                "item '{}' has a non-numeric price",
                id
            )))
        }
    };

    let name = match attributes.get(NAME_ATTRIBUTE) {
        None | Some(AttributeValue::Null(_)) => None,
        Some(AttributeValue::S(name)) => Some(name.clone()),
        Some(_) => {
            return Err(TableError::InvalidData(format!(
                "item '{}' has a non-string name",
                id
            )))
        }
    };

    Ok(Item { id, price, name })
}
