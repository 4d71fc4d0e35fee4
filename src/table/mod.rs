//! Table Module
//!
//! The key-value table the handler persists items to. Every backend exposes
//! exact-key get, put and delete plus a full scan.

#[cfg(feature = "dynamodb")]
mod dynamo;
mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::config::Config;
use crate::error::TableResult;
use crate::models::Item;

#[cfg(feature = "dynamodb")]
pub use dynamo::{attributes_to_item, item_to_attributes, DynamoTable};
pub use memory::MemoryTable;

// == Public Constants ==
/// Name of the key attribute
pub const ID_ATTRIBUTE: &str = "id";

/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 2048;

// == Item Table ==
/// A table of items keyed by `id`.
///
/// Each call is a single atomic per-key operation; concurrent writers to the
/// same id resolve last-writer-wins.
#[async_trait]
pub trait ItemTable: Send + Sync {
    /// Name used in logs and the health report.
    fn name(&self) -> &str;

    /// Fetches the item stored under `id`.
    async fn get(&self, id: &str) -> TableResult<Option<Item>>;

    /// Creates or replaces the item under its id.
    async fn put(&self, item: Item) -> TableResult<()>;

    /// Removes the item under `id`. Absent ids are not an error.
    async fn delete(&self, id: &str) -> TableResult<()>;

    /// Returns every item in the table. Unbounded.
    async fn scan(&self) -> TableResult<Vec<Item>>;
}

/// Builds the table selected by configuration.
///
/// A configured table name selects DynamoDB; without one the items live in
/// process memory.
pub async fn table_from_config(config: &Config) -> Arc<dyn ItemTable> {
    match config.table_name.as_deref() {
        #[cfg(feature = "dynamodb")]
        Some(table_name) => {
            let table = DynamoTable::from_config(config, table_name).await;
            tracing::info!("Using DynamoDB table '{}'", table_name);
            Arc::new(table)
        }
        #[cfg(not(feature = "dynamodb"))]
        Some(table_name) => {
            warn!(
                "DYNAMODB_TABLE={} ignored: built without the dynamodb feature, using in-memory table",
                table_name
            );
            Arc::new(MemoryTable::new())
        }
        None => {
            warn!("DYNAMODB_TABLE not set, using in-memory table");
            Arc::new(MemoryTable::new())
        }
    }
}
