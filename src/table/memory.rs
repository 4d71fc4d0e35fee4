//! In-memory Table Module
//!
//! Process-local item table backed by a HashMap behind an async RwLock.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::TableResult;
use crate::models::Item;
use crate::table::ItemTable;

// == Memory Table ==
/// Item table that keeps everything in process memory.
#[derive(Debug, Default)]
pub struct MemoryTable {
    /// Items keyed by id
    items: RwLock<HashMap<String, Item>>,
}

impl MemoryTable {
    // == Constructor ==
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table pre-populated with `items`.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();
        Self {
            items: RwLock::new(items),
        }
    }

    // == Length ==
    /// Returns the current number of items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the table holds no items.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemTable for MemoryTable {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, id: &str) -> TableResult<Option<Item>> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn put(&self, item: Item) -> TableResult<()> {
        self.items.write().await.insert(item.id.clone(), item);
        Ok(())
    }

    async fn delete(&self, id: &str) -> TableResult<()> {
        self.items.write().await.remove(id);
        Ok(())
    }

    async fn scan(&self) -> TableResult<Vec<Item>> {
        Ok(self.items.read().await.values().cloned().collect())
    }
}
