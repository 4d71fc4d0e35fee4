//! Item model and the PUT request body that produces it.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::{HandlerError, Result};
use crate::table::MAX_KEY_LENGTH;

/// The single persisted record type, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique key
    pub id: String,
    /// Price, kept as the exact JSON number the caller sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Number>,
    /// Descriptive name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Item {
    /// Creates an item with only its key set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            price: None,
            name: None,
        }
    }

    pub fn with_price(mut self, price: impl Into<Number>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Request body for `PUT /items`.
///
/// Only `id`, `price` and `name` are read; any other field in the body is
/// dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct PutItemRequest {
    pub id: String,
    #[serde(default)]
    pub price: Option<Number>,
    #[serde(default)]
    pub name: Option<String>,
}

impl PutItemRequest {
    /// Validates the request data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(HandlerError::InvalidItem("id cannot be empty".to_string()));
        }
        if self.id.len() > MAX_KEY_LENGTH {
            return Err(HandlerError::InvalidItem(format!(
                "id exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }
        Ok(())
    }

    /// Converts the request into the item that gets stored.
    pub fn into_item(self) -> Item {
        Item {
            id: self.id,
            price: self.price,
            name: self.name,
        }
    }
}
