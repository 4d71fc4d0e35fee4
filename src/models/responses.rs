//! Response bodies produced by the handler and the HTTP host.

use serde::{Deserialize, Serialize};

use super::Item;

/// Result of a fetch by id: `{"Item": {...}}`, or `{}` when the id is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetItemOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
}

impl GetItemOutput {
    pub fn new(item: Option<Item>) -> Self {
        Self { item }
    }
}

/// Result of a full-table scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanOutput {
    pub items: Vec<Item>,
    pub count: usize,
    pub scanned_count: usize,
}

impl ScanOutput {
    pub fn new(items: Vec<Item>) -> Self {
        let count = items.len();
        Self {
            items,
            count,
            scanned_count: count,
        }
    }
}

/// Value computed by a successful operation, serialized as the response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Confirmation text, e.g. `Deleted item a1`
    Message(String),
    Fetched(GetItemOutput),
    Scanned(ScanOutput),
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Name of the backing table
    pub table: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(table: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            table: table.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
