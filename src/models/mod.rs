//! Data models for the item store
//!
//! The persisted item, the inbound event and response envelope, and the
//! bodies each operation produces.

pub mod event;
pub mod item;
pub mod responses;

// Re-export commonly used types
pub use event::{ApiEvent, ApiResponse, JSON_CONTENT_TYPE};
pub use item::{Item, PutItemRequest};
pub use responses::{GetItemOutput, HealthResponse, Outcome, ScanOutput};
