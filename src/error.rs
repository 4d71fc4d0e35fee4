//! Error types for the item store
//!
//! Provides unified error handling using thiserror. Every failure the handler
//! can hit is a variant here; the response layer turns any of them into the
//! same 400 envelope.

use std::time::Duration;

use thiserror::Error;

// == Table Error Enum ==
/// Failures reported by an item table backend.
#[derive(Error, Debug)]
pub enum TableError {
    /// The backend call itself failed (network, throttling, missing table)
    #[error("{operation} failed: {message}")]
    Backend {
        operation: &'static str,
        message: String,
    },

    /// A stored record could not be read back as an item
    #[error("Invalid stored item: {0}")]
    InvalidData(String),
}

// == Handler Error Enum ==
/// Unified error type for a single handler invocation.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// The event document itself is not a JSON object of the event shape
    #[error("Invalid event: {0}")]
    InvalidEvent(serde_json::Error),

    /// No route matches the event's method and resource template
    #[error("Unsupported route: \"{method} {resource}\"")]
    UnsupportedRoute { method: String, resource: String },

    /// A routed operation needs a path parameter the event did not carry
    #[error("Missing path parameter: {0}")]
    MissingPathParameter(&'static str),

    /// PUT without a body
    #[error("Missing request body")]
    MissingBody,

    /// Body flagged as base64 but not decodable
    #[error("Invalid base64 body: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Decoded body is not UTF-8 text
    #[error("Body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Body text is not the expected JSON record
    #[error("Invalid request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Body parsed but the item it describes is not storable
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// The table call did not finish in time
    #[error("Table operation timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The table call failed
    #[error(transparent)]
    Table(#[from] TableError),
}

impl HandlerError {
    /// Builds the unsupported-route error for a method and resource pair.
    pub fn unsupported_route(method: impl Into<String>, resource: impl Into<String>) -> Self {
        Self::UnsupportedRoute {
            method: method.into(),
            resource: resource.into(),
        }
    }
}

// == Result Type Aliases ==
/// Convenience Result type for handler operations.
pub type Result<T> = std::result::Result<T, HandlerError>;

/// Convenience Result type for table backends.
pub type TableResult<T> = std::result::Result<T, TableError>;
