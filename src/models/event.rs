//! Inbound event and outbound response envelope.
//!
//! Both follow the API Gateway proxy integration shape (camelCase JSON), so a
//! gateway event can be fed to the handler unchanged.

use std::collections::{BTreeMap, HashMap};

use axum::http::StatusCode;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::error::Result;

/// Content type of every response body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

// == Api Event ==
/// An HTTP-style event as delivered by a proxy integration.
///
/// Unknown fields are ignored and every field may be `null` or absent. An
/// event without a method or resource still deserializes; it just resolves
/// to no route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEvent {
    /// HTTP method, e.g. `GET`
    #[serde(default, deserialize_with = "null_as_default")]
    pub http_method: String,
    /// Resource template, e.g. `/items/{id}`
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource: String,
    /// Values of the template's parameters
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    /// Raw body, possibly base64-wrapped
    #[serde(default)]
    pub body: Option<String>,
    /// Whether `body` is base64-encoded
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_base64_encoded: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ApiEvent {
    pub fn new(http_method: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            resource: resource.into(),
            ..Self::default()
        }
    }

    pub fn with_path_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.is_base64_encoded = false;
        self
    }

    /// Sets the body as base64 text and flags it as encoded.
    pub fn with_base64_body(mut self, raw: impl AsRef<[u8]>) -> Self {
        self.body = Some(STANDARD.encode(raw));
        self.is_base64_encoded = true;
        self
    }

    /// Sets the body from raw request bytes.
    ///
    /// Empty bytes leave the body absent; UTF-8 bytes are passed as text and
    /// anything else is base64-wrapped, as a proxy integration does.
    pub fn with_raw_body(self, bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return self;
        }
        match std::str::from_utf8(bytes) {
            Ok(text) => self.with_body(text),
            Err(_) => self.with_base64_body(bytes),
        }
    }

    /// Looks up a path parameter by name.
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }
}

// == Api Response ==
/// The response envelope returned for every event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// 200 on success, 400 on any failure
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON-encoded result or error message
    pub body: String,
}

impl ApiResponse {
    /// Builds a response whose body is the JSON serialization of `value`.
    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Self {
        let body = match serde_json::to_string(value) {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "Failed to serialize response body");
                return Self::error(&format!("Failed to serialize response: {}", err));
            }
        };
        Self {
            status_code: status.as_u16(),
            headers: default_headers(),
            body,
        }
    }

    /// Builds the 400 envelope carrying `message` as a JSON string.
    pub fn error(message: &str) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST.as_u16(),
            headers: default_headers(),
            body: serde_json::Value::String(message.to_string()).to_string(),
        }
    }

    /// The single translation step from an operation result to an envelope.
    pub fn from_result<T: Serialize>(result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::json(StatusCode::OK, &value),
            Err(err) => {
                warn!(error = %err, "Request failed");
                Self::error(&err.to_string())
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == StatusCode::OK.as_u16()
    }
}

fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())])
}
