//! API Handlers
//!
//! HTTP request handlers that feed events to the item handler.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::config::Config;
use crate::error::HandlerError;
use crate::handler::{ItemHandler, ITEMS_RESOURCE, ITEM_RESOURCE};
use crate::models::{ApiEvent, ApiResponse, HealthResponse};
use crate::table::{table_from_config, ItemTable, MemoryTable};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Item handler bound to the configured table
    pub handler: ItemHandler,
}

impl AppState {
    /// Creates a new AppState around the given handler.
    pub fn new(handler: ItemHandler) -> Self {
        Self { handler }
    }

    /// Creates a new AppState over `table` with no call timeout.
    pub fn with_table(table: Arc<dyn ItemTable>) -> Self {
        Self::new(ItemHandler::new(table))
    }

    /// Creates a new AppState backed by an empty in-memory table.
    pub fn in_memory() -> Self {
        Self::with_table(Arc::new(MemoryTable::new()))
    }

    /// Creates a new AppState from configuration.
    ///
    /// Selects the table backend and applies the table call timeout.
    pub async fn from_config(config: &Config) -> Self {
        let table = table_from_config(config).await;
        Self::new(ItemHandler::new(table).with_timeout(config.table_timeout()))
    }
}

// == Envelope Conversion ==
impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => warn!("Dropping invalid response header '{}'", name),
            }
        }

        (status, headers, self.body).into_response()
    }
}

/// Handler for POST /invoke
///
/// Runs a raw event through the item handler and returns the envelope as JSON.
/// A document that is not an event still gets the 400 envelope.
pub async fn invoke_handler(State(state): State<AppState>, body: Bytes) -> Json<ApiResponse> {
    let response = match serde_json::from_slice::<ApiEvent>(&body) {
        Ok(event) => state.handler.handle(&event).await,
        Err(err) => ApiResponse::from_result::<()>(Err(HandlerError::InvalidEvent(err))),
    };
    Json(response)
}

/// Handler for any method on /items
///
/// Translates the request into an event for the `/items` template.
pub async fn items_handler(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> ApiResponse {
    let event = ApiEvent::new(method.as_str(), ITEMS_RESOURCE).with_raw_body(&body);
    state.handler.handle(&event).await
}

/// Handler for any method on /items/:id
///
/// Translates the request into an event for the `/items/{id}` template.
pub async fn item_handler(
    State(state): State<AppState>,
    method: Method,
    Path(params): Path<HashMap<String, String>>,
    body: Bytes,
) -> ApiResponse {
    let mut event = ApiEvent::new(method.as_str(), ITEM_RESOURCE).with_raw_body(&body);
    event.path_parameters = Some(params);
    state.handler.handle(&event).await
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.handler.table().name()))
}
