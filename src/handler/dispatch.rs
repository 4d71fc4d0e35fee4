//! Item Handler
//!
//! Routes one event to one table operation and builds the response envelope.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument};

use super::body::parse_put_request;
use super::route::Route;
use crate::error::{HandlerError, Result, TableResult};
use crate::models::{ApiEvent, ApiResponse, GetItemOutput, Outcome, ScanOutput};
use crate::table::ItemTable;

/// Name of the path parameter carrying the item id.
const ID_PARAMETER: &str = "id";

// == Item Handler ==
/// Handles item events against a single table.
///
/// Each invocation is independent: it performs at most one table call, awaits
/// it, then responds.
#[derive(Clone)]
pub struct ItemHandler {
    table: Arc<dyn ItemTable>,
    /// Limit for the table call, `None` waits indefinitely
    timeout: Option<Duration>,
}

impl ItemHandler {
    pub fn new(table: Arc<dyn ItemTable>) -> Self {
        Self {
            table,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn table(&self) -> &Arc<dyn ItemTable> {
        &self.table
    }

    // == Handle ==
    /// Handles an event. Never fails: any error becomes a 400 envelope.
    #[instrument(skip_all, fields(method = %event.http_method, resource = %event.resource))]
    pub async fn handle(&self, event: &ApiEvent) -> ApiResponse {
        let response = ApiResponse::from_result(self.dispatch(event).await);
        debug!(status = response.status_code, "Event handled");
        response
    }

    // == Dispatch ==
    /// Resolves the route and runs its operation.
    pub async fn dispatch(&self, event: &ApiEvent) -> Result<Outcome> {
        let route = Route::resolve(&event.http_method, &event.resource).ok_or_else(|| {
            HandlerError::unsupported_route(event.http_method.as_str(), event.resource.as_str())
        })?;
        debug!(route = %route, "Routed event");

        match route {
            Route::DeleteItem => {
                let id = required_id(event)?;
                self.call(self.table.delete(id)).await?;
                info!(id = %id, "Deleted item");
                Ok(Outcome::Message(format!("Deleted item {}", id)))
            }
            Route::GetItem => {
                let id = required_id(event)?;
                let item = self.call(self.table.get(id)).await?;
                debug!(id = %id, found = item.is_some(), "Fetched item");
                Ok(Outcome::Fetched(GetItemOutput::new(item)))
            }
            Route::ListItems => {
                let items = self.call(self.table.scan()).await?;
                debug!(count = items.len(), "Scanned items");
                Ok(Outcome::Scanned(ScanOutput::new(items)))
            }
            Route::PutItem => {
                let item = parse_put_request(event)?.into_item();
                let id = item.id.clone();
                self.call(self.table.put(item)).await?;
                info!(id = %id, "Put item");
                Ok(Outcome::Message(format!("Put item {}", id)))
            }
        }
    }

    /// Awaits a single table call, bounded by the configured timeout.
    async fn call<T>(&self, operation: impl Future<Output = TableResult<T>>) -> Result<T> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, operation)
                .await
                .map_err(|_| HandlerError::Timeout(limit))?
                .map_err(HandlerError::from),
            None => operation.await.map_err(HandlerError::from),
        }
    }
}

fn required_id(event: &ApiEvent) -> Result<&str> {
    event
        .path_parameter(ID_PARAMETER)
        .ok_or(HandlerError::MissingPathParameter(ID_PARAMETER))
}
