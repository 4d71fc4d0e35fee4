//! API Routes
//!
//! Configures the Axum router that hosts the item handler.

use axum::{
    routing::{any, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, invoke_handler, item_handler, items_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /invoke` - Run a raw event, return the raw envelope
/// - `ANY /items` - Proxy to the `/items` routes
/// - `ANY /items/:id` - Proxy to the `/items/{id}` routes
/// - `GET /health` - Health check endpoint
///
/// Methods are not filtered here: unsupported ones reach the item handler
/// and get its 400 envelope.
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/invoke", post(invoke_handler))
        .route("/items", any(items_handler))
        .route("/items/:id", any(item_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
