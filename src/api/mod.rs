//! API Module
//!
//! HTTP host for the item handler.
//!
//! # Endpoints
//! - `POST /invoke` - Run a raw event and return the raw envelope
//! - `ANY /items` - Item collection (`PUT` upserts, `GET` lists)
//! - `ANY /items/:id` - Single item (`GET` fetches, `DELETE` removes)
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
