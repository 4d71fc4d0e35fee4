//! Item Store - a small CRUD handler over a key-value table
//!
//! Routes HTTP-style events to create-or-replace, fetch, list and delete
//! operations on a table of items, and answers with a JSON envelope.

pub mod api;
pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod models;
pub mod table;

pub use api::AppState;
pub use config::Config;
pub use handler::ItemHandler;
pub use models::{ApiEvent, ApiResponse, Item};
