//! Handler Module
//!
//! Maps an inbound event to exactly one table operation and produces the
//! response envelope.
//!
//! # Routes
//! - `PUT /items` - Create or replace an item
//! - `GET /items` - List all items
//! - `GET /items/{id}` - Fetch an item by id
//! - `DELETE /items/{id}` - Delete an item by id

mod body;
mod dispatch;
mod route;


pub use body::{decode_body, parse_put_request};
pub use dispatch::ItemHandler;
pub use route::{Route, ITEMS_RESOURCE, ITEM_RESOURCE};
