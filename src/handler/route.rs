//! Route table for item events.

use std::fmt;

/// Resource template of the item collection.
pub const ITEMS_RESOURCE: &str = "/items";

/// Resource template of a single item.
pub const ITEM_RESOURCE: &str = "/items/{id}";

/// The four supported (method, resource template) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `PUT /items`
    PutItem,
    /// `GET /items`
    ListItems,
    /// `GET /items/{id}`
    GetItem,
    /// `DELETE /items/{id}`
    DeleteItem,
}

impl Route {
    #[cfg(test)]
    pub const ALL: [Route; 4] = [
        Route::PutItem,
        Route::ListItems,
        Route::GetItem,
        Route::DeleteItem,
    ];

    /// Matches a method and resource template exactly; `None` means the
    /// route is unsupported.
    pub fn resolve(method: &str, resource: &str) -> Option<Self> {
        match (method, resource) {
            ("PUT", ITEMS_RESOURCE) => Some(Route::PutItem),
            ("GET", ITEMS_RESOURCE) => Some(Route::ListItems),
            ("GET", ITEM_RESOURCE) => Some(Route::GetItem),
            ("DELETE", ITEM_RESOURCE) => Some(Route::DeleteItem),
            _ => None,
        }
    }

    pub fn method(self) -> &'static str {
        match self {
            Route::PutItem => "PUT",
            Route::ListItems | Route::GetItem => "GET",
            Route::DeleteItem => "DELETE",
        }
    }

    pub fn resource(self) -> &'static str {
        match self {
            Route::PutItem | Route::ListItems => ITEMS_RESOURCE,
            Route::GetItem | Route::DeleteItem => ITEM_RESOURCE,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.resource())
    }
}
