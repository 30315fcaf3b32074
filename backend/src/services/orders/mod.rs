//! # Order Service Module
//!
//! Aggregates the API endpoints that capture customer field values into
//! order line items and support the admin order-edit flow.
//!
//! ## Sub-modules:
//! - `add_item`: Binds submitted values to the product's fields, prices the
//!   line item and persists it.
//! - `get_items`: Lists an order's line items with their field records.
//! - `edit_item`: Replaces one captured value on a line item, appending an
//!   audit note when the value actually changed.
//! - `get_notes`: Lists an order's audit notes.

mod add_item;
mod edit_item;
mod get_items;
mod get_notes;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all order-related API endpoints.
const API_PATH: &str = "/api/orders";

/// Configures and returns the Actix `Scope` for order routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/items/add", post().to(add_item::process))
        .route("/items/{item_id}/edit", post().to(edit_item::process))
        .route("/{order_id}/items", get().to(get_items::process))
        .route("/{order_id}/notes", get().to(get_notes::process))
}
