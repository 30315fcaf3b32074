//! # Product Field Configuration Service
//!
//! Aggregates the API endpoints for managing a product's custom field
//! configuration under the `/api/products/fields` path.
//!
//! ## Sub-modules:
//! - `get`: Returns the normalized field list stored for a product.
//! - `save`: Replaces a product's field list wholesale.
//! - `export`: Serializes a product's field list as a portable document.
//! - `import`: Parses an export document and replaces the target product's
//!   configuration with it.

pub(crate) mod get;

mod export;
mod import;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all field-configuration endpoints.
const API_PATH: &str = "/api/products/fields";

/// Configures and returns the Actix `Scope` for field-configuration routes.
///
/// # Registered Routes:
///
/// *   **`POST /save`**: Replaces the stored field list for a product and
///     returns the normalized result, including generated reference keys
///     and renumbered indices. Last write wins.
///
/// *   **`POST /import`**: Accepts an export document (versioned envelope
///     or legacy bare array), replaces the product's entire configuration
///     on success and leaves it untouched on a format error.
///
/// *   **`GET /export/{product_id}`**: Returns the product's configuration
///     as a versioned JSON document suitable for re-import elsewhere.
///
/// *   **`GET /{product_id}`**: Returns the normalized field list for a
///     product; products with no configuration yield an empty list.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/save", post().to(save::process))
        .route("/import", post().to(import::process))
        .route("/export/{product_id}", get().to(export::process))
        .route("/{product_id}", get().to(get::process))
}
