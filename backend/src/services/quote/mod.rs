mod compute;

use actix_web::web;

const API_PATH: &str = "/api/quote";

/// Configures and returns the Actix `Scope` for the quote endpoint.
pub fn configure_routes() -> actix_web::Scope {
    web::scope(API_PATH).route("", web::post().to(compute::process))
}
