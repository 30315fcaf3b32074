use crate::fields::codec;
use crate::services::fields::get;
use actix_web::{web, Responder};

pub async fn process(product_id: web::Path<String>) -> impl Responder {
    match export_fields(&product_id) {
        Ok(doc) => actix_web::HttpResponse::Ok()
            .content_type("application/json")
            .body(doc),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error exporting fields: {}", e)),
    }
}

/// Exports the normalized field list as a versioned document. A product
/// without configuration exports an empty list, which imports cleanly.
fn export_fields(product_id: &str) -> Result<String, String> {
    let fields = get::list_fields(product_id)?;
    codec::export_document(&fields)
}
