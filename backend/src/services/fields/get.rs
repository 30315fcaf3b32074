use crate::db;
use crate::fields::normalize;
use actix_web::web;
use common::model::field::FieldDefinition;
use rusqlite::Connection;

/// Actix web handler for `GET /api/products/fields/{product_id}`.
pub async fn process(product_id: web::Path<String>) -> impl actix_web::Responder {
    match list_fields(&product_id) {
        Ok(fields) => actix_web::HttpResponse::Ok().json(fields),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error retrieving fields: {}", e)),
    }
}

/// Opens the store and loads the normalized field list for a product.
pub(crate) fn list_fields(product_id: &str) -> Result<Vec<FieldDefinition>, String> {
    let conn = db::open()?;
    load_fields(&conn, product_id)
}

/// Loads and normalizes the stored field list on an existing connection.
/// Products with no stored configuration yield an empty list; malformed
/// entries inside a stored document are skipped during normalization.
pub(crate) fn load_fields(
    conn: &Connection,
    product_id: &str,
) -> Result<Vec<FieldDefinition>, String> {
    let Some(blob) = db::load_product_fields(conn, product_id)? else {
        return Ok(Vec::new());
    };
    let raw: Vec<serde_json::Value> = serde_json::from_str(&blob).map_err(|e| e.to_string())?;
    Ok(normalize::normalize_raw(raw))
}
