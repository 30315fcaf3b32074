use crate::db;
use crate::fields::normalize;
use actix_web::{web, Responder};
use common::model::field::FieldDefinition;
use common::requests::SaveFieldsRequest;

pub async fn process(payload: web::Json<SaveFieldsRequest>) -> impl Responder {
    match save_fields(payload.into_inner()) {
        Ok(fields) => actix_web::HttpResponse::Ok().json(fields),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error saving fields: {}", e)),
    }
}

/// Normalizes and stores the submitted list, replacing whatever the product
/// had before. Returns the normalized list so the caller sees the generated
/// keys and renumbered indices.
pub fn save_fields(req: SaveFieldsRequest) -> Result<Vec<FieldDefinition>, String> {
    if req.product_id.trim().is_empty() {
        return Err("Product id must not be empty".to_string());
    }

    let fields = normalize::normalize(req.fields);
    let blob = serde_json::to_string(&fields).map_err(|e| e.to_string())?;

    let conn = db::open()?;
    db::store_product_fields(&conn, &req.product_id, &blob)?;

    Ok(fields)
}
