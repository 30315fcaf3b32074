use crate::db;
use crate::fields::codec;
use actix_web::{web, HttpResponse, Responder};
use common::model::field::FieldDefinition;
use common::requests::ImportFieldsRequest;
use log::info;

pub async fn process(payload: web::Json<ImportFieldsRequest>) -> impl Responder {
    let req = payload.into_inner();
    if req.product_id.trim().is_empty() {
        return HttpResponse::BadRequest().body("Product id must not be empty");
    }

    // Parse before touching storage. A format error leaves the product's
    // existing configuration exactly as it was.
    let fields = match codec::import_document(&req.payload) {
        Ok(fields) => fields,
        Err(e) => return HttpResponse::BadRequest().body(e),
    };

    match store_imported(&req.product_id, &fields) {
        Ok(_) => {
            info!(
                "Imported {} field(s) into product {}",
                fields.len(),
                req.product_id
            );
            HttpResponse::Ok().json(fields)
        }
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error importing fields: {}", e)),
    }
}

/// Replaces the product's configuration with the imported list. There is no
/// merge: fields not present in the document are gone afterwards.
fn store_imported(product_id: &str, fields: &[FieldDefinition]) -> Result<(), String> {
    let blob = serde_json::to_string(fields).map_err(|e| e.to_string())?;
    let conn = db::open()?;
    db::store_product_fields(&conn, product_id, &blob)
}
