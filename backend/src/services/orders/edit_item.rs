use crate::db;
use crate::fields::binder;
use actix_web::{web, Responder};
use common::model::order::OrderItemFieldRecord;
use common::requests::EditItemFieldRequest;
use log::info;
use rusqlite::params;

pub(crate) async fn process(
    item_id: web::Path<String>,
    payload: web::Json<EditItemFieldRequest>,
) -> impl Responder {
    match edit_item_field(&item_id, payload.into_inner()) {
        Ok((records, changed)) => actix_web::HttpResponse::Ok()
            .json(serde_json::json!({ "changed": changed, "fields": records })),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error editing order item: {}", e)),
    }
}

/// Replaces one captured value on a line item. When the formatted value
/// actually changes, the updated records are persisted and an audit note
/// with the old and new values is appended to the owning order.
fn edit_item_field(
    item_id: &str,
    req: EditItemFieldRequest,
) -> Result<(Vec<OrderItemFieldRecord>, bool), String> {
    let conn = db::open()?;

    let mut stmt = conn
        .prepare("SELECT order_id, fields FROM order_items WHERE item_id = ?1")
        .map_err(|e| e.to_string())?;
    let (order_id, blob): (String, String) = stmt
        .query_row(params![item_id], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(|_| "Order item not found".to_string())?;

    let mut records: Vec<OrderItemFieldRecord> =
        serde_json::from_str(&blob).map_err(|e| e.to_string())?;

    let outcome = binder::apply_edit(&mut records, &req.label, &req.value);
    if outcome.changed {
        let updated = serde_json::to_string(&records).map_err(|e| e.to_string())?;
        conn.execute(
            "UPDATE order_items SET fields = ?1 WHERE item_id = ?2",
            params![updated, item_id],
        )
            .map_err(|e| e.to_string())?;

        if let Some(note) = &outcome.note {
            conn.execute(
                "INSERT INTO order_notes (order_id, note) VALUES (?1, ?2)",
                params![order_id, note],
            )
                .map_err(|e| e.to_string())?;
            info!("Order {}: {}", order_id, note);
        }
    }

    Ok((records, outcome.changed))
}
