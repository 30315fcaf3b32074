use crate::db;
use actix_web::{web, Responder};
use common::model::order::OrderNote;
use rusqlite::params;

pub(crate) async fn process(order_id: web::Path<String>) -> impl Responder {
    match list_notes(&order_id) {
        Ok(notes) => actix_web::HttpResponse::Ok().json(notes),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error retrieving order notes: {}", e)),
    }
}

/// Lists an order's audit notes, oldest first.
fn list_notes(order_id: &str) -> Result<Vec<OrderNote>, String> {
    let conn = db::open()?;
    let mut stmt = conn
        .prepare("SELECT order_id, note, created_at FROM order_notes WHERE order_id = ?1 ORDER BY id")
        .map_err(|e| e.to_string())?;

    let notes = stmt
        .query_map(params![order_id], |row| {
            Ok(OrderNote {
                order_id: row.get(0)?,
                note: row.get(1)?,
                created_at: row.get(2)?,
            })
        })
        .map_err(|e| e.to_string())?
        .filter_map(Result::ok)
        .collect();

    Ok(notes)
}
