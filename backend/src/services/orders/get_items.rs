use crate::db;
use actix_web::{web, Responder};
use common::model::order::OrderLineItem;
use log::warn;
use rusqlite::params;

pub(crate) async fn process(order_id: web::Path<String>) -> impl Responder {
    match list_items(&order_id) {
        Ok(items) => actix_web::HttpResponse::Ok().json(items),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error retrieving order items: {}", e)),
    }
}

/// Lists an order's line items with their frozen field records. An item
/// whose stored record document no longer parses keeps its monetary data
/// and reports an empty record list rather than failing the whole order.
fn list_items(order_id: &str) -> Result<Vec<OrderLineItem>, String> {
    let conn = db::open()?;
    let mut stmt = conn
        .prepare(
            "SELECT item_id, order_id, product_id, quantity, unit_price, total, fields
             FROM order_items WHERE order_id = ?1",
        )
        .map_err(|e| e.to_string())?;

    let rows = stmt
        .query_map(params![order_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, u32>(3)?,
                row.get::<_, f64>(4)?,
                row.get::<_, f64>(5)?,
                row.get::<_, String>(6)?,
            ))
        })
        .map_err(|e| e.to_string())?;

    let mut items = Vec::new();
    for row in rows {
        let (item_id, order_id, product_id, quantity, unit_price, total, blob) =
            row.map_err(|e| e.to_string())?;
        let fields = match serde_json::from_str(&blob) {
            Ok(fields) => fields,
            Err(e) => {
                warn!("Order item {} has an unreadable field document: {}", item_id, e);
                Vec::new()
            }
        };
        items.push(OrderLineItem {
            item_id,
            order_id,
            product_id,
            quantity,
            unit_price,
            total,
            fields,
        });
    }

    Ok(items)
}
