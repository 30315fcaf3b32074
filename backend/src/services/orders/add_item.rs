use crate::db;
use crate::fields::binder;
use crate::fields::pricing::{self, QuoteContext};
use crate::services::fields::get;
use actix_web::{web, Responder};
use common::model::order::OrderLineItem;
use common::requests::AddOrderItemRequest;
use rusqlite::params;
use uuid::Uuid;

pub(crate) async fn process(payload: web::Json<AddOrderItemRequest>) -> impl Responder {
    match add_line_item(payload.into_inner()) {
        Ok(item) => actix_web::HttpResponse::Ok().json(item),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error adding order item: {}", e)),
    }
}

/// Creates one priced line item from the submitted form values.
///
/// The product's current field list is bound into frozen records, the
/// total is computed with the same visibility-aware table the storefront
/// shows, and the result is persisted as this line item's snapshot.
fn add_line_item(req: AddOrderItemRequest) -> Result<OrderLineItem, String> {
    if req.order_id.trim().is_empty() || req.product_id.trim().is_empty() {
        return Err("Order id and product id must not be empty".to_string());
    }
    if req.quantity == 0 {
        return Err("Quantity must be at least 1".to_string());
    }

    let conn = db::open()?;
    let field_defs = get::load_fields(&conn, &req.product_id)?;

    let records = binder::bind(&field_defs, &req.values);
    let ctx = QuoteContext {
        base_price: req.unit_price,
        quantity: req.quantity,
        quantity_based: req.quantity_based,
    };
    let breakdown = pricing::compute_adjustment_table(&field_defs, &req.values, &ctx);

    let item = OrderLineItem {
        item_id: Uuid::new_v4().to_string(),
        order_id: req.order_id,
        product_id: req.product_id,
        quantity: req.quantity,
        unit_price: req.unit_price,
        total: breakdown.total,
        fields: records,
    };

    let blob = serde_json::to_string(&item.fields).map_err(|e| e.to_string())?;
    conn.execute(
        "INSERT INTO order_items (item_id, order_id, product_id, quantity, unit_price, total, fields)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            item.item_id,
            item.order_id,
            item.product_id,
            item.quantity,
            item.unit_price,
            item.total,
            blob
        ],
    )
        .map_err(|e| e.to_string())?;

    Ok(item)
}
