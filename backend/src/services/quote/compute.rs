//! # Quote Service
//!
//! Provides `POST /api/quote`, the storefront's price table. The client
//! sends the current form state (values keyed by field index) together with
//! the product's unit price, the quantity and the quantity-based marker;
//! the response is the full adjustment breakdown and total, recomputed from
//! scratch on every call so partial updates can never drift.

use crate::db;
use crate::fields::pricing::{self, QuoteContext};
use crate::services::fields::get;
use actix_web::{web, Responder};
use common::model::pricing::QuoteBreakdown;
use common::requests::QuoteRequest;

pub(crate) async fn process(payload: web::Json<QuoteRequest>) -> impl Responder {
    match compute_quote(payload.into_inner()) {
        Ok(breakdown) => actix_web::HttpResponse::Ok().json(breakdown),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error computing quote: {}", e)),
    }
}

fn compute_quote(req: QuoteRequest) -> Result<QuoteBreakdown, String> {
    let conn = db::open()?;
    let fields = get::load_fields(&conn, &req.product_id)?;
    let ctx = QuoteContext {
        base_price: req.base_price,
        quantity: req.quantity,
        quantity_based: req.quantity_based,
    };
    Ok(pricing::compute_adjustment_table(&fields, &req.values, &ctx))
}
