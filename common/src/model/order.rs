use crate::model::field::FieldDefinition;
use serde::{Deserialize, Serialize};

/// Snapshot of one field's captured value, attached to a purchased line item.
///
/// `raw_field` is a full copy of the definition as it stood at purchase
/// time, so later edits to the product's configuration never change what an
/// existing order says was bought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemFieldRecord {
    pub label: String,
    /// Formatted display value; lists are joined with `", "`.
    pub value: String,
    pub raw_field: FieldDefinition,
}

/// A purchased line item together with its frozen field records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub item_id: String,
    pub order_id: String,
    pub product_id: String,
    pub quantity: u32,
    pub unit_price: f64,
    /// `unit_price * quantity` plus every field adjustment, fixed at
    /// add-to-cart time.
    pub total: f64,
    pub fields: Vec<OrderItemFieldRecord>,
}

/// Human-readable audit entry appended to an order when an admin edit
/// actually changes a captured value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderNote {
    pub order_id: String,
    pub note: String,
    pub created_at: String,
}
