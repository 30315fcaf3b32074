use crate::model::field::FieldDefinition;
use crate::model::value::{FieldValue, SubmittedValue};
use serde::Deserialize;

/// Payload for the save endpoint. Replaces the product's entire field list.
#[derive(Deserialize)]
pub struct SaveFieldsRequest {
    pub product_id: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// Payload for the import endpoint. `payload` is the raw export document.
#[derive(Deserialize)]
pub struct ImportFieldsRequest {
    pub product_id: String,
    pub payload: String,
}

/// Payload for the quote endpoint: current form state plus the pricing
/// context of the rendered product.
#[derive(Deserialize)]
pub struct QuoteRequest {
    pub product_id: String,
    #[serde(default)]
    pub values: Vec<SubmittedValue>,
    pub base_price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub quantity_based: bool,
}

/// Payload for adding a line item to an order at add-to-cart time.
#[derive(Deserialize)]
pub struct AddOrderItemRequest {
    pub order_id: String,
    pub product_id: String,
    pub quantity: u32,
    pub unit_price: f64,
    #[serde(default)]
    pub quantity_based: bool,
    #[serde(default)]
    pub values: Vec<SubmittedValue>,
}

/// Payload for the admin order-edit flow: replace the value of the record
/// matching `label` on one line item.
#[derive(Deserialize)]
pub struct EditItemFieldRequest {
    pub label: String,
    pub value: FieldValue,
}
