use serde::{Deserialize, Serialize};

/// How an adjustment amount is turned into money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceAdjustmentType {
    /// Added as-is, independent of base price and quantity.
    #[default]
    Fixed,
    /// A fixed amount per unit. Multiplied by the quantity only when the
    /// calculation context carries the quantity-based marker.
    Quantity,
    /// Percentage of the unit base price, never of a running total.
    Percentage,
}

/// One row of the storefront price table: a field's contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub label: String,
    pub amount: f64,
}

/// The full price table shown next to the product form. Recomputed from
/// scratch on every change, so partial updates can never drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub lines: Vec<QuoteLine>,
    pub total: f64,
}
