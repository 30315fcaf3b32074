//! Price adjustment math.
//!
//! Each field contributes a signed delta to the product price. Choice
//! fields carry their adjustments per option; every other type carries one
//! field-level adjustment. Percentages are always taken of the unit base
//! price, never of a running total, so stacked fields cannot compound.

use crate::fields::conditions;
use common::model::field::FieldDefinition;
use common::model::pricing::{PriceAdjustmentType, QuoteBreakdown, QuoteLine};
use common::model::value::{FieldValue, SubmittedValue};
use std::collections::HashMap;

/// Pricing context of the rendered product. `base_price` is the unit price
/// of the current selection (variation-aware on the caller's side), not a
/// line subtotal. `quantity_based` is the explicit marker that lets
/// quantity-type adjustments scale with the quantity.
#[derive(Debug, Clone, Copy)]
pub struct QuoteContext {
    pub base_price: f64,
    pub quantity: u32,
    pub quantity_based: bool,
}

/// Computes the signed delta contributed by one field's current value.
/// Returns 0.0 when the field does not adjust the price or has no value.
pub fn calculate(field: &FieldDefinition, value: &FieldValue, ctx: &QuoteContext) -> f64 {
    if !field.adjust_price || value.is_empty() {
        return 0.0;
    }

    if field.is_choice() {
        // Sum the adjustment of every selected option. Checkboxes can match
        // several options at once; unmatched selections contribute nothing.
        value
            .entries()
            .iter()
            .filter(|selection| !selection.is_empty())
            .map(|selection| {
                field
                    .options
                    .iter()
                    .find(|opt| opt.value == **selection)
                    .map_or(0.0, |opt| {
                        resolve(opt.price_adjustment_type, opt.price_adjustment_value, ctx)
                    })
            })
            .sum()
    } else {
        resolve(field.price_adjustment_type, field.price_adjustment_value, ctx)
    }
}

/// Turns one adjustment setting into money. Non-finite input yields 0.0,
/// keeping totals well defined.
fn resolve(kind: PriceAdjustmentType, amount: f64, ctx: &QuoteContext) -> f64 {
    if !amount.is_finite() {
        return 0.0;
    }
    let resolved = match kind {
        PriceAdjustmentType::Fixed => amount,
        PriceAdjustmentType::Percentage => ctx.base_price * amount / 100.0,
        PriceAdjustmentType::Quantity => {
            if ctx.quantity_based {
                amount * ctx.quantity as f64
            } else {
                amount
            }
        }
    };
    if resolved.is_finite() {
        resolved
    } else {
        0.0
    }
}

/// Builds the current-value map the evaluator works on: one entry per
/// field, keyed by reference key, with absent input as an empty value.
pub fn values_by_key(
    fields: &[FieldDefinition],
    submitted: &[SubmittedValue],
) -> HashMap<String, FieldValue> {
    fields
        .iter()
        .map(|field| {
            let value = submitted
                .iter()
                .find(|s| s.field_index == field.index)
                .map(|s| s.raw_value.clone())
                .unwrap_or_default();
            (field.key.clone(), value)
        })
        .collect()
}

/// Recomputes the full price table from scratch. Fields hidden by their
/// conditional rules are excluded, so a value left behind in a hidden
/// control cannot leak into the total.
pub fn compute_adjustment_table(
    fields: &[FieldDefinition],
    submitted: &[SubmittedValue],
    ctx: &QuoteContext,
) -> QuoteBreakdown {
    let current = values_by_key(fields, submitted);
    let mut lines = Vec::new();
    let mut total = ctx.base_price * ctx.quantity as f64;

    for field in fields {
        if field.conditional_logic && !conditions::evaluate(&field.conditional_rules, &current) {
            continue;
        }
        let Some(value) = current.get(&field.key) else {
            continue;
        };
        let amount = calculate(field, value, ctx);
        if amount != 0.0 {
            lines.push(QuoteLine {
                label: field.label.clone(),
                amount,
            });
            total += amount;
        }
    }

    QuoteBreakdown { lines, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::rules::{ConditionRule, RuleOperator};
    use serde_json::json;

    fn ctx(base_price: f64, quantity: u32) -> QuoteContext {
        QuoteContext {
            base_price,
            quantity,
            quantity_based: false,
        }
    }

    fn adjusting_field(kind: &str, amount: f64) -> FieldDefinition {
        serde_json::from_value(json!({
            "label": "Extra",
            "type": "text",
            "adjust_price": true,
            "price_adjustment_type": kind,
            "price_adjustment_value": amount,
        }))
        .unwrap()
    }

    fn gift_wrap_field() -> FieldDefinition {
        serde_json::from_value(json!({
            "label": "Wrapping",
            "type": "select",
            "adjust_price": true,
            "options": [
                { "label": "None", "value": "" },
                { "label": "Gift wrap", "value": "gift_wrap",
                  "price_adjustment_type": "fixed", "price_adjustment_value": 3.0 },
            ],
        }))
        .unwrap()
    }

    #[test]
    fn no_adjustment_when_gate_is_off() {
        let mut field = adjusting_field("fixed", 5.0);
        field.adjust_price = false;
        assert_eq!(calculate(&field, &FieldValue::from("x"), &ctx(100.0, 1)), 0.0);
    }

    #[test]
    fn no_adjustment_for_empty_value() {
        let field = adjusting_field("fixed", 5.0);
        assert_eq!(calculate(&field, &FieldValue::from(""), &ctx(100.0, 1)), 0.0);
        assert_eq!(
            calculate(&field, &FieldValue::from(Vec::<String>::new()), &ctx(100.0, 1)),
            0.0
        );
    }

    #[test]
    fn fixed_adjustment_ignores_base_price_and_quantity() {
        let field = adjusting_field("fixed", 5.0);
        assert_eq!(calculate(&field, &FieldValue::from("x"), &ctx(100.0, 1)), 5.0);
        assert_eq!(calculate(&field, &FieldValue::from("x"), &ctx(1.0, 9)), 5.0);
    }

    #[test]
    fn percentage_adjustment_is_taken_of_the_base_price() {
        let field = adjusting_field("percentage", 10.0);
        assert_eq!(calculate(&field, &FieldValue::from("x"), &ctx(100.0, 1)), 10.0);
        assert_eq!(calculate(&field, &FieldValue::from("x"), &ctx(50.0, 1)), 5.0);
    }

    #[test]
    fn quantity_adjustment_scales_only_with_the_marker_set() {
        let field = adjusting_field("quantity", 2.0);
        let unmarked = ctx(100.0, 3);
        assert_eq!(calculate(&field, &FieldValue::from("x"), &unmarked), 2.0);

        let marked = QuoteContext {
            quantity_based: true,
            ..unmarked
        };
        assert_eq!(calculate(&field, &FieldValue::from("x"), &marked), 6.0);
    }

    #[test]
    fn non_finite_adjustment_contributes_zero() {
        let mut field = adjusting_field("fixed", 5.0);
        field.price_adjustment_value = f64::NAN;
        assert_eq!(calculate(&field, &FieldValue::from("x"), &ctx(100.0, 1)), 0.0);
    }

    #[test]
    fn selected_option_contributes_its_adjustment() {
        let field = gift_wrap_field();
        assert_eq!(
            calculate(&field, &FieldValue::from("gift_wrap"), &ctx(100.0, 1)),
            3.0
        );
        assert_eq!(calculate(&field, &FieldValue::from(""), &ctx(100.0, 1)), 0.0);
        assert_eq!(
            calculate(&field, &FieldValue::from("unknown"), &ctx(100.0, 1)),
            0.0
        );
    }

    #[test]
    fn checkbox_sums_every_matching_option() {
        let field: FieldDefinition = serde_json::from_value(json!({
            "label": "Extras",
            "type": "checkbox",
            "adjust_price": true,
            "options": [
                { "label": "Ribbon", "value": "ribbon",
                  "price_adjustment_type": "fixed", "price_adjustment_value": 1.5 },
                { "label": "Card", "value": "card",
                  "price_adjustment_type": "fixed", "price_adjustment_value": 2.0 },
                { "label": "Box", "value": "box",
                  "price_adjustment_type": "fixed", "price_adjustment_value": 4.0 },
            ],
        }))
        .unwrap();

        let value = FieldValue::from(vec!["ribbon".to_string(), "box".to_string()]);
        assert_eq!(calculate(&field, &value, &ctx(100.0, 1)), 5.5);
    }

    #[test]
    fn table_total_is_base_times_quantity_plus_adjustments() {
        let fields = crate::fields::normalize::normalize(vec![
            adjusting_field("fixed", 5.0),
            adjusting_field("percentage", 10.0),
        ]);
        let submitted = vec![
            SubmittedValue { field_index: 0, raw_value: FieldValue::from("a") },
            SubmittedValue { field_index: 1, raw_value: FieldValue::from("b") },
        ];

        let breakdown = compute_adjustment_table(&fields, &submitted, &ctx(20.0, 2));
        assert_eq!(breakdown.lines.len(), 2);
        assert_eq!(breakdown.total, 20.0 * 2.0 + 5.0 + 2.0);
    }

    #[test]
    fn hidden_fields_do_not_contribute() {
        let mut toggle: FieldDefinition = serde_json::from_value(json!({
            "label": "Toggle", "type": "text"
        }))
        .unwrap();
        toggle.key = "toggle".to_string();

        let mut surcharge = adjusting_field("fixed", 5.0);
        surcharge.conditional_logic = true;
        surcharge.conditional_rules = vec![vec![ConditionRule {
            field: "toggle".to_string(),
            operator: RuleOperator::Equals,
            value: "on".to_string(),
        }]];

        let fields = crate::fields::normalize::normalize(vec![toggle, surcharge]);
        let submitted = vec![SubmittedValue {
            field_index: 1,
            raw_value: FieldValue::from("x"),
        }];

        // Toggle is not "on", so the surcharge field is hidden and its
        // stray value is ignored.
        let hidden = compute_adjustment_table(&fields, &submitted, &ctx(10.0, 1));
        assert!(hidden.lines.is_empty());
        assert_eq!(hidden.total, 10.0);

        let mut with_toggle = submitted.clone();
        with_toggle.push(SubmittedValue {
            field_index: 0,
            raw_value: FieldValue::from("on"),
        });
        let shown = compute_adjustment_table(&fields, &with_toggle, &ctx(10.0, 1));
        assert_eq!(shown.lines.len(), 1);
        assert_eq!(shown.total, 15.0);
    }
}
