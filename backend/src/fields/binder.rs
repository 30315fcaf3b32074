//! Binding of submitted values onto field definitions.
//!
//! At add-to-cart time every field on the product is turned into an
//! `OrderItemFieldRecord` carrying the formatted value and a frozen copy of
//! the definition itself. The copy decouples order history from later edits
//! to the product's configuration. After purchase, the admin order-edit
//! flow can replace a record's value; a change produces an audit note.

use common::model::field::FieldDefinition;
use common::model::order::OrderItemFieldRecord;
use common::model::value::{FieldValue, SubmittedValue};

/// Result of an admin edit. `note` is present exactly when the formatted
/// value actually changed.
#[derive(Debug)]
pub struct EditOutcome {
    pub changed: bool,
    pub note: Option<String>,
}

/// Maps submitted values onto the product's field list. Every definition
/// produces a record; fields the customer left untouched get an empty
/// value. List values are joined with `", "`.
pub fn bind(
    field_defs: &[FieldDefinition],
    submitted: &[SubmittedValue],
) -> Vec<OrderItemFieldRecord> {
    field_defs
        .iter()
        .map(|field| {
            let value = submitted
                .iter()
                .find(|s| s.field_index == field.index)
                .map(|s| s.raw_value.formatted())
                .unwrap_or_default();
            OrderItemFieldRecord {
                label: field.label.clone(),
                value,
                raw_field: field.clone(),
            }
        })
        .collect()
}

/// Replaces the value of the record matching `label` (first exact match).
/// The records are frozen snapshots, so the label is resolved only within
/// this one line item's list.
pub fn apply_edit(
    records: &mut [OrderItemFieldRecord],
    label: &str,
    new_value: &FieldValue,
) -> EditOutcome {
    let Some(record) = records.iter_mut().find(|r| r.label == label) else {
        return EditOutcome {
            changed: false,
            note: None,
        };
    };

    let formatted = new_value.formatted();
    if record.value == formatted {
        return EditOutcome {
            changed: false,
            note: None,
        };
    }

    let note = format!(
        "{} changed from \"{}\" to \"{}\".",
        label, record.value, formatted
    );
    record.value = formatted;
    EditOutcome {
        changed: true,
        note: Some(note),
    }
}
