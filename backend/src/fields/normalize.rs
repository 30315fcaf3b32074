//! Normalization of a product's field-definition list.
//!
//! Raw documents arrive from the admin UI and from imports. Malformed
//! entries are skipped with a warning, never aborting the rest of the list.
//! Normalization fills defaults, generates missing reference keys, clears
//! unknown autocomplete tokens, dedupes option values where uniqueness is
//! required, migrates legacy label-keyed rule references onto stable keys
//! and renumbers the list.

use common::model::field::{FieldDefinition, FieldType, AUTOCOMPLETE_TOKENS};
use log::warn;
use std::collections::HashSet;
use uuid::Uuid;

/// Decodes a raw JSON array into typed definitions, skipping entries that
/// do not match the field shape, then normalizes the survivors.
pub fn normalize_raw(raw: Vec<serde_json::Value>) -> Vec<FieldDefinition> {
    let mut fields = Vec::with_capacity(raw.len());
    for (position, entry) in raw.into_iter().enumerate() {
        match serde_json::from_value::<FieldDefinition>(entry) {
            Ok(field) => fields.push(field),
            Err(e) => warn!("Skipping malformed field entry at position {}: {}", position, e),
        }
    }
    normalize(fields)
}

/// Normalizes an already-typed list. Serde has filled the value-level
/// defaults; this pass handles everything that needs the whole list.
pub fn normalize(mut fields: Vec<FieldDefinition>) -> Vec<FieldDefinition> {
    for field in &mut fields {
        if field.key.is_empty() {
            field.key = Uuid::new_v4().to_string();
        }
        if !field.autocomplete.is_empty()
            && !AUTOCOMPLETE_TOKENS.contains(&field.autocomplete.as_str())
        {
            warn!(
                "Clearing unknown autocomplete token '{}' on field '{}'",
                field.autocomplete, field.label
            );
            field.autocomplete.clear();
        }
        if !field.is_choice() {
            field.options.clear();
        } else if matches!(field.field_type, FieldType::Radio | FieldType::Select) {
            // Option values must be unique for single-choice controls.
            // First occurrence wins; checkboxes may repeat values.
            let mut seen = HashSet::new();
            field.options.retain(|opt| seen.insert(opt.value.clone()));
        }
    }

    migrate_rule_references(&mut fields);
    reindex(fields)
}

/// Reassigns `index` to the position in the list, preserving order.
/// Idempotent; run after every add, remove or reorder.
pub fn reindex(mut fields: Vec<FieldDefinition>) -> Vec<FieldDefinition> {
    for (position, field) in fields.iter_mut().enumerate() {
        field.index = position;
    }
    fields
}

/// Exact, case-sensitive label lookup. Labels are display names and may
/// collide; the first match wins.
pub fn find_by_label<'a>(
    fields: &'a [FieldDefinition],
    label: &str,
) -> Option<&'a FieldDefinition> {
    fields.iter().find(|f| f.label == label)
}

/// Lookup by stable reference key, the identity conditional rules use.
pub fn find_by_key<'a>(fields: &'a [FieldDefinition], key: &str) -> Option<&'a FieldDefinition> {
    fields.iter().find(|f| f.key == key)
}

/// Rewrites rule references that still point at labels onto the referenced
/// field's stable key. Older export documents stored label references, and
/// those break as soon as a field is renamed; keys do not. References that
/// match neither a key nor a label are left as-is and behave as dangling.
fn migrate_rule_references(fields: &mut [FieldDefinition]) {
    let snapshot = fields.to_vec();
    for field in fields.iter_mut() {
        for group in &mut field.conditional_rules {
            for rule in group {
                if rule.field.is_empty() || find_by_key(&snapshot, &rule.field).is_some() {
                    continue;
                }
                if let Some(target) = find_by_label(&snapshot, &rule.field) {
                    rule.field = target.key.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::rules::{ConditionRule, RuleOperator};
    use serde_json::json;

    fn field(label: &str, field_type: FieldType) -> FieldDefinition {
        let value = json!({ "label": label, "type": type_token(field_type) });
        serde_json::from_value(value).unwrap()
    }

    fn type_token(field_type: FieldType) -> &'static str {
        match field_type {
            FieldType::Text => "text",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            _ => unimplemented!("only the types used in tests"),
        }
    }

    #[test]
    fn reindex_assigns_contiguous_indices_and_is_idempotent() {
        let mut fields = vec![
            field("A", FieldType::Text),
            field("B", FieldType::Text),
            field("C", FieldType::Text),
        ];
        fields[0].index = 7;
        fields[1].index = 0;
        fields[2].index = 3;

        let once = reindex(fields);
        let labels: Vec<&str> = once.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert_eq!(once.iter().map(|f| f.index).collect::<Vec<_>>(), vec![0, 1, 2]);

        let twice = reindex(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_generates_missing_keys_and_keeps_existing_ones() {
        let mut a = field("A", FieldType::Text);
        a.key = "stable-key".to_string();
        let b = field("B", FieldType::Text);

        let fields = normalize(vec![a, b]);
        assert_eq!(fields[0].key, "stable-key");
        assert!(!fields[1].key.is_empty());
        assert_ne!(fields[0].key, fields[1].key);
    }

    #[test]
    fn normalize_raw_skips_malformed_entries() {
        let raw = vec![
            json!({ "label": "Good", "type": "text" }),
            json!({ "label": "No type" }),
            json!("not even an object"),
            json!({ "label": "Also good", "type": "select" }),
        ];

        let fields = normalize_raw(raw);
        let labels: Vec<&str> = fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Good", "Also good"]);
        assert_eq!(fields.iter().map(|f| f.index).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn normalize_clears_unknown_autocomplete_tokens() {
        let mut known = field("Email", FieldType::Text);
        known.autocomplete = "email".to_string();
        let mut unknown = field("Other", FieldType::Text);
        unknown.autocomplete = "cc-hologram".to_string();

        let fields = normalize(vec![known, unknown]);
        assert_eq!(fields[0].autocomplete, "email");
        assert_eq!(fields[1].autocomplete, "");
    }

    #[test]
    fn normalize_dedupes_option_values_for_select_but_not_checkbox() {
        let mut select = field("Size", FieldType::Select);
        select.options = serde_json::from_value(json!([
            { "label": "Small", "value": "s" },
            { "label": "Small again", "value": "s" },
            { "label": "Large", "value": "l" },
        ]))
        .unwrap();

        let mut checkbox = field("Extras", FieldType::Checkbox);
        checkbox.options = serde_json::from_value(json!([
            { "label": "One", "value": "x" },
            { "label": "Two", "value": "x" },
        ]))
        .unwrap();

        let fields = normalize(vec![select, checkbox]);
        let select_values: Vec<&str> =
            fields[0].options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(select_values, vec!["s", "l"]);
        assert_eq!(fields[1].options.len(), 2);
    }

    #[test]
    fn normalize_drops_options_on_non_choice_fields() {
        let mut text = field("Name", FieldType::Text);
        text.options = serde_json::from_value(json!([{ "label": "Stray", "value": "v" }])).unwrap();

        let fields = normalize(vec![text]);
        assert!(fields[0].options.is_empty());
    }

    #[test]
    fn normalize_migrates_label_references_onto_keys() {
        let mut color = field("Color", FieldType::Select);
        color.key = "color-key".to_string();
        let mut engraving = field("Engraving", FieldType::Text);
        engraving.conditional_logic = true;
        engraving.conditional_rules = vec![vec![ConditionRule {
            field: "Color".to_string(),
            operator: RuleOperator::Equals,
            value: "Red".to_string(),
        }]];

        let fields = normalize(vec![color, engraving]);
        assert_eq!(fields[1].conditional_rules[0][0].field, "color-key");
    }

    #[test]
    fn normalize_leaves_unresolvable_references_untouched() {
        let mut engraving = field("Engraving", FieldType::Text);
        engraving.conditional_rules = vec![vec![ConditionRule {
            field: "Ghost".to_string(),
            operator: RuleOperator::Equals,
            value: "x".to_string(),
        }]];

        let fields = normalize(vec![engraving]);
        assert_eq!(fields[0].conditional_rules[0][0].field, "Ghost");
    }

    #[test]
    fn find_by_label_is_exact_and_case_sensitive() {
        let fields = normalize(vec![field("Color", FieldType::Text)]);
        assert!(find_by_label(&fields, "Color").is_some());
        assert!(find_by_label(&fields, "color").is_none());
        assert!(find_by_label(&fields, "Colo").is_none());
    }

    #[test]
    fn find_by_key_resolves_generated_keys() {
        let fields = normalize(vec![field("A", FieldType::Text)]);
        let key = fields[0].key.clone();
        assert_eq!(find_by_key(&fields, &key).map(|f| f.label.as_str()), Some("A"));
        assert!(find_by_key(&fields, "missing").is_none());
    }
}
