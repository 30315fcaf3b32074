//! Conditional visibility evaluation.
//!
//! A field's rule set is an OR across rule groups and an AND within each
//! group. Evaluation is a pure function of the current form state: the
//! caller supplies a map from field key to current value containing an
//! entry for every field on the form, with absent input represented as an
//! empty value. A reference to a key that is not in the map is dangling
//! and can never be satisfied, whatever the operator.

use common::model::rules::{ConditionRule, RuleGroup, RuleOperator};
use common::model::value::FieldValue;
use std::collections::HashMap;

/// Decides whether a field with the given rule set is visible.
/// An empty rule set means the field is always visible.
pub fn evaluate(groups: &[RuleGroup], values: &HashMap<String, FieldValue>) -> bool {
    if groups.is_empty() {
        return true;
    }
    groups.iter().any(|group| group_met(group, values))
}

fn group_met(group: &[ConditionRule], values: &HashMap<String, FieldValue>) -> bool {
    group.iter().all(|rule| rule_met(rule, values))
}

fn rule_met(rule: &ConditionRule, values: &HashMap<String, FieldValue>) -> bool {
    // A rule without a target or a recognizable operator is vacuous. It is
    // skipped rather than treated as an error, so a half-configured rule in
    // the admin UI does not hide the field.
    if rule.field.is_empty() || rule.operator == RuleOperator::Unknown {
        return true;
    }

    let Some(target) = values.get(&rule.field) else {
        // Dangling reference: the rule points at a field that no longer
        // exists. Never satisfiable, for every operator.
        return false;
    };

    match rule.operator {
        RuleOperator::Equals => target.contains(&rule.value),
        RuleOperator::NotEquals => !target.contains(&rule.value),
        RuleOperator::GreaterThan => compare(target, &rule.value, |a, b| a > b),
        RuleOperator::LessThan => compare(target, &rule.value, |a, b| a < b),
        RuleOperator::FieldIsEmpty => target.is_empty(),
        RuleOperator::FieldIsNotEmpty => !target.is_empty(),
        RuleOperator::Unknown => true,
    }
}

/// Numeric comparison via f64 parse of both sides. Non-numeric input on
/// either side makes the comparison false, keeping the decision well
/// defined without raising.
fn compare(target: &FieldValue, rule_value: &str, cmp: fn(f64, f64) -> bool) -> bool {
    let Some(current) = target.scalar().and_then(|s| s.trim().parse::<f64>().ok()) else {
        return false;
    };
    let Ok(threshold) = rule_value.trim().parse::<f64>() else {
        return false;
    };
    cmp(current, threshold)
}
