use serde::{Deserialize, Serialize};

/// Comparison applied by a single conditional rule.
///
/// Unrecognized operator tokens deserialize to `Unknown`, which makes the
/// rule vacuous instead of failing the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOperator {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    FieldIsEmpty,
    FieldIsNotEmpty,
    #[default]
    #[serde(other)]
    Unknown,
}

/// One show/hide rule: compare the current value of the referenced field
/// against `value` using `operator`. `field` holds the referenced field's
/// stable key (legacy documents referencing labels are migrated on load).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionRule {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub operator: RuleOperator,
    #[serde(default)]
    pub value: String,
}

/// Rules within a group are ANDed; a field's groups are ORed.
pub type RuleGroup = Vec<ConditionRule>;
