use serde::{Deserialize, Serialize};

/// A customer-entered value: a plain string for most field types, a list of
/// strings for multi-select controls such as checkboxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Many(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Single(String::new())
    }
}

impl FieldValue {
    /// A value is empty when nothing was entered or selected.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Single(s) => s.is_empty(),
            FieldValue::Many(v) => v.iter().all(|s| s.is_empty()),
        }
    }

    /// Display form: lists are joined with `", "`.
    pub fn formatted(&self) -> String {
        match self {
            FieldValue::Single(s) => s.clone(),
            FieldValue::Many(v) => v.join(", "),
        }
    }

    /// Exact match against a candidate string. For lists, true when any
    /// selected entry matches.
    pub fn contains(&self, candidate: &str) -> bool {
        match self {
            FieldValue::Single(s) => s == candidate,
            FieldValue::Many(v) => v.iter().any(|s| s == candidate),
        }
    }

    /// The individual entries carried by this value.
    pub fn entries(&self) -> Vec<&str> {
        match self {
            FieldValue::Single(s) => vec![s.as_str()],
            FieldValue::Many(v) => v.iter().map(String::as_str).collect(),
        }
    }

    /// Scalar view for numeric comparisons. Lists have no scalar form.
    pub fn scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Single(s) => Some(s.as_str()),
            FieldValue::Many(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Single(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Single(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self {
        FieldValue::Many(v)
    }
}

/// One captured input at add-to-cart or order-edit time, keyed by the
/// position of its field in the product's field list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedValue {
    pub field_index: usize,
    #[serde(default)]
    pub raw_value: FieldValue,
}
