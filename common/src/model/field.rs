use crate::model::pricing::PriceAdjustmentType;
use crate::model::rules::RuleGroup;
use serde::{Deserialize, Serialize};

/// Browser autocomplete tokens accepted on a field. Anything outside this
/// list is cleared during normalization so the storefront never emits an
/// invalid `autocomplete` attribute.
pub const AUTOCOMPLETE_TOKENS: &[&str] = &[
    "off",
    "on",
    "name",
    "honorific-prefix",
    "given-name",
    "additional-name",
    "family-name",
    "honorific-suffix",
    "nickname",
    "email",
    "username",
    "organization-title",
    "organization",
    "street-address",
    "address-line1",
    "address-line2",
    "address-line3",
    "country",
    "country-name",
    "postal-code",
    "tel",
    "bday",
    "sex",
    "url",
];

/// The input control rendered for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    LongText,
    Email,
    Number,
    Date,
    #[serde(rename = "yes-no")]
    YesNo,
    Radio,
    Checkbox,
    Select,
}

impl FieldType {
    /// Choice types carry an option list and per-option price adjustments.
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldType::Radio | FieldType::Checkbox | FieldType::Select)
    }
}

/// One selectable option on a `radio`, `checkbox` or `select` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
    /// Whether this option is pre-selected when the field is rendered.
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub price_adjustment_type: PriceAdjustmentType,
    #[serde(default)]
    pub price_adjustment_value: f64,
}

/// A single configurable product field and all of its settings.
///
/// A product owns an ordered list of these. The list is replaced wholesale
/// on every save or import; order line items freeze their own copies at
/// purchase time, so later edits never rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Position in the product's field list. Contiguous from 0 after any
    /// structural edit; submitted values are keyed by this.
    #[serde(default)]
    pub index: usize,
    /// Stable reference identity, generated once at creation and never
    /// rewritten. Conditional rules point at this, not at the label, so
    /// reordering or renaming a field cannot break the rules of another.
    #[serde(default)]
    pub key: String,
    /// Display name. Also the display key on order item records.
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub autofocus: bool,
    /// Whether the captured value may still be changed through the admin
    /// order-edit flow after purchase.
    #[serde(default)]
    pub editable: bool,
    #[serde(default)]
    pub placeholder_text: String,
    #[serde(default)]
    pub help_text: String,
    /// One of `AUTOCOMPLETE_TOKENS`, or empty for no hint.
    #[serde(default)]
    pub autocomplete: String,
    /// Present only for choice types; empty otherwise.
    #[serde(default)]
    pub options: Vec<FieldOption>,
    /// Default value. For choice types this is an option value.
    #[serde(default, rename = "default")]
    pub default_value: String,
    #[serde(default, rename = "minlength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, rename = "maxlength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<u32>,
    /// Gates every price adjustment on this field. When false the field
    /// never contributes to the total, whatever the settings below say.
    #[serde(default)]
    pub adjust_price: bool,
    /// Field-level adjustment, used when the type is not a choice type.
    /// Choice types carry their adjustments per option instead.
    #[serde(default)]
    pub price_adjustment_type: PriceAdjustmentType,
    #[serde(default)]
    pub price_adjustment_value: f64,
    /// Gates the conditional rules below.
    #[serde(default)]
    pub conditional_logic: bool,
    /// OR across groups, AND within a group.
    #[serde(default)]
    pub conditional_rules: Vec<RuleGroup>,
}

impl FieldDefinition {
    pub fn is_choice(&self) -> bool {
        self.field_type.is_choice()
    }
}
