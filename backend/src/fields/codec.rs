//! Import/export of a product's complete field configuration.
//!
//! The export document is a versioned envelope around the normalized field
//! list, used for cross-product copy and backup. Import is a destructive,
//! all-or-nothing replace of the target product's configuration; historical
//! order records are unaffected since they hold frozen copies.

use crate::fields::normalize;
use common::model::field::FieldDefinition;
use serde_json::Value;

/// Version written by `export_document`. Imports accept this version and,
/// for documents predating the envelope, a bare JSON array (version 0).
pub const SCHEMA_VERSION: u64 = 1;

const INVALID_FORMAT: &str = "Invalid format: expected a JSON array of field objects";

/// Serializes the field list verbatim, nested options and rules included,
/// wrapped in the version envelope.
pub fn export_document(fields: &[FieldDefinition]) -> Result<String, String> {
    let doc = serde_json::json!({
        "version": SCHEMA_VERSION,
        "fields": fields,
    });
    serde_json::to_string_pretty(&doc).map_err(|e| e.to_string())
}

/// Parses an export document back into a normalized field list.
///
/// Fails when the payload is not valid JSON, is neither an envelope nor an
/// array, carries an unsupported version, or its field entries are not
/// objects. Individual entries that are objects but do not match the field
/// shape are skipped during normalization rather than failing the import.
pub fn import_document(payload: &str) -> Result<Vec<FieldDefinition>, String> {
    let document: Value = serde_json::from_str(payload).map_err(|_| INVALID_FORMAT.to_string())?;

    let raw = match document {
        // Legacy version 0: the bare field array.
        Value::Array(entries) => entries,
        Value::Object(mut envelope) => {
            let version = envelope.get("version").and_then(Value::as_u64).unwrap_or(0);
            if version > SCHEMA_VERSION {
                return Err(format!("Unsupported document version {}", version));
            }
            match envelope.remove("fields") {
                Some(Value::Array(entries)) => entries,
                _ => return Err(INVALID_FORMAT.to_string()),
            }
        }
        _ => return Err(INVALID_FORMAT.to_string()),
    };

    if !raw.iter().all(Value::is_object) {
        return Err(INVALID_FORMAT.to_string());
    }

    Ok(normalize::normalize_raw(raw))
}
