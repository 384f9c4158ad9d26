//! The error translator.
//!
//! Validation errors are produced elsewhere keyed by domain field
//! identifiers (`encryptedValue`); responses speak public API names
//! (`encrypted_value`). Translation reuses the schema's rename table so
//! error keys always match the keys clients submitted.

use crate::rename::FieldRenameTable;
use helmsman_types::ValidationErrorMap;
use serde_json::{json, Map, Value};

/// Reshapes a validation-error map into the public naming convention:
/// `{public_field: ["msg1", "msg2"], …}`.
///
/// Field order and message order are preserved; fields absent from the
/// rename table pass through unchanged. Two domain fields that map to the
/// same public name aggregate their messages in report order.
pub fn translate(errors: &ValidationErrorMap, renames: &FieldRenameTable) -> Value {
    let mut out = Map::new();
    for (field, messages) in errors.iter() {
        let public = renames.public_for_path(field);
        let rendered = messages.iter().map(|m| Value::String(m.clone()));
        match out.get_mut(&public) {
            Some(Value::Array(existing)) => existing.extend(rendered),
            _ => {
                out.insert(public, Value::Array(rendered.collect()));
            }
        }
    }
    Value::Object(out)
}

/// Builds the validation-failure response body:
/// `{"message": <summary>, "data": {public_field: [messages]}}`.
pub fn error_body(message: &str, errors: &ValidationErrorMap, renames: &FieldRenameTable) -> Value {
    json!({
        "message": message,
        "data": translate(errors, renames),
    })
}
