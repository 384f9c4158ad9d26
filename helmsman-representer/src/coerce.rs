//! Scalar coercion helpers for write accessors.
//!
//! Each helper turns a submitted JSON value into the expected Rust type or
//! returns the message to attach to the field, so type mismatches surface
//! per field rather than as one blanket failure.

use serde_json::Value;

/// Expects a JSON string.
pub fn as_string(value: &Value) -> Result<String, String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| "must be a string".to_string())
}

/// Expects a JSON string or `null`.
pub fn as_opt_string(value: &Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err("must be a string or null".to_string()),
    }
}

/// Expects a JSON boolean.
pub fn as_bool(value: &Value) -> Result<bool, String> {
    value.as_bool().ok_or_else(|| "must be a boolean".to_string())
}
