//! The merge half of the engine.

use crate::binding::WriteError;
use crate::schema::Schema;
use helmsman_types::ValidationErrorMap;
use serde_json::Value;
use tracing::debug;

/// Merges a submitted JSON document into an existing domain object.
///
/// Field by field, write-enabled bindings only:
/// - unknown JSON members are ignored (forward compatibility),
/// - missing members leave the domain field untouched, except bindings
///   marked required-on-write, whose absence is a validation error,
/// - a member that fails to merge (wrong scalar type, malformed nested
///   structure) reports under its domain field identifier.
///
/// All field errors are collected before returning; there is no
/// fail-fast. Mutation happens through the write accessors as fields
/// merge, so a caller that needs all-or-nothing semantics merges into a
/// working copy and commits only on `Ok` — the concurrency controller
/// does exactly that.
pub fn deserialize<T>(
    doc: &Value,
    schema: &Schema<T>,
    target: &mut T,
) -> Result<(), ValidationErrorMap> {
    let Some(members) = doc.as_object() else {
        let mut errors = ValidationErrorMap::new();
        errors.add("base", "must be a JSON object");
        return Err(errors);
    };

    let mut errors = ValidationErrorMap::new();
    for binding in &schema.fields {
        if !binding.direction.writable() {
            continue;
        }
        let Some(write) = &binding.write else {
            continue;
        };
        let key = schema.rename.public_for(binding.name);
        match members.get(key) {
            None => {
                if binding.required_on_write {
                    errors.add(binding.name, "is required");
                }
            }
            Some(value) => match write(target, value) {
                Ok(()) => {}
                Err(WriteError::Message(message)) => errors.add(binding.name, message),
                Err(WriteError::Nested(nested)) => errors.merge_prefixed(binding.name, nested),
            },
        }
    }

    if errors.is_empty() {
        debug!(type_name = schema.type_name, "merged document into domain object");
        Ok(())
    } else {
        debug!(
            type_name = schema.type_name,
            fields = errors.len(),
            "document merge produced field errors"
        );
        Err(errors)
    }
}
