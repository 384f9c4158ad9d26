//! Configuration-property schema, shared by every version and parent type.

use crate::ConfigurationProperty;
use helmsman_representer::{as_opt_string, as_string, FieldBinding, Schema, SchemaCompositionError};
use serde_json::json;
use std::sync::Arc;

/// Builds the property schema.
///
/// A secure property renders `encrypted_value` and skips `value`; a plain
/// property the reverse. The domain identifier `encryptedValue` is renamed
/// to the public `encrypted_value` for documents and error maps alike.
pub fn schema() -> Result<Arc<Schema<ConfigurationProperty>>, SchemaCompositionError> {
    let schema = Schema::<ConfigurationProperty>::builder()
        .field(
            FieldBinding::new(
                "key",
                |property: &ConfigurationProperty, _| json!(property.key),
                |property, value| {
                    property.key = as_string(value)?;
                    Ok(())
                },
            )
            .required(),
        )
        .field(
            FieldBinding::new(
                "value",
                |property: &ConfigurationProperty, _| json!(property.value),
                |property, value| {
                    property.value = as_opt_string(value)?;
                    Ok(())
                },
            )
            .skip_if(ConfigurationProperty::is_secure),
        )
        .field(
            FieldBinding::new(
                "encryptedValue",
                |property: &ConfigurationProperty, _| json!(property.encrypted_value),
                |property, value| {
                    property.encrypted_value = as_opt_string(value)?;
                    Ok(())
                },
            )
            .skip_if(|property: &ConfigurationProperty| !property.is_secure()),
        )
        .rename("encryptedValue", "encrypted_value")
        .build()?;
    Ok(Arc::new(schema))
}
