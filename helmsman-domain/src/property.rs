//! Key/value configuration properties.

use helmsman_types::ValidationErrorMap;

/// One key/value pair of plugin-defined configuration.
///
/// A property is either plain (`value` set) or secure (`encrypted_value`
/// set). Secure properties never expose their plain value; the API
/// renders and accepts only the encrypted form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationProperty {
    pub key: String,
    pub value: Option<String>,
    pub encrypted_value: Option<String>,
}

impl ConfigurationProperty {
    /// Creates a plain property.
    #[must_use]
    pub fn plain(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            encrypted_value: None,
        }
    }

    /// Creates a secure property from an already-encrypted value.
    #[must_use]
    pub fn secure(key: impl Into<String>, encrypted_value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            encrypted_value: Some(encrypted_value.into()),
        }
    }

    /// True when the property carries an encrypted value.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.encrypted_value.is_some()
    }

    /// Relays the property's validation state as a domain-keyed error map.
    #[must_use]
    pub fn validate(&self) -> ValidationErrorMap {
        let mut errors = ValidationErrorMap::new();
        if self.value.is_some() && self.encrypted_value.is_some() {
            errors.add(
                "encryptedValue",
                "You may only specify `value` or `encrypted_value`, not both.",
            );
        }
        errors
    }
}
