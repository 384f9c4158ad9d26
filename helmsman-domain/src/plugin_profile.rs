//! Plugin profiles.

use crate::property::ConfigurationProperty;
use helmsman_types::ValidationErrorMap;

/// A named, reusable bundle of settings for one plugin (an elastic agent
/// profile, an authorization configuration, and the like).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginProfile {
    pub id: String,
    pub plugin_id: String,
    pub properties: Vec<ConfigurationProperty>,
}

impl PluginProfile {
    /// Creates a profile.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        plugin_id: impl Into<String>,
        properties: Vec<ConfigurationProperty>,
    ) -> Self {
        Self {
            id: id.into(),
            plugin_id: plugin_id.into(),
            properties,
        }
    }

    /// Relays the profile's validation state as a domain-keyed error map.
    #[must_use]
    pub fn validate(&self) -> ValidationErrorMap {
        let mut errors = ValidationErrorMap::new();
        if self.plugin_id.is_empty() {
            errors.add("pluginId", "cannot be blank");
        }
        for (index, property) in self.properties.iter().enumerate() {
            errors.merge_prefixed(&format!("properties[{index}]"), property.validate());
        }
        errors
    }
}
