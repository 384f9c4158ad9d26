//! Package repositories and their package definitions.

use crate::property::ConfigurationProperty;

/// Which plugin understands a repository, and at what plugin version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginMetadata {
    pub id: String,
    pub version: String,
}

/// An external artifact repository (yum, npm, docker registry, …)
/// reachable through a package plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRepository {
    pub repo_id: String,
    pub name: String,
    pub plugin_metadata: PluginMetadata,
    pub configuration: Vec<ConfigurationProperty>,
    pub packages: Vec<PackageDefinition>,
}

/// One package tracked inside a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDefinition {
    pub id: String,
    pub name: String,
    pub auto_update: bool,
    pub configuration: Vec<ConfigurationProperty>,
}

impl PackageDefinition {
    /// Creates a package definition with polling enabled.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        configuration: Vec<ConfigurationProperty>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            auto_update: true,
            configuration,
        }
    }
}

impl Default for PackageDefinition {
    // Polling defaults on, matching server-created packages.
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            auto_update: true,
            configuration: Vec::new(),
        }
    }
}
