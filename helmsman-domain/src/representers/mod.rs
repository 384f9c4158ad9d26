//! Versioned representation schemas for the configuration domain.
//!
//! Each submodule configures the generic engine for one domain type. A
//! version is an independently built schema; where versions differ only
//! by a small diff, they share a base builder function and layer the
//! diff on top before building — resolved once here, never per request.

pub mod package_repository;
pub mod plugin_profile;
pub mod property;

use crate::{PackageRepository, PluginProfile};
use helmsman_representer::{SchemaCompositionError, VersionRegistry};
use helmsman_types::ApiVersion;

/// Assembles the registry of all supported `(type, version)` schemas.
///
/// Called once at startup; a composition error here aborts
/// initialization rather than surfacing per request.
pub fn registry() -> Result<VersionRegistry, SchemaCompositionError> {
    let mut registry = VersionRegistry::new();
    registry.register::<PluginProfile>(ApiVersion::V1, plugin_profile::v1()?);
    registry.register::<PluginProfile>(ApiVersion::V2, plugin_profile::v2()?);
    registry.register::<PackageRepository>(ApiVersion::V1, package_repository::v1()?);
    registry.register::<PackageRepository>(ApiVersion::V2, package_repository::v2()?);
    Ok(registry)
}
