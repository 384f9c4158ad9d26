//! Configuration domain objects and their representation schemas.
//!
//! The types here are the in-memory configuration the API serves:
//! plugin profiles, package repositories and their packages, and the
//! key/value configuration properties they all carry. Each type gets one
//! schema module per supported API version under [`representers`];
//! [`representers::registry`] assembles the full version registry at
//! startup.
//!
//! Domain field identifiers are camelCase (`pluginId`, `encryptedValue`)
//! to match what the business-rule validator reports; the schemas' rename
//! tables map them to the public snake_case convention.

mod package_repository;
mod plugin_profile;
mod property;

pub mod representers;

pub use package_repository::{PackageDefinition, PackageRepository, PluginMetadata};
pub use plugin_profile::PluginProfile;
pub use property::ConfigurationProperty;
