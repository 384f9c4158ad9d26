//! Version resolution.
//!
//! One registry maps `(domain type, API version)` to the schema that
//! serves it. The registry is assembled once at startup and treated as
//! read-only afterwards; resolution is a hash lookup. There is no
//! fallback: an unknown version is a hard error, never "the closest
//! supported one".

use crate::schema::Schema;
use helmsman_types::{ApiVersion, VersionParseError};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// A request named a version this registry cannot serve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnsupportedVersionError {
    /// The version token parsed but no schema is registered for it.
    #[error(
        "API version {requested} is not supported for {type_name}; supported versions: [{}]",
        .supported.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    )]
    UnknownVersion {
        type_name: &'static str,
        requested: ApiVersion,
        supported: Vec<ApiVersion>,
    },

    /// The request did not carry a parseable version token at all.
    #[error(transparent)]
    Negotiation(#[from] VersionParseError),
}

/// Registry of schemas keyed by `(domain type, version)`.
#[derive(Default)]
pub struct VersionRegistry {
    schemas: HashMap<(TypeId, ApiVersion), Box<dyn Any + Send + Sync>>,
}

impl VersionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema for one domain type at one version.
    /// Registering the same pair twice replaces the earlier schema.
    pub fn register<T: 'static>(&mut self, version: ApiVersion, schema: Arc<Schema<T>>) {
        debug!(
            type_name = schema.type_name(),
            version = %version,
            "registering representation schema"
        );
        self.schemas
            .insert((TypeId::of::<T>(), version), Box::new(schema));
    }

    /// Resolves the schema serving `T` at `version`.
    pub fn resolve<T: 'static>(
        &self,
        version: ApiVersion,
    ) -> Result<Arc<Schema<T>>, UnsupportedVersionError> {
        match self.schemas.get(&(TypeId::of::<T>(), version)) {
            Some(entry) => {
                let schema = entry
                    .downcast_ref::<Arc<Schema<T>>>()
                    .expect("registry entry stored under its own TypeId")
                    .clone();
                Ok(schema)
            }
            None => {
                let supported = self.supported_versions::<T>();
                debug!(
                    type_name = std::any::type_name::<T>(),
                    requested = %version,
                    "rejected unsupported representation version"
                );
                Err(UnsupportedVersionError::UnknownVersion {
                    type_name: std::any::type_name::<T>(),
                    requested: version,
                    supported,
                })
            }
        }
    }

    /// Resolves directly from an `Accept` header value.
    pub fn resolve_accept<T: 'static>(
        &self,
        accept: &str,
    ) -> Result<(ApiVersion, Arc<Schema<T>>), UnsupportedVersionError> {
        let version = ApiVersion::from_accept(accept)?;
        let schema = self.resolve::<T>(version)?;
        Ok((version, schema))
    }

    /// Versions registered for `T`, ascending.
    #[must_use]
    pub fn supported_versions<T: 'static>(&self) -> Vec<ApiVersion> {
        let type_id = TypeId::of::<T>();
        let mut versions: Vec<ApiVersion> = self
            .schemas
            .keys()
            .filter(|(id, _)| *id == type_id)
            .map(|(_, version)| *version)
            .collect();
        versions.sort_unstable();
        versions
    }

    /// Number of registered `(type, version)` pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl fmt::Debug for VersionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionRegistry")
            .field("registered", &self.schemas.len())
            .finish()
    }
}
