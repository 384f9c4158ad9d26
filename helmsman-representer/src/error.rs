//! Schema composition errors.
//!
//! These are build-time failures: a schema that does not compose aborts
//! process initialization instead of failing requests one by one.

use thiserror::Error;

/// Errors raised while building a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaCompositionError {
    /// The type transitively embeds its own schema. Rejected here so the
    /// serializer can never recurse without bound.
    #[error("cyclic composition: {type_name} transitively embeds itself")]
    CyclicComposition { type_name: &'static str },

    /// Two field bindings share a domain name.
    #[error("duplicate field binding: {name}")]
    DuplicateField { name: &'static str },

    /// Two link specs share a rel.
    #[error("duplicate link rel: {rel}")]
    DuplicateLink { rel: &'static str },

    /// More than one collection binding was attached.
    #[error("schema already has a collection binding; second key: {json_key}")]
    MultipleCollections { json_key: &'static str },
}
