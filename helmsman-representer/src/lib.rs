//! Schema-driven serialization engine for the Helmsman configuration API.
//!
//! Converts domain configuration objects into versioned, hypermedia-linked
//! JSON documents and merges client-submitted JSON back into existing
//! objects. The engine is generic; each domain type configures it with a
//! declarative [`Schema`] per API version:
//!
//! - [`Schema`] / [`SchemaBuilder`] — which fields, links and nested objects
//!   a representation exposes. Built once at startup, shared read-only.
//! - [`serialize`] / [`deserialize`] — the generic render and merge engine.
//! - [`VersionRegistry`] — `(domain type, version)` to schema resolution,
//!   with hard errors for unknown versions.
//! - [`translate`] / [`error_body`] — reshaping of validation-error maps
//!   into the public field-naming convention.
//!
//! Everything here is pure and synchronous: no I/O, no ambient state. All
//! per-request inputs travel on an explicit [`RepresentationContext`].

mod binding;
mod coerce;
mod context;
mod deserialize;
mod error;
mod links;
mod registry;
mod rename;
mod schema;
mod serialize;
mod translate;

pub use binding::{Direction, FieldBinding, WriteError};
pub use coerce::{as_bool, as_opt_string, as_string};
pub use context::{RenderMode, RepresentationContext, UrlBuilder};
pub use deserialize::deserialize;
pub use error::SchemaCompositionError;
pub use links::{LinkSpec, LinkTemplate};
pub use registry::{UnsupportedVersionError, VersionRegistry};
pub use rename::FieldRenameTable;
pub use schema::{Schema, SchemaBuilder};
pub use serialize::serialize;
pub use translate::{error_body, translate};
