//! Core types for the Helmsman configuration API.
//!
//! Defines the value types every other Helmsman crate depends on:
//! - [`ApiVersion`] — the version token negotiated via the `Accept` header
//! - [`ValidationErrorMap`] — field-keyed validation messages relayed from
//!   the business-rule validator
//!
//! These types carry no behavior beyond parsing and formatting; the
//! serialization engine itself lives in `helmsman-representer`.

mod errors;
mod version;

pub use errors::ValidationErrorMap;
pub use version::{ApiVersion, VersionParseError};
