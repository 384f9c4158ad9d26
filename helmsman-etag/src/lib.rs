//! Content-version tokens (ETags) and optimistic concurrency control.
//!
//! An [`Etag`] is an opaque digest of a representation's canonical
//! content. GETs return it; updates must present it back, and the
//! [`controller`] refuses to merge a document whose presented tag no
//! longer matches the resource — a stale write never mutates anything.
//!
//! Digest computation is pure: same object state, schema and version
//! always produce the same tag, and any change to a rendered field
//! changes it.

mod controller;
mod etag;

pub use controller::{AppliedWrite, FreshResource, StaleStateError, ValidatedWrite};
pub use etag::{compute_etag, Etag, EtagParseError};
