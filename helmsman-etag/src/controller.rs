//! The optimistic-write controller.
//!
//! One resource, one request, four states:
//!
//! 1. [`FreshResource::begin`] — the current state has just been rendered
//!    and its tag computed.
//! 2. [`FreshResource::validate`] — the client's presented tag is compared
//!    byte-for-byte against the recomputed current tag.
//! 3. [`ValidatedWrite::apply`] — tags matched: the document merges into a
//!    working copy, and a new tag is computed from the post-write state.
//! 4. Rejection — tags differed, or none was presented: the write is
//!    refused with [`StaleStateError`] and the domain object is untouched.
//!
//! Mutual exclusion between writers of the same resource belongs to the
//! configuration store; this controller only computes correct tags and
//! refuses to proceed on mismatch.

use crate::etag::{compute_etag, Etag};
use helmsman_representer::{deserialize, Schema};
use helmsman_types::{ApiVersion, ValidationErrorMap};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// A write refused before any mutation happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StaleStateError {
    /// The update did not present a tag where one is required.
    #[error("an If-Match entity tag is required for this update")]
    MissingPrecondition,

    /// The presented tag no longer matches the resource.
    #[error("the resource has changed since it was fetched; current entity tag: {current}")]
    Stale { current: Etag },
}

/// A resource whose current state has just been rendered and tagged.
#[derive(Debug)]
pub struct FreshResource<'a, T> {
    object: &'a T,
    schema: &'a Schema<T>,
    version: ApiVersion,
    etag: Etag,
}

impl<'a, T> FreshResource<'a, T> {
    /// Computes the current tag of the pre-write object.
    #[must_use]
    pub fn begin(object: &'a T, schema: &'a Schema<T>, version: ApiVersion) -> Self {
        let etag = compute_etag(object, schema, version);
        Self {
            object,
            schema,
            version,
            etag,
        }
    }

    /// The current tag, as returned in the `ETag` response header.
    #[must_use]
    pub fn etag(&self) -> &Etag {
        &self.etag
    }

    /// Compares a presented tag against the current one.
    ///
    /// No tag where one is required, or any payload difference, rejects
    /// the write before anything is merged.
    pub fn validate(
        self,
        presented: Option<&Etag>,
    ) -> Result<ValidatedWrite<'a, T>, StaleStateError> {
        let Some(presented) = presented else {
            debug!(type_name = self.schema.type_name(), "update presented no entity tag");
            return Err(StaleStateError::MissingPrecondition);
        };
        if !presented.matches(&self.etag) {
            debug!(
                type_name = self.schema.type_name(),
                presented = %presented,
                current = %self.etag,
                "stale update rejected"
            );
            return Err(StaleStateError::Stale { current: self.etag });
        }
        Ok(ValidatedWrite {
            object: self.object,
            schema: self.schema,
            version: self.version,
        })
    }

    /// Like [`validate`](Self::validate), taking the raw `If-Match`
    /// header value. A malformed header can never match and is treated
    /// as stale.
    pub fn validate_header(
        self,
        if_match: Option<&str>,
    ) -> Result<ValidatedWrite<'a, T>, StaleStateError> {
        match if_match {
            None => self.validate(None),
            Some(raw) => match raw.parse::<Etag>() {
                Ok(tag) => self.validate(Some(&tag)),
                Err(_) => Err(StaleStateError::Stale { current: self.etag }),
            },
        }
    }
}

/// A write whose precondition held; ready to merge.
#[derive(Debug)]
pub struct ValidatedWrite<'a, T> {
    object: &'a T,
    schema: &'a Schema<T>,
    version: ApiVersion,
}

impl<T: Clone> ValidatedWrite<'_, T> {
    /// Merges the submitted document into a working copy of the object.
    ///
    /// On validation errors the original object is untouched and the
    /// error map is handed back for translation. On success the merged
    /// copy and its freshly computed tag are returned; committing the
    /// copy to the store is the caller's business.
    pub fn apply(self, doc: &Value) -> Result<AppliedWrite<T>, ValidationErrorMap> {
        let mut working = self.object.clone();
        deserialize(doc, self.schema, &mut working)?;
        let etag = compute_etag(&working, self.schema, self.version);
        debug!(
            type_name = self.schema.type_name(),
            new_etag = %etag,
            "optimistic write applied"
        );
        Ok(AppliedWrite {
            object: working,
            etag,
        })
    }
}

/// The post-write state and its new tag.
#[derive(Debug)]
pub struct AppliedWrite<T> {
    object: T,
    etag: Etag,
}

impl<T> AppliedWrite<T> {
    /// The merged object, ready to hand to the configuration store.
    #[must_use]
    pub fn object(&self) -> &T {
        &self.object
    }

    /// The tag of the post-write state.
    #[must_use]
    pub fn etag(&self) -> &Etag {
        &self.etag
    }

    /// Consumes into `(object, etag)`.
    #[must_use]
    pub fn into_parts(self) -> (T, Etag) {
        (self.object, self.etag)
    }
}
