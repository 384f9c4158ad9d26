//! Entity tags over canonical representation bytes.

use helmsman_representer::{serialize, RepresentationContext, Schema};
use helmsman_types::ApiVersion;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An opaque content-version token.
///
/// The payload is a hex SHA-256 digest of the representation's canonical
/// bytes. A tag may carry the weak qualifier (`W/"…"`); comparison
/// normalizes the qualifier away and then requires exact payload
/// equality — no partial or fuzzy matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Etag {
    payload: String,
    weak: bool,
}

impl Etag {
    /// Creates a strong tag from a digest payload.
    #[must_use]
    pub fn strong(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            weak: false,
        }
    }

    /// Creates a weak tag from a digest payload.
    #[must_use]
    pub fn weak(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            weak: true,
        }
    }

    /// The digest payload, without quotes or the weak qualifier.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// True for `W/"…"` tags.
    #[must_use]
    pub fn is_weak(&self) -> bool {
        self.weak
    }

    /// Exact payload equality after normalizing the weak qualifier.
    #[must_use]
    pub fn matches(&self, other: &Etag) -> bool {
        self.payload == other.payload
    }
}

impl fmt::Display for Etag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weak {
            write!(f, "W/\"{}\"", self.payload)
        } else {
            write!(f, "\"{}\"", self.payload)
        }
    }
}

impl FromStr for Etag {
    type Err = EtagParseError;

    /// Parses a header-shaped tag: `W/"abc"`, `"abc"` or bare `abc`
    /// (some client tooling sends the payload unquoted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (weak, rest) = match trimmed.strip_prefix("W/") {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let payload = rest
            .strip_prefix('"')
            .and_then(|r| r.strip_suffix('"'))
            .unwrap_or(rest);
        if payload.is_empty() || payload.contains('"') {
            return Err(EtagParseError::Malformed {
                header: s.to_string(),
            });
        }
        Ok(Self {
            payload: payload.to_string(),
            weak,
        })
    }
}

/// A presented entity tag that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EtagParseError {
    /// Empty or structurally invalid tag.
    #[error("malformed entity tag: {header:?}")]
    Malformed { header: String },
}

/// Computes the strong tag for an object at one schema and version.
///
/// Hashes the canonical render (fields and embedded collections, no
/// `_links`), so the result is a pure function of object state, schema
/// and version — request context never leaks into it.
#[must_use]
pub fn compute_etag<T>(object: &T, schema: &Schema<T>, version: ApiVersion) -> Etag {
    let ctx = RepresentationContext::canonical(version);
    let doc = serialize(object, schema, &ctx);
    let bytes = serde_json::to_vec(&doc).expect("JSON value rendering cannot fail");
    let digest = Sha256::digest(&bytes);
    Etag::strong(hex::encode(digest))
}
