//! API version tokens.
//!
//! Every request negotiates a version through its `Accept` header using a
//! vendor media type: `application/vnd.helmsman.v3+json`. There is no
//! default version — a request that does not name one is refused upstream.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Media type prefix for version negotiation.
const MEDIA_TYPE_PREFIX: &str = "application/vnd.helmsman.";

/// Media type suffix for version negotiation.
const MEDIA_TYPE_SUFFIX: &str = "+json";

/// An API version token (`v1`, `v2`, …).
///
/// Versions are totally ordered so registries can report the supported
/// range, but resolution itself is always an exact match — `v3` never
/// falls back to `v2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiVersion(u8);

impl ApiVersion {
    pub const V1: ApiVersion = ApiVersion(1);
    pub const V2: ApiVersion = ApiVersion(2);
    pub const V3: ApiVersion = ApiVersion(3);

    /// Creates a version token from its number.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Returns the version number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Parses a version token out of an `Accept` header value.
    ///
    /// Accepts exactly one vendor media type, with optional parameters:
    /// `application/vnd.helmsman.v2+json; charset=utf-8` → `v2`.
    /// Anything else — a bare `application/json`, a missing token, a
    /// non-numeric token — is a parse error; the caller surfaces it as an
    /// unsupported-version response, never as a fallback.
    pub fn from_accept(header: &str) -> Result<Self, VersionParseError> {
        let media_type = header
            .split(';')
            .next()
            .unwrap_or_default()
            .trim();

        let Some(rest) = media_type.strip_prefix(MEDIA_TYPE_PREFIX) else {
            return Err(VersionParseError::NotVendorMediaType {
                header: header.to_string(),
            });
        };
        let Some(token) = rest.strip_suffix(MEDIA_TYPE_SUFFIX) else {
            return Err(VersionParseError::NotVendorMediaType {
                header: header.to_string(),
            });
        };

        token
            .parse()
            .map_err(|_| VersionParseError::InvalidVersionToken {
                token: token.to_string(),
            })
    }

    /// Renders the vendor media type for this version.
    #[must_use]
    pub fn media_type(self) -> String {
        format!("{MEDIA_TYPE_PREFIX}v{}{MEDIA_TYPE_SUFFIX}", self.0)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl FromStr for ApiVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .strip_prefix('v')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| *n > 0)
            .ok_or_else(|| VersionParseError::InvalidVersionToken {
                token: s.to_string(),
            })?;
        Ok(Self(number))
    }
}

/// Errors raised while extracting a version token from request headers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    /// The `Accept` header does not carry the vendor media type at all.
    #[error("not a helmsman vendor media type: {header}")]
    NotVendorMediaType { header: String },

    /// The vendor media type carries a malformed version token.
    #[error("invalid version token: {token}")]
    InvalidVersionToken { token: String },
}
