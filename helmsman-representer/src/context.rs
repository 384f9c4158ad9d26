//! Per-request representation context.
//!
//! Everything a representation needs from the request travels here
//! explicitly: the base URL for link building, the negotiated API version,
//! and named optional context such as a parent resource id. There is no
//! ambient "current version" anywhere in the engine.

use helmsman_types::ApiVersion;
use uuid::Uuid;

/// How a representation is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// The response body: fields, `_links`, `_embedded`.
    Full,
    /// Content-digest input: fields and embedded collections only.
    ///
    /// Hypermedia links depend on the request's base URL, so they are
    /// excluded to keep the digest a pure function of object state,
    /// schema and version.
    Canonical,
}

/// Builds absolute hrefs from the request's base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base: String,
}

impl UrlBuilder {
    /// Creates a builder from a base URL such as `https://ci.example.com/go`.
    /// A trailing slash is dropped so joined paths never double up.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// Joins an absolute path (starting with `/`) onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Per-request value object threaded through every serialize call.
///
/// Created by the routing layer when a request arrives and discarded with
/// the response. Schemas are shared across requests; this is not.
#[derive(Debug, Clone)]
pub struct RepresentationContext {
    url_builder: UrlBuilder,
    version: ApiVersion,
    mode: RenderMode,
    request_id: Uuid,
    parent_id: Option<String>,
}

impl RepresentationContext {
    /// Creates a full-render context for a request.
    #[must_use]
    pub fn new(url_builder: UrlBuilder, version: ApiVersion) -> Self {
        Self {
            url_builder,
            version,
            mode: RenderMode::Full,
            request_id: Uuid::new_v4(),
            parent_id: None,
        }
    }

    /// Creates a canonical-render context, used for content digests.
    /// Carries no usable base URL; links are never resolved in this mode.
    #[must_use]
    pub fn canonical(version: ApiVersion) -> Self {
        Self {
            url_builder: UrlBuilder::new(""),
            version,
            mode: RenderMode::Canonical,
            request_id: Uuid::new_v4(),
            parent_id: None,
        }
    }

    /// Attaches the id of the parent resource, for link resolvers of
    /// nested resources (e.g. a package's repository id).
    #[must_use]
    pub fn with_parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// The request's base URL builder.
    #[must_use]
    pub fn url_builder(&self) -> &UrlBuilder {
        &self.url_builder
    }

    /// The negotiated API version.
    #[must_use]
    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// The active render mode.
    #[must_use]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// True when rendering canonical digest content.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.mode == RenderMode::Canonical
    }

    /// Correlation id for log lines emitted while handling this request.
    #[must_use]
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// The parent resource id, when one was attached.
    #[must_use]
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }
}
