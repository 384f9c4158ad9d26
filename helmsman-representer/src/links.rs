//! Hypermedia link specs and templates.

use crate::context::RepresentationContext;
use std::fmt;

/// Resolves a link's href for one object, or `None` to omit the link
/// (e.g. no `self` link for an object without a persisted id).
pub type LinkResolver<T> =
    Box<dyn Fn(&T, &RepresentationContext) -> Option<String> + Send + Sync>;

/// A named link attached to a schema.
pub struct LinkSpec<T> {
    pub(crate) rel: &'static str,
    pub(crate) resolve: LinkResolver<T>,
}

impl<T> LinkSpec<T> {
    /// Creates a link spec. The resolver is a pure function of the
    /// object's identity and the request context.
    #[must_use]
    pub fn new(
        rel: &'static str,
        resolve: impl Fn(&T, &RepresentationContext) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            rel,
            resolve: Box::new(resolve),
        }
    }

    /// The link relation name.
    #[must_use]
    pub fn rel(&self) -> &'static str {
        self.rel
    }
}

impl<T> fmt::Debug for LinkSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkSpec").field("rel", &self.rel).finish_non_exhaustive()
    }
}

/// A `find`-style URL template carrying a literal placeholder token,
/// e.g. `/api/admin/plugin_profiles/:profile_id`.
///
/// Rendered hrefs carry the token as-is; [`fill`](Self::fill) substitutes by
/// plain string replacement with no percent-encoding. Existing client
/// tooling does the same simple replacement, so switching to RFC 6570
/// templating or encoding the value would be an observable break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplate {
    template: String,
}

impl LinkTemplate {
    /// Creates a template from a path or URL containing a placeholder token.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// The raw template string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Substitutes every occurrence of `token` with `value`, literally.
    #[must_use]
    pub fn fill(&self, token: &str, value: &str) -> String {
        self.template.replace(token, value)
    }
}

impl fmt::Display for LinkTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}
