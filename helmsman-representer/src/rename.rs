//! Domain-to-public field renaming.
//!
//! Domain objects and the business-rule validator speak in domain
//! identifiers (`encryptedValue`); the API speaks snake_case
//! (`encrypted_value`). One table per schema carries both directions so
//! that submitted documents and reshaped error maps travel the same
//! naming convention.

/// Per-schema mapping from domain field identifier to public API name.
/// Fields absent from the table keep their domain name (identity mapping).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRenameTable {
    entries: Vec<(&'static str, &'static str)>,
}

impl FieldRenameTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `domain → public` rename.
    pub fn insert(&mut self, domain: &'static str, public: &'static str) {
        self.entries.push((domain, public));
    }

    /// Public name for a domain field; the field itself if unmapped.
    #[must_use]
    pub fn public_for<'a>(&self, domain: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(d, _)| *d == domain)
            .map(|(_, p)| *p)
            .unwrap_or(domain)
    }

    /// Domain name for a public field; the field itself if unmapped.
    #[must_use]
    pub fn domain_for<'a>(&self, public: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(_, p)| *p == public)
            .map(|(d, _)| *d)
            .unwrap_or(public)
    }

    /// Copies another table's entries, keeping existing mappings for
    /// domain names present in both.
    pub fn absorb(&mut self, other: &FieldRenameTable) {
        for (domain, public) in &other.entries {
            if !self.entries.iter().any(|(d, _)| d == domain) {
                self.entries.push((domain, public));
            }
        }
    }

    /// Public name for a possibly-nested error key.
    ///
    /// Error maps key nested fields as `parent.child` and collection items
    /// as `list[2].field`; each dot-separated segment is renamed
    /// independently, with any `[index]` suffix carried over unchanged.
    #[must_use]
    pub fn public_for_path(&self, path: &str) -> String {
        path.split('.')
            .map(|segment| match segment.find('[') {
                Some(bracket) => {
                    let (name, index) = segment.split_at(bracket);
                    format!("{}{}", self.public_for(name), index)
                }
                None => self.public_for(segment).to_string(),
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}
