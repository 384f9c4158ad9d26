//! Validation error maps.
//!
//! The business-rule validator (an external collaborator) produces a map of
//! domain field identifiers to human-readable messages. This crate only
//! carries that map; renaming to public field names happens in the
//! representer's error translator.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// An insertion-ordered multimap of `domain field → messages`.
///
/// Order matters twice: fields appear in the order they were first reported,
/// and messages per field keep their reported order. Serializes to
/// `{"field": ["msg1", "msg2"], …}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrorMap {
    entries: Vec<(String, Vec<String>)>,
}

impl ValidationErrorMap {
    /// Creates an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message for a field, creating the field entry on first use.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field, vec![message])),
        }
    }

    /// Appends all entries of `other`, preserving its field and message order.
    pub fn merge(&mut self, other: ValidationErrorMap) {
        for (field, messages) in other.entries {
            for message in messages {
                self.add(field.clone(), message);
            }
        }
    }

    /// Like [`merge`](Self::merge), but keys every incoming field as
    /// `prefix.field` so nested errors stay attributable. Incoming fields
    /// that start with an index segment (`[2].value`) join without the
    /// dot: `prefix[2].value`.
    pub fn merge_prefixed(&mut self, prefix: &str, other: ValidationErrorMap) {
        for (field, messages) in other.entries {
            let key = if field.starts_with('[') {
                format!("{prefix}{field}")
            } else {
                format!("{prefix}.{field}")
            };
            for message in messages {
                self.add(key.clone(), message);
            }
        }
    }

    /// Messages reported for a field, if any.
    #[must_use]
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_slice())
    }

    /// True when no field has any message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with at least one message.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(f, m)| (f.as_str(), m.as_slice()))
    }
}

impl Serialize for ValidationErrorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

impl<F: Into<String>, M: Into<String>> FromIterator<(F, M)> for ValidationErrorMap {
    fn from_iter<I: IntoIterator<Item = (F, M)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (field, message) in iter {
            map.add(field, message);
        }
        map
    }
}
