//! Field bindings.
//!
//! A binding ties one public JSON member to accessor functions over the
//! domain type. Accessors are plain boxed closures resolved when the schema
//! is built — there is no runtime method lookup.

use crate::context::RepresentationContext;
use helmsman_types::ValidationErrorMap;
use serde_json::Value;
use std::fmt;

/// Reads a field off the domain object as a JSON value.
/// `Value::Null` renders as an explicit `null` member.
pub type ReadFn<T> = Box<dyn Fn(&T, &RepresentationContext) -> Value + Send + Sync>;

/// Writes a JSON value into the domain object.
pub type WriteFn<T> = Box<dyn Fn(&mut T, &Value) -> Result<(), WriteError> + Send + Sync>;

/// Decides whether a field is omitted from the rendered document.
pub type SkipFn<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Which way a field travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Rendered on read only (computed fields, immutable fields).
    Read,
    /// Accepted on write only.
    Write,
    /// Rendered and accepted.
    Both,
}

impl Direction {
    /// True when the field appears in rendered documents.
    #[must_use]
    pub fn readable(self) -> bool {
        matches!(self, Direction::Read | Direction::Both)
    }

    /// True when the field is merged from submitted documents.
    #[must_use]
    pub fn writable(self) -> bool {
        matches!(self, Direction::Write | Direction::Both)
    }
}

/// A failed write of a single field.
#[derive(Debug)]
pub enum WriteError {
    /// One message attributed to the field itself (wrong scalar type,
    /// not-an-object, and similar structural problems).
    Message(String),
    /// Errors produced while merging a nested object; the engine prefixes
    /// them with this field's name so they stay attributable.
    Nested(ValidationErrorMap),
}

impl From<String> for WriteError {
    fn from(message: String) -> Self {
        WriteError::Message(message)
    }
}

impl From<&str> for WriteError {
    fn from(message: &str) -> Self {
        WriteError::Message(message.to_string())
    }
}

/// One field of a schema: domain name, direction and accessors.
///
/// The `name` is the *domain* identifier (the one the business-rule
/// validator reports errors under, e.g. `encryptedValue`); the public JSON
/// key is derived through the schema's rename table.
pub struct FieldBinding<T> {
    pub(crate) name: &'static str,
    pub(crate) direction: Direction,
    pub(crate) required_on_write: bool,
    pub(crate) read: Option<ReadFn<T>>,
    pub(crate) write: Option<WriteFn<T>>,
    pub(crate) skip_if: Option<SkipFn<T>>,
}

impl<T> FieldBinding<T> {
    /// A field that is both rendered and merged.
    #[must_use]
    pub fn new(
        name: &'static str,
        read: impl Fn(&T, &RepresentationContext) -> Value + Send + Sync + 'static,
        write: impl Fn(&mut T, &Value) -> Result<(), WriteError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            direction: Direction::Both,
            required_on_write: false,
            read: Some(Box::new(read)),
            write: Some(Box::new(write)),
            skip_if: None,
        }
    }

    /// A rendered-only field. Computed fields deriving from several domain
    /// attributes are read-only bindings like any other.
    #[must_use]
    pub fn read_only(
        name: &'static str,
        read: impl Fn(&T, &RepresentationContext) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            direction: Direction::Read,
            required_on_write: false,
            read: Some(Box::new(read)),
            write: None,
            skip_if: None,
        }
    }

    /// A write-only field (accepted from clients, never rendered back).
    #[must_use]
    pub fn write_only(
        name: &'static str,
        write: impl Fn(&mut T, &Value) -> Result<(), WriteError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            direction: Direction::Write,
            required_on_write: false,
            read: None,
            write: Some(Box::new(write)),
            skip_if: None,
        }
    }

    /// Marks the field required on write: a submitted document that omits
    /// it produces a validation error instead of leaving the field alone.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required_on_write = true;
        self
    }

    /// Omits the field from rendered documents when the predicate holds
    /// (skip-if-blank, skip-if-secure, …).
    #[must_use]
    pub fn skip_if(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.skip_if = Some(Box::new(predicate));
        self
    }

    /// The domain field identifier.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Which way this field travels.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// True when absence on write is a validation error.
    #[must_use]
    pub fn is_required_on_write(&self) -> bool {
        self.required_on_write
    }
}

impl<T> fmt::Debug for FieldBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("direction", &self.direction)
            .field("required_on_write", &self.required_on_write)
            .finish_non_exhaustive()
    }
}
