//! Schema descriptors and their builder.
//!
//! A [`Schema`] declares which fields, links and nested objects one domain
//! type exposes at one API version. Schemas are built once at startup,
//! validated for composition problems (cycles, duplicates) at build time,
//! and shared read-only across concurrent requests via `Arc`.

use crate::binding::{FieldBinding, WriteError};
use crate::context::RepresentationContext;
use crate::error::SchemaCompositionError;
use crate::links::LinkSpec;
use crate::deserialize::deserialize;
use crate::rename::FieldRenameTable;
use crate::serialize::{serialize, serialize_links_only};
use helmsman_types::ValidationErrorMap;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// A one-to-many binding rendered as `_embedded.<key>` (full child
/// representations) or as `<key>` holding element links only.
pub(crate) struct CollectionBinding<T> {
    pub(crate) json_key: &'static str,
    pub(crate) embedded: bool,
    pub(crate) render: Box<dyn Fn(&T, &RepresentationContext) -> Vec<Value> + Send + Sync>,
}

/// Immutable description of one domain type's representation at one
/// API version.
pub struct Schema<T> {
    pub(crate) type_name: &'static str,
    pub(crate) fields: Vec<FieldBinding<T>>,
    pub(crate) links: Vec<LinkSpec<T>>,
    pub(crate) collection: Option<CollectionBinding<T>>,
    pub(crate) rename: FieldRenameTable,
    pub(crate) reachable: BTreeSet<&'static str>,
}

impl<T> Schema<T> {
    /// Starts building a schema for `T`.
    #[must_use]
    pub fn builder() -> SchemaBuilder<T> {
        SchemaBuilder::new()
    }

    /// The domain type this schema describes.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The schema's domain-to-public rename table.
    #[must_use]
    pub fn rename_table(&self) -> &FieldRenameTable {
        &self.rename
    }

    /// Domain names of all field bindings, in declaration order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }
}

// Closures make a derived Debug impossible; print the declarative parts.
impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .field("links", &self.links)
            .field("rename", &self.rename)
            .finish_non_exhaustive()
    }
}

/// Fluent builder for [`Schema`].
///
/// Later API versions layer over earlier ones by sharing a base builder
/// function and applying small diffs ([`remove_field`](Self::remove_field),
/// re-adding a binding) before [`build`](Self::build). The layering happens
/// once at startup; nothing is re-evaluated per request.
pub struct SchemaBuilder<T> {
    type_name: &'static str,
    fields: Vec<FieldBinding<T>>,
    links: Vec<LinkSpec<T>>,
    collection: Option<CollectionBinding<T>>,
    rename: FieldRenameTable,
    reachable: BTreeSet<&'static str>,
    pending_error: Option<SchemaCompositionError>,
}

impl<T> SchemaBuilder<T> {
    /// Creates an empty builder for `T`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            fields: Vec::new(),
            links: Vec::new(),
            collection: None,
            rename: FieldRenameTable::new(),
            reachable: BTreeSet::new(),
            pending_error: None,
        }
    }

    /// Adds a field binding.
    #[must_use]
    pub fn field(mut self, binding: FieldBinding<T>) -> Self {
        self.fields.push(binding);
        self
    }

    /// Removes a previously added binding, for version layering.
    /// Removing an unknown name is a no-op.
    #[must_use]
    pub fn remove_field(mut self, name: &'static str) -> Self {
        self.fields.retain(|f| f.name != name);
        self
    }

    /// Adds a `domain → public` field rename, applied to rendered keys,
    /// submitted keys and translated error maps alike.
    #[must_use]
    pub fn rename(mut self, domain: &'static str, public: &'static str) -> Self {
        self.rename.insert(domain, public);
        self
    }

    /// Adds a hypermedia link.
    #[must_use]
    pub fn link(
        mut self,
        rel: &'static str,
        resolve: impl Fn(&T, &RepresentationContext) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.links.push(LinkSpec::new(rel, resolve));
        self
    }

    /// Adds a pre-built link spec.
    #[must_use]
    pub fn link_spec(mut self, spec: LinkSpec<T>) -> Self {
        self.links.push(spec);
        self
    }

    /// Embeds another type's schema as a one-to-one nested object field.
    ///
    /// Rendering delegates to the child schema (`None` renders as `null`);
    /// merging recurses into the existing child, creating it through
    /// `get_mut` when absent. Child field errors come back prefixed with
    /// this field's name.
    #[must_use]
    pub fn nested<C: 'static>(
        mut self,
        name: &'static str,
        child: &Arc<Schema<C>>,
        get: impl Fn(&T) -> Option<&C> + Send + Sync + 'static,
        get_mut: impl Fn(&mut T) -> &mut C + Send + Sync + 'static,
    ) -> Self {
        self.absorb_child_types(child);

        let read_schema = Arc::clone(child);
        let write_schema = Arc::clone(child);
        self.fields.push(FieldBinding::new(
            name,
            move |object, ctx| match get(object) {
                Some(nested) => serialize(nested, &read_schema, ctx),
                None => Value::Null,
            },
            move |object, value| {
                if !value.is_object() {
                    return Err("must be an object".into());
                }
                deserialize(value, &write_schema, get_mut(object))
                    .map_err(WriteError::Nested)
            },
        ));
        self
    }

    /// Embeds another type's schema as a writable list-of-objects field
    /// (a plain JSON array member, not `_embedded`).
    ///
    /// On write the submitted array replaces the whole collection; items
    /// that fail to merge report under `name[index].field`, and the
    /// collection is left untouched when any item fails.
    #[must_use]
    pub fn nested_list<C: Default + 'static>(
        mut self,
        name: &'static str,
        child: &Arc<Schema<C>>,
        get: impl Fn(&T) -> &[C] + Send + Sync + 'static,
        set: impl Fn(&mut T, Vec<C>) + Send + Sync + 'static,
    ) -> Self {
        self.absorb_child_types(child);

        let read_schema = Arc::clone(child);
        let write_schema = Arc::clone(child);
        self.fields.push(FieldBinding::new(
            name,
            move |object, ctx| {
                Value::Array(
                    get(object)
                        .iter()
                        .map(|item| serialize(item, &read_schema, ctx))
                        .collect(),
                )
            },
            move |object, value| {
                let Some(items) = value.as_array() else {
                    return Err("must be an array".into());
                };
                let mut errors = ValidationErrorMap::new();
                let mut parsed = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    if !item.is_object() {
                        errors.add(format!("[{index}]"), "must be an object");
                        continue;
                    }
                    let mut target = C::default();
                    match deserialize(item, &write_schema, &mut target) {
                        Ok(()) => parsed.push(target),
                        Err(item_errors) => {
                            for (field, messages) in item_errors.iter() {
                                for message in messages {
                                    errors.add(format!("[{index}].{field}"), message);
                                }
                            }
                        }
                    }
                }
                if errors.is_empty() {
                    set(object, parsed);
                    Ok(())
                } else {
                    Err(WriteError::Nested(errors))
                }
            },
        ));
        self
    }

    /// Attaches a read-only embedded collection: `_embedded.<key>` holds
    /// the fully-serialized children, preserving source order.
    #[must_use]
    pub fn embedded_collection<C: 'static>(
        mut self,
        json_key: &'static str,
        child: &Arc<Schema<C>>,
        get: impl Fn(&T) -> &[C] + Send + Sync + 'static,
    ) -> Self {
        self.absorb_child_types(child);
        let schema = Arc::clone(child);
        self.set_collection(CollectionBinding {
            json_key,
            embedded: true,
            render: Box::new(move |object, ctx| {
                get(object)
                    .iter()
                    .map(|item| serialize(item, &schema, ctx))
                    .collect()
            }),
        });
        self
    }

    /// Attaches a link-only collection: `<key>` holds one `{"_links": …}`
    /// object per child instead of full representations.
    #[must_use]
    pub fn linked_collection<C: 'static>(
        mut self,
        json_key: &'static str,
        child: &Arc<Schema<C>>,
        get: impl Fn(&T) -> &[C] + Send + Sync + 'static,
    ) -> Self {
        self.absorb_child_types(child);
        let schema = Arc::clone(child);
        self.set_collection(CollectionBinding {
            json_key,
            embedded: false,
            render: Box::new(move |object, ctx| {
                get(object)
                    .iter()
                    .map(|item| serialize_links_only(item, &schema, ctx))
                    .collect()
            }),
        });
        self
    }

    /// Validates composition and freezes the schema.
    pub fn build(self) -> Result<Schema<T>, SchemaCompositionError> {
        if let Some(error) = self.pending_error {
            return Err(error);
        }
        if self.reachable.contains(self.type_name) {
            return Err(SchemaCompositionError::CyclicComposition {
                type_name: self.type_name,
            });
        }
        let mut seen_fields = BTreeSet::new();
        for field in &self.fields {
            if !seen_fields.insert(field.name) {
                return Err(SchemaCompositionError::DuplicateField { name: field.name });
            }
        }
        let mut seen_rels = BTreeSet::new();
        for link in &self.links {
            if !seen_rels.insert(link.rel) {
                return Err(SchemaCompositionError::DuplicateLink { rel: link.rel });
            }
        }
        Ok(Schema {
            type_name: self.type_name,
            fields: self.fields,
            links: self.links,
            collection: self.collection,
            rename: self.rename,
            reachable: self.reachable,
        })
    }

    fn set_collection(&mut self, binding: CollectionBinding<T>) {
        if self.collection.is_some() && self.pending_error.is_none() {
            self.pending_error = Some(SchemaCompositionError::MultipleCollections {
                json_key: binding.json_key,
            });
        }
        self.collection = Some(binding);
    }

    // Child renames are absorbed so nested error keys like
    // `properties[0].encryptedValue` translate at the parent too.
    fn absorb_child_types<C>(&mut self, child: &Arc<Schema<C>>) {
        self.reachable.insert(child.type_name);
        self.reachable.extend(child.reachable.iter().copied());
        self.rename.absorb(&child.rename);
    }
}

impl<T> Default for SchemaBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SchemaBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaBuilder")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .field("links", &self.links)
            .finish_non_exhaustive()
    }
}
