//! The render half of the engine.

use crate::context::RepresentationContext;
use crate::schema::Schema;
use serde_json::{json, Map, Value};

/// Serializes a domain object into its JSON representation.
///
/// Member order is deterministic: `_links` first, then fields in binding
/// declaration order, then the collection (`_embedded.<key>` or the
/// link-only array). In canonical mode `_links` is suppressed at every
/// depth and link-only collections are dropped, so the resulting bytes
/// depend only on object state, schema and version.
pub fn serialize<T>(object: &T, schema: &Schema<T>, ctx: &RepresentationContext) -> Value {
    let mut out = Map::new();

    if !ctx.is_canonical() {
        if let Some(links) = render_links(object, schema, ctx) {
            out.insert("_links".to_string(), links);
        }
    }

    for binding in &schema.fields {
        if !binding.direction.readable() {
            continue;
        }
        if let Some(skip) = &binding.skip_if {
            if skip(object) {
                continue;
            }
        }
        let Some(read) = &binding.read else {
            continue;
        };
        let key = schema.rename.public_for(binding.name);
        out.insert(key.to_string(), read(object, ctx));
    }

    if let Some(collection) = &schema.collection {
        if collection.embedded {
            let items = (collection.render)(object, ctx);
            out.insert(
                "_embedded".to_string(),
                json!({ collection.json_key: items }),
            );
        } else if !ctx.is_canonical() {
            let items = (collection.render)(object, ctx);
            out.insert(collection.json_key.to_string(), Value::Array(items));
        }
    }

    Value::Object(out)
}

/// Renders just the `_links` object for an item, used by link-only
/// collections.
pub(crate) fn serialize_links_only<T>(
    object: &T,
    schema: &Schema<T>,
    ctx: &RepresentationContext,
) -> Value {
    let mut out = Map::new();
    if let Some(links) = render_links(object, schema, ctx) {
        out.insert("_links".to_string(), links);
    }
    Value::Object(out)
}

/// Resolves the schema's link specs; specs whose resolver returns `None`
/// are omitted. Returns `None` when no link resolved.
fn render_links<T>(object: &T, schema: &Schema<T>, ctx: &RepresentationContext) -> Option<Value> {
    if schema.links.is_empty() {
        return None;
    }
    let mut links = Map::new();
    for spec in &schema.links {
        if let Some(href) = (spec.resolve)(object, ctx) {
            links.insert(spec.rel.to_string(), json!({ "href": href }));
        }
    }
    if links.is_empty() {
        None
    } else {
        Some(Value::Object(links))
    }
}
