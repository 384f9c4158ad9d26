//! Plugin-profile schemas.

use crate::{ConfigurationProperty, PluginProfile};
use helmsman_representer::{
    as_string, FieldBinding, Schema, SchemaBuilder, SchemaCompositionError,
};
use serde_json::json;
use std::sync::Arc;

/// Find-URL template. The `:profile_id` token is rendered literally;
/// clients substitute it themselves by plain string replacement.
pub const FIND_PATH: &str = "/api/admin/plugin_profiles/:profile_id";

const SELF_PATH: &str = "/api/admin/plugin_profiles";
const DOC_V1: &str = "https://api.helmsman.dev/v1/#plugin-profiles";
const DOC_V2: &str = "https://api.helmsman.dev/v2/#plugin-profiles";

fn base(properties: &Arc<Schema<ConfigurationProperty>>) -> SchemaBuilder<PluginProfile> {
    Schema::<PluginProfile>::builder()
        .link("self", |profile: &PluginProfile, ctx| {
            (!profile.id.is_empty())
                .then(|| ctx.url_builder().url(&format!("{SELF_PATH}/{}", profile.id)))
        })
        .link("find", |_, ctx| Some(ctx.url_builder().url(FIND_PATH)))
        .field(FieldBinding::new(
            "id",
            |profile: &PluginProfile, _| json!(profile.id),
            |profile, value| {
                profile.id = as_string(value)?;
                Ok(())
            },
        ))
        .field(FieldBinding::new(
            "pluginId",
            |profile: &PluginProfile, _| json!(profile.plugin_id),
            |profile, value| {
                profile.plugin_id = as_string(value)?;
                Ok(())
            },
        ))
        .nested_list(
            "properties",
            properties,
            |profile: &PluginProfile| &profile.properties,
            |profile, properties| profile.properties = properties,
        )
        .rename("pluginId", "plugin_id")
}

/// The v1 profile schema.
pub fn v1() -> Result<Arc<Schema<PluginProfile>>, SchemaCompositionError> {
    let properties = super::property::schema()?;
    let schema = base(&properties)
        .link("doc", |_, _| Some(DOC_V1.to_string()))
        .build()?;
    Ok(Arc::new(schema))
}

/// The v2 profile schema: ids are frozen after creation, so `id` becomes
/// read-only and a submitted id is ignored.
pub fn v2() -> Result<Arc<Schema<PluginProfile>>, SchemaCompositionError> {
    let properties = super::property::schema()?;
    let schema = base(&properties)
        .remove_field("id")
        .field(FieldBinding::read_only("id", |profile: &PluginProfile, _| {
            json!(profile.id)
        }))
        .link("doc", |_, _| Some(DOC_V2.to_string()))
        .build()?;
    Ok(Arc::new(schema))
}
