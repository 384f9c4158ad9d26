//! Package-repository and package-definition schemas.

use crate::{ConfigurationProperty, PackageDefinition, PackageRepository, PluginMetadata};
use helmsman_representer::{
    as_bool, as_string, FieldBinding, Schema, SchemaBuilder, SchemaCompositionError,
};
use serde_json::json;
use std::sync::Arc;

/// Find-URL template; `:repo_id` is rendered literally for client-side
/// substitution.
pub const FIND_PATH: &str = "/api/admin/repositories/:repo_id";

const SELF_PATH: &str = "/api/admin/repositories";
const PACKAGE_SELF_PATH: &str = "/api/admin/packages";
const DOC_V1: &str = "https://api.helmsman.dev/v1/#package-repositories";
const DOC_V2: &str = "https://api.helmsman.dev/v2/#package-repositories";

/// Plugin metadata is written by id only; the resolved plugin version is
/// server-derived and read-only.
fn metadata_schema() -> Result<Arc<Schema<PluginMetadata>>, SchemaCompositionError> {
    let schema = Schema::<PluginMetadata>::builder()
        .field(FieldBinding::new(
            "id",
            |metadata: &PluginMetadata, _| json!(metadata.id),
            |metadata, value| {
                metadata.id = as_string(value)?;
                Ok(())
            },
        ))
        .field(FieldBinding::read_only(
            "version",
            |metadata: &PluginMetadata, _| json!(metadata.version),
        ))
        .build()?;
    Ok(Arc::new(schema))
}

fn package_base(
    configuration: &Arc<Schema<ConfigurationProperty>>,
) -> SchemaBuilder<PackageDefinition> {
    Schema::<PackageDefinition>::builder()
        .link("self", |package: &PackageDefinition, ctx| {
            (!package.id.is_empty())
                .then(|| ctx.url_builder().url(&format!("{PACKAGE_SELF_PATH}/{}", package.id)))
        })
        .field(FieldBinding::new(
            "id",
            |package: &PackageDefinition, _| json!(package.id),
            |package, value| {
                package.id = as_string(value)?;
                Ok(())
            },
        ))
        .field(FieldBinding::new(
            "name",
            |package: &PackageDefinition, _| json!(package.name),
            |package, value| {
                package.name = as_string(value)?;
                Ok(())
            },
        ))
        .nested_list(
            "configuration",
            configuration,
            |package: &PackageDefinition| &package.configuration,
            |package, configuration| package.configuration = configuration,
        )
}

fn package_v1(
    configuration: &Arc<Schema<ConfigurationProperty>>,
) -> Result<Arc<Schema<PackageDefinition>>, SchemaCompositionError> {
    Ok(Arc::new(package_base(configuration).build()?))
}

/// v2 additionally exposes polling control on packages.
fn package_v2(
    configuration: &Arc<Schema<ConfigurationProperty>>,
) -> Result<Arc<Schema<PackageDefinition>>, SchemaCompositionError> {
    let schema = package_base(configuration)
        .field(FieldBinding::new(
            "autoUpdate",
            |package: &PackageDefinition, _| json!(package.auto_update),
            |package, value| {
                package.auto_update = as_bool(value)?;
                Ok(())
            },
        ))
        .rename("autoUpdate", "auto_update")
        .build()?;
    Ok(Arc::new(schema))
}

fn repo_base(
    metadata: &Arc<Schema<PluginMetadata>>,
    configuration: &Arc<Schema<ConfigurationProperty>>,
    packages: &Arc<Schema<PackageDefinition>>,
) -> SchemaBuilder<PackageRepository> {
    Schema::<PackageRepository>::builder()
        .link("self", |repo: &PackageRepository, ctx| {
            (!repo.repo_id.is_empty())
                .then(|| ctx.url_builder().url(&format!("{SELF_PATH}/{}", repo.repo_id)))
        })
        .link("find", |_, ctx| Some(ctx.url_builder().url(FIND_PATH)))
        .field(FieldBinding::new(
            "repoId",
            |repo: &PackageRepository, _| json!(repo.repo_id),
            |repo, value| {
                repo.repo_id = as_string(value)?;
                Ok(())
            },
        ))
        .field(FieldBinding::new(
            "name",
            |repo: &PackageRepository, _| json!(repo.name),
            |repo, value| {
                repo.name = as_string(value)?;
                Ok(())
            },
        ))
        .nested(
            "pluginMetadata",
            metadata,
            |repo: &PackageRepository| Some(&repo.plugin_metadata),
            |repo| &mut repo.plugin_metadata,
        )
        .nested_list(
            "configuration",
            configuration,
            |repo: &PackageRepository| &repo.configuration,
            |repo, configuration| repo.configuration = configuration,
        )
        .embedded_collection("packages", packages, |repo: &PackageRepository| {
            &repo.packages
        })
        .rename("repoId", "repo_id")
        .rename("pluginMetadata", "plugin_metadata")
}

/// The v1 repository schema.
pub fn v1() -> Result<Arc<Schema<PackageRepository>>, SchemaCompositionError> {
    let configuration = super::property::schema()?;
    let metadata = metadata_schema()?;
    let packages = package_v1(&configuration)?;
    let schema = repo_base(&metadata, &configuration, &packages)
        .link("doc", |_, _| Some(DOC_V1.to_string()))
        .build()?;
    Ok(Arc::new(schema))
}

/// The v2 repository schema; embedded packages use the v2 package schema.
pub fn v2() -> Result<Arc<Schema<PackageRepository>>, SchemaCompositionError> {
    let configuration = super::property::schema()?;
    let metadata = metadata_schema()?;
    let packages = package_v2(&configuration)?;
    let schema = repo_base(&metadata, &configuration, &packages)
        .link("doc", |_, _| Some(DOC_V2.to_string()))
        .build()?;
    Ok(Arc::new(schema))
}
