use helmsman_representer::{
    FieldBinding, Schema, UnsupportedVersionError, VersionRegistry,
};
use helmsman_types::ApiVersion;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
struct Pipeline {
    name: String,
}

#[derive(Debug, Clone, Default)]
struct Template {
    name: String,
}

fn pipeline_schema() -> Arc<Schema<Pipeline>> {
    Arc::new(
        Schema::<Pipeline>::builder()
            .field(FieldBinding::read_only("name", |p: &Pipeline, _| {
                json!(p.name)
            }))
            .build()
            .unwrap(),
    )
}

fn registry() -> VersionRegistry {
    let mut registry = VersionRegistry::new();
    registry.register::<Pipeline>(ApiVersion::V1, pipeline_schema());
    registry.register::<Pipeline>(ApiVersion::V2, pipeline_schema());
    registry
}

// ── Resolution ───────────────────────────────────────────────────

#[test]
fn resolves_registered_versions() {
    let registry = registry();
    assert!(registry.resolve::<Pipeline>(ApiVersion::V1).is_ok());
    assert!(registry.resolve::<Pipeline>(ApiVersion::V2).is_ok());
}

#[test]
fn unknown_version_is_a_hard_error_not_a_fallback() {
    let registry = registry();
    let err = registry.resolve::<Pipeline>(ApiVersion::new(99)).unwrap_err();
    match err {
        UnsupportedVersionError::UnknownVersion {
            requested,
            supported,
            ..
        } => {
            assert_eq!(requested, ApiVersion::new(99));
            assert_eq!(supported, vec![ApiVersion::V1, ApiVersion::V2]);
        }
        other => panic!("expected UnknownVersion, got {other:?}"),
    }
}

#[test]
fn unregistered_type_has_no_supported_versions() {
    let registry = registry();
    let err = registry.resolve::<Template>(ApiVersion::V1).unwrap_err();
    match err {
        UnsupportedVersionError::UnknownVersion { supported, .. } => {
            assert!(supported.is_empty());
        }
        other => panic!("expected UnknownVersion, got {other:?}"),
    }
}

#[test]
fn types_do_not_share_registrations() {
    let mut registry = registry();
    registry.register::<Template>(
        ApiVersion::V3,
        Arc::new(Schema::<Template>::builder().build().unwrap()),
    );

    assert_eq!(
        registry.supported_versions::<Pipeline>(),
        vec![ApiVersion::V1, ApiVersion::V2]
    );
    assert_eq!(registry.supported_versions::<Template>(), vec![ApiVersion::V3]);
}

// ── Accept-header resolution ─────────────────────────────────────

#[test]
fn resolve_accept_negotiates_and_resolves() {
    let registry = registry();
    let (version, schema) = registry
        .resolve_accept::<Pipeline>("application/vnd.helmsman.v2+json")
        .unwrap();
    assert_eq!(version, ApiVersion::V2);
    assert!(schema.field_names().contains(&"name"));
}

#[test]
fn resolve_accept_rejects_unparseable_headers() {
    let registry = registry();
    let err = registry
        .resolve_accept::<Pipeline>("application/xml")
        .unwrap_err();
    assert!(matches!(err, UnsupportedVersionError::Negotiation(_)));
}

#[test]
fn resolve_accept_rejects_unknown_versions() {
    let registry = registry();
    let err = registry
        .resolve_accept::<Pipeline>("application/vnd.helmsman.v9+json")
        .unwrap_err();
    assert!(matches!(err, UnsupportedVersionError::UnknownVersion { .. }));
}

#[test]
fn registry_len_counts_pairs() {
    let registry = registry();
    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
}
