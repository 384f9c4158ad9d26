use helmsman_etag::{compute_etag, Etag, FreshResource, StaleStateError};
use helmsman_representer::{as_string, FieldBinding, Schema};
use helmsman_types::ApiVersion;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
struct Environment {
    name: String,
    pipelines: Vec<String>,
}

fn environment_schema() -> Arc<Schema<Environment>> {
    Arc::new(
        Schema::<Environment>::builder()
            .field(
                FieldBinding::new(
                    "name",
                    |env: &Environment, _| json!(env.name),
                    |env, value| {
                        let name = as_string(value)?;
                        if name.is_empty() {
                            return Err("cannot be blank".into());
                        }
                        env.name = name;
                        Ok(())
                    },
                )
                .required(),
            )
            .field(FieldBinding::new(
                "pipelines",
                |env: &Environment, _| json!(env.pipelines),
                |env, value| {
                    let names = value
                        .as_array()
                        .ok_or("must be an array of strings")?
                        .iter()
                        .map(|v| v.as_str().map(str::to_string))
                        .collect::<Option<Vec<_>>>()
                        .ok_or("must be an array of strings")?;
                    env.pipelines = names;
                    Ok(())
                },
            ))
            .build()
            .unwrap(),
    )
}

fn environment() -> Environment {
    Environment {
        name: "uat".to_string(),
        pipelines: vec!["build".to_string()],
    }
}

// ── Precondition checks ──────────────────────────────────────────

#[test]
fn missing_tag_rejects_before_any_merge() {
    let env = environment();
    let schema = environment_schema();
    let fresh = FreshResource::begin(&env, &schema, ApiVersion::V1);
    assert_eq!(
        fresh.validate(None).unwrap_err(),
        StaleStateError::MissingPrecondition
    );
}

#[test]
fn mismatched_tag_reports_the_current_one() {
    let env = environment();
    let schema = environment_schema();
    let fresh = FreshResource::begin(&env, &schema, ApiVersion::V1);
    let current = fresh.etag().clone();

    let err = fresh.validate(Some(&Etag::strong("deadbeef"))).unwrap_err();
    assert_eq!(err, StaleStateError::Stale { current });
}

#[test]
fn malformed_if_match_header_is_treated_as_stale() {
    let env = environment();
    let schema = environment_schema();
    let fresh = FreshResource::begin(&env, &schema, ApiVersion::V1);
    let current = fresh.etag().clone();

    let err = fresh.validate_header(Some("\"\"")).unwrap_err();
    assert_eq!(err, StaleStateError::Stale { current });
}

#[test]
fn weak_presented_tag_matches_the_strong_current_one() {
    let env = environment();
    let schema = environment_schema();
    let fresh = FreshResource::begin(&env, &schema, ApiVersion::V1);
    let weak = Etag::weak(fresh.etag().payload());
    assert!(fresh.validate(Some(&weak)).is_ok());
}

#[test]
fn validate_header_accepts_the_rendered_header_form() {
    let env = environment();
    let schema = environment_schema();
    let header = FreshResource::begin(&env, &schema, ApiVersion::V1)
        .etag()
        .to_string();

    let fresh = FreshResource::begin(&env, &schema, ApiVersion::V1);
    assert!(fresh.validate_header(Some(&header)).is_ok());
}

// ── Applying the write ───────────────────────────────────────────

#[test]
fn matching_tag_merges_and_recomputes() {
    let env = environment();
    let schema = environment_schema();
    let fresh = FreshResource::begin(&env, &schema, ApiVersion::V1);
    let old_etag = fresh.etag().clone();

    let applied = fresh
        .validate(Some(&old_etag))
        .unwrap()
        .apply(&json!({"pipelines": ["build", "deploy"]}))
        .unwrap();

    assert_eq!(applied.object().name, "uat");
    assert_eq!(applied.object().pipelines, vec!["build", "deploy"]);
    assert_ne!(applied.etag(), &old_etag);
    // input object is a pre-write snapshot and stays as it was
    assert_eq!(env, environment());
}

#[test]
fn new_tag_is_the_tag_of_the_post_write_state() {
    let env = environment();
    let schema = environment_schema();
    let fresh = FreshResource::begin(&env, &schema, ApiVersion::V1);
    let old_etag = fresh.etag().clone();

    let (merged, new_etag) = fresh
        .validate(Some(&old_etag))
        .unwrap()
        .apply(&json!({"name": "staging"}))
        .unwrap()
        .into_parts();

    assert_eq!(new_etag, compute_etag(&merged, &schema, ApiVersion::V1));
}

#[test]
fn validation_failure_surfaces_the_error_map() {
    let env = environment();
    let schema = environment_schema();
    let fresh = FreshResource::begin(&env, &schema, ApiVersion::V1);
    let etag = fresh.etag().clone();

    let errors = fresh
        .validate(Some(&etag))
        .unwrap()
        .apply(&json!({"name": ""}))
        .unwrap_err();

    assert_eq!(errors.messages("name").unwrap(), &["cannot be blank"]);
    assert_eq!(env, environment());
}

#[test]
fn tag_of_an_externally_mutated_resource_no_longer_matches() {
    let schema = environment_schema();
    let env = environment();
    let stale_tag = FreshResource::begin(&env, &schema, ApiVersion::V1)
        .etag()
        .clone();

    // another writer lands a change between fetch and update
    let mut mutated = environment();
    mutated.pipelines.push("deploy".to_string());

    let fresh = FreshResource::begin(&mutated, &schema, ApiVersion::V1);
    let current = fresh.etag().clone();
    assert_eq!(
        fresh.validate(Some(&stale_tag)).unwrap_err(),
        StaleStateError::Stale { current }
    );
}
