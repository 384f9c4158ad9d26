use helmsman_representer::{
    as_string, serialize, FieldBinding, RepresentationContext, Schema, UrlBuilder,
};
use helmsman_types::ApiVersion;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
struct Agent {
    uuid: String,
    hostname: String,
    ip_address: String,
    disabled: bool,
    environments: Vec<Environment>,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Environment {
    name: String,
}

fn environment_schema() -> Arc<Schema<Environment>> {
    Arc::new(
        Schema::<Environment>::builder()
            .link("self", |env: &Environment, ctx| {
                (!env.name.is_empty())
                    .then(|| ctx.url_builder().url(&format!("/api/environments/{}", env.name)))
            })
            .field(FieldBinding::new(
                "name",
                |env: &Environment, _| json!(env.name),
                |env, value| {
                    env.name = as_string(value)?;
                    Ok(())
                },
            ))
            .build()
            .unwrap(),
    )
}

fn agent_schema() -> Arc<Schema<Agent>> {
    let environments = environment_schema();
    Arc::new(
        Schema::<Agent>::builder()
            .link("self", |agent: &Agent, ctx| {
                (!agent.uuid.is_empty())
                    .then(|| ctx.url_builder().url(&format!("/api/agents/{}", agent.uuid)))
            })
            .link("doc", |_, _| Some("https://api.helmsman.dev/v1/#agents".to_string()))
            .field(FieldBinding::read_only("uuid", |agent: &Agent, _| {
                json!(agent.uuid)
            }))
            .field(FieldBinding::new(
                "hostname",
                |agent: &Agent, _| json!(agent.hostname),
                |agent, value| {
                    agent.hostname = as_string(value)?;
                    Ok(())
                },
            ))
            .field(FieldBinding::new(
                "ipAddress",
                |agent: &Agent, _| json!(agent.ip_address),
                |agent, value| {
                    agent.ip_address = as_string(value)?;
                    Ok(())
                },
            ))
            // Computed from two domain attributes.
            .field(FieldBinding::read_only("displayName", |agent: &Agent, _| {
                json!(format!("{} ({})", agent.hostname, agent.ip_address))
            }))
            .field(
                FieldBinding::read_only("disabled", |agent: &Agent, _| json!(agent.disabled))
                    .skip_if(|agent: &Agent| !agent.disabled),
            )
            .embedded_collection("environments", &environments, |agent: &Agent| {
                &agent.environments
            })
            .rename("ipAddress", "ip_address")
            .rename("displayName", "display_name")
            .build()
            .unwrap(),
    )
}

fn agent() -> Agent {
    Agent {
        uuid: "uuid-1".to_string(),
        hostname: "host-a".to_string(),
        ip_address: "10.0.0.7".to_string(),
        disabled: false,
        environments: vec![
            Environment { name: "uat".to_string() },
            Environment { name: "prod".to_string() },
        ],
    }
}

fn ctx() -> RepresentationContext {
    RepresentationContext::new(UrlBuilder::new("https://ci.example.com/go"), ApiVersion::V1)
}

// ── Document shape ───────────────────────────────────────────────

#[test]
fn renders_links_fields_and_embedded() {
    let doc = serialize(&agent(), &agent_schema(), &ctx());
    assert_eq!(
        doc,
        json!({
            "_links": {
                "self": {"href": "https://ci.example.com/go/api/agents/uuid-1"},
                "doc": {"href": "https://api.helmsman.dev/v1/#agents"},
            },
            "uuid": "uuid-1",
            "hostname": "host-a",
            "ip_address": "10.0.0.7",
            "display_name": "host-a (10.0.0.7)",
            "_embedded": {
                "environments": [
                    {
                        "_links": {"self": {"href": "https://ci.example.com/go/api/environments/uat"}},
                        "name": "uat",
                    },
                    {
                        "_links": {"self": {"href": "https://ci.example.com/go/api/environments/prod"}},
                        "name": "prod",
                    },
                ],
            },
        })
    );
}

#[test]
fn members_follow_declaration_order() {
    let doc = serialize(&agent(), &agent_schema(), &ctx());
    let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
    assert_eq!(
        keys,
        vec!["_links", "uuid", "hostname", "ip_address", "display_name", "_embedded"]
    );
}

#[test]
fn skip_predicate_omits_field() {
    let mut disabled_agent = agent();
    disabled_agent.disabled = true;

    let schema = agent_schema();
    let shown = serialize(&disabled_agent, &schema, &ctx());
    let hidden = serialize(&agent(), &schema, &ctx());

    assert_eq!(shown["disabled"], json!(true));
    assert!(hidden.as_object().unwrap().get("disabled").is_none());
}

#[test]
fn absent_link_resolver_omits_the_link() {
    let mut unsaved = agent();
    unsaved.uuid = String::new();

    let doc = serialize(&unsaved, &agent_schema(), &ctx());
    let links = doc["_links"].as_object().unwrap();
    assert!(links.get("self").is_none());
    assert!(links.get("doc").is_some());
}

#[test]
fn embedded_collection_preserves_source_order() {
    let mut reordered = agent();
    reordered.environments.reverse();

    let doc = serialize(&reordered, &agent_schema(), &ctx());
    let names: Vec<&str> = doc["_embedded"]["environments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["prod", "uat"]);
}

#[test]
fn empty_embedded_collection_renders_empty_array() {
    let mut lonely = agent();
    lonely.environments.clear();

    let doc = serialize(&lonely, &agent_schema(), &ctx());
    assert_eq!(doc["_embedded"]["environments"], json!([]));
}

// ── Link-only collections ────────────────────────────────────────

#[test]
fn linked_collection_renders_element_links_only() {
    let environments = environment_schema();
    let schema = Schema::<Agent>::builder()
        .field(FieldBinding::read_only("uuid", |agent: &Agent, _| {
            json!(agent.uuid)
        }))
        .linked_collection("environments", &environments, |agent: &Agent| {
            &agent.environments
        })
        .build()
        .unwrap();

    let doc = serialize(&agent(), &schema, &ctx());
    assert_eq!(
        doc["environments"],
        json!([
            {"_links": {"self": {"href": "https://ci.example.com/go/api/environments/uat"}}},
            {"_links": {"self": {"href": "https://ci.example.com/go/api/environments/prod"}}},
        ])
    );
}

// ── Canonical mode ───────────────────────────────────────────────

#[test]
fn canonical_render_excludes_links_at_every_depth() {
    let doc = serialize(
        &agent(),
        &agent_schema(),
        &RepresentationContext::canonical(ApiVersion::V1),
    );
    assert_eq!(
        doc,
        json!({
            "uuid": "uuid-1",
            "hostname": "host-a",
            "ip_address": "10.0.0.7",
            "display_name": "host-a (10.0.0.7)",
            "_embedded": {
                "environments": [
                    {"name": "uat"},
                    {"name": "prod"},
                ],
            },
        })
    );
}

#[test]
fn canonical_render_drops_link_only_collections() {
    let environments = environment_schema();
    let schema = Schema::<Agent>::builder()
        .linked_collection("environments", &environments, |agent: &Agent| {
            &agent.environments
        })
        .build()
        .unwrap();

    let doc = serialize(
        &agent(),
        &schema,
        &RepresentationContext::canonical(ApiVersion::V1),
    );
    assert_eq!(doc, json!({}));
}
