use helmsman_domain::representers::plugin_profile;
use helmsman_domain::{ConfigurationProperty, PluginProfile};
use helmsman_etag::compute_etag;
use helmsman_representer::{deserialize, serialize, RepresentationContext, UrlBuilder};
use helmsman_types::ApiVersion;
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,11}"
}

fn property() -> impl Strategy<Value = ConfigurationProperty> {
    (identifier(), identifier(), any::<bool>()).prop_map(|(key, value, secure)| {
        if secure {
            ConfigurationProperty::secure(key, value)
        } else {
            ConfigurationProperty::plain(key, value)
        }
    })
}

fn profile() -> impl Strategy<Value = PluginProfile> {
    (identifier(), identifier(), prop::collection::vec(property(), 0..4))
        .prop_map(|(id, plugin_id, properties)| PluginProfile::new(id, plugin_id, properties))
}

proptest! {
    // A rendered document, submitted back unchanged, reconstructs the
    // object: every writable member survives the trip.
    #[test]
    fn rendered_documents_merge_back_losslessly(original in profile()) {
        let schema = plugin_profile::v1().unwrap();
        let ctx = RepresentationContext::new(
            UrlBuilder::new("https://ci.example.com/go"),
            ApiVersion::V1,
        );

        let doc = serialize(&original, &schema, &ctx);
        let mut rebuilt = PluginProfile::default();
        deserialize(&doc, &schema, &mut rebuilt).unwrap();

        prop_assert_eq!(rebuilt, original);
    }

    #[test]
    fn equal_state_always_hashes_to_the_same_tag(profile in profile()) {
        let schema = plugin_profile::v1().unwrap();
        let a = compute_etag(&profile, &schema, ApiVersion::V1);
        let b = compute_etag(&profile.clone(), &schema, ApiVersion::V1);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn any_visible_change_changes_the_tag(profile in profile()) {
        let schema = plugin_profile::v1().unwrap();
        let before = compute_etag(&profile, &schema, ApiVersion::V1);

        let mut changed = profile;
        changed.plugin_id.push_str("-x");
        let after = compute_etag(&changed, &schema, ApiVersion::V1);

        prop_assert_ne!(before, after);
    }
}
