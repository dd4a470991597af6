use domain::{AccessLevel, AssetRecord, AttributeRef, Identity};

#[test]
fn identity_builds() {
    let identity = Identity::new("user-1", "alice", "tenant-1", AccessLevel::Standard);

    assert_eq!(identity.user_id, "user-1");
    assert_eq!(identity.username, "alice");
    assert_eq!(identity.realm, "tenant-1");
    assert!(!identity.is_super_user());
    assert!(!identity.is_restricted());
}

#[test]
fn access_levels_are_exclusive() {
    let superuser = Identity::new("u", "root", "master", AccessLevel::SuperUser);
    let restricted = Identity::new("u", "kiosk", "tenant-1", AccessLevel::Restricted);

    assert!(superuser.is_super_user());
    assert!(!superuser.is_restricted());
    assert!(restricted.is_restricted());
    assert!(!restricted.is_super_user());
}

#[test]
fn asset_attribute_lookup() {
    let asset = AssetRecord {
        asset_id: "a".repeat(22),
        realm: "tenant-1".to_string(),
        parent_id: None,
        name: "Boiler".to_string(),
        asset_type: "urn:thing".to_string(),
        attributes: vec![domain::Attribute {
            name: "temperature".to_string(),
            value: serde_json::json!(21.5),
        }],
    };

    assert!(asset.attribute("temperature").is_some());
    assert!(asset.attribute("humidity").is_none());
}

#[test]
fn attribute_ref_equality() {
    let a = AttributeRef::new("asset-1", "temperature");
    let b = AttributeRef::new("asset-1", "temperature");
    let c = AttributeRef::new("asset-1", "humidity");

    assert_eq!(a, b);
    assert_ne!(a, c);
}
