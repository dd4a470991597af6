use api_contract::{AssetDto, AttributeStateRequest, CreateAssetRequest, UpdateAssetRequest};

#[test]
fn asset_dto_is_camel_case() {
    let dto = AssetDto {
        asset_id: "asset-1".to_string(),
        realm: "tenant-1".to_string(),
        parent_id: None,
        name: "Boiler".to_string(),
        asset_type: "urn:thing".to_string(),
        attributes: vec![],
    };
    let value = serde_json::to_value(dto).expect("serialize");
    assert!(value.get("assetId").is_some());
    assert!(value.get("assetType").is_some());
    assert!(value.get("asset_id").is_none());
    assert!(value.get("asset_type").is_none());
}

#[test]
fn create_request_accepts_missing_attributes() {
    let payload = r#"{"realm":"tenant-1","name":"Boiler","assetType":"urn:thing"}"#;
    let req: CreateAssetRequest = serde_json::from_str(payload).expect("parse");
    assert!(req.asset_id.is_none());
    assert!(req.attributes.is_empty());
    assert_eq!(req.asset_type, "urn:thing");
}

#[test]
fn update_request_has_no_type_field() {
    // 更新体中出现 assetType 也不会被映射到任何字段
    let payload = r#"{"realm":"tenant-2","assetType":"urn:other"}"#;
    let req: UpdateAssetRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.realm.as_deref(), Some("tenant-2"));
    assert!(req.name.is_none());
}

#[test]
fn update_request_distinguishes_absent_and_null_parent() {
    // 字段缺省：保持原父节点
    let absent: UpdateAssetRequest =
        serde_json::from_str(r#"{"name":"Boiler"}"#).expect("parse");
    assert_eq!(absent.parent_id, None);

    // 显式 null：清除父节点
    let null: UpdateAssetRequest =
        serde_json::from_str(r#"{"parentId":null}"#).expect("parse");
    assert_eq!(null.parent_id, Some(None));

    // 显式值：换父节点
    let set: UpdateAssetRequest =
        serde_json::from_str(r#"{"parentId":"asset-2"}"#).expect("parse");
    assert_eq!(set.parent_id, Some(Some("asset-2".to_string())));
}

#[test]
fn attribute_state_accepts_null_value() {
    let payload = r#"{"entityId":"asset-1","attributeName":"temperature","value":null}"#;
    let req: AttributeStateRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.entity_id, "asset-1");
    assert_eq!(req.attribute_name, "temperature");
    assert!(req.value.is_none());
}
