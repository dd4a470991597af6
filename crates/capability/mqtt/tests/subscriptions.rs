use domain::AttributeRef;
use manager_mqtt::{CLIENT_ID_SEPARATOR, MqttConnection, derive_realm};

fn connection(client_id: &str) -> MqttConnection {
    MqttConnection::new(client_id, "device-user", b"secret".to_vec())
}

#[test]
fn realm_derivation_rules() {
    assert_eq!(derive_realm("tenantA:device7", CLIENT_ID_SEPARATOR), "tenantA");
    assert_eq!(derive_realm("device7", CLIENT_ID_SEPARATOR), "device7");
    // 分隔符位于索引 0：空前缀回落到整串
    assert_eq!(derive_realm(":device7", CLIENT_ID_SEPARATOR), ":device7");
}

#[test]
fn connection_derives_realm_from_client_id() {
    assert_eq!(connection("tenantA:device7").realm(), "tenantA");
    assert_eq!(connection("device7").realm(), "device7");
    assert_eq!(connection(":device7").realm(), ":device7");

    let custom = MqttConnection::with_separator("tenantB/dev", "u", vec![], '/');
    assert_eq!(custom.realm(), "tenantB");
}

#[test]
fn subscription_ids_are_strictly_increasing_from_one() {
    let conn = connection("tenantA:device7");
    let mut previous = 0;
    for _ in 0..100 {
        let id = conn.next_subscription_id();
        assert!(id > previous);
        previous = id;
    }
    assert_eq!(previous, 100);
}

#[test]
fn duplicate_subscribe_returns_existing_id() {
    let conn = connection("tenantA:device7");
    let first = conn.subscribe_asset("asset-1");
    let again = conn.subscribe_asset("asset-1");
    assert_eq!(first, again);

    let attr = AttributeRef::new("asset-1", "temperature");
    let attr_id = conn.subscribe_attribute(&attr);
    assert_ne!(attr_id, first);
    assert_eq!(conn.subscribe_attribute(&attr), attr_id);
}

#[test]
fn unsubscribe_is_idempotent_and_ids_are_never_recycled() {
    let conn = connection("tenantA:device7");
    let first = conn.subscribe_asset("asset-1");
    conn.unsubscribe_asset("asset-1");
    conn.unsubscribe_asset("asset-1");
    assert!(conn.asset_subscription("asset-1").is_none());

    // 重新订阅得到新 ID，旧值不回收
    let second = conn.subscribe_asset("asset-1");
    assert!(second > first);
}

#[test]
fn asset_and_attribute_tables_are_independent() {
    let conn = connection("tenantA:device7");
    conn.subscribe_asset("asset-1");
    conn.subscribe_attribute(&AttributeRef::new("asset-1", "temperature"));
    conn.subscribe_attribute(&AttributeRef::new("asset-1", "humidity"));
    assert_eq!(conn.subscription_count(), 3);

    conn.unsubscribe_attribute(&AttributeRef::new("asset-1", "temperature"));
    assert_eq!(conn.subscription_count(), 2);
    assert!(conn.asset_subscription("asset-1").is_some());
}

#[test]
fn access_token_is_refreshable() {
    let conn = connection("tenantA:device7");
    assert!(conn.access_token().is_none());
    conn.set_access_token(Some("token-1".to_string()));
    assert_eq!(conn.access_token().as_deref(), Some("token-1"));
    conn.set_access_token(Some("token-2".to_string()));
    assert_eq!(conn.access_token().as_deref(), Some("token-2"));

    assert_eq!(conn.username(), "device-user");
    assert_eq!(conn.password(), b"secret");
    assert_eq!(conn.client_id(), "tenantA:device7");
}
