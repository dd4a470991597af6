use domain::AssetRecord;
use manager_storage::{AssetStore, InMemoryAssetStore};

fn asset(id: &str, realm: &str, parent: Option<&str>) -> AssetRecord {
    AssetRecord {
        asset_id: id.to_string(),
        realm: realm.to_string(),
        parent_id: parent.map(|value| value.to_string()),
        name: format!("asset {id}"),
        asset_type: "urn:thing".to_string(),
        attributes: vec![],
    }
}

#[tokio::test]
async fn merge_is_upsert() {
    let store = InMemoryAssetStore::new();
    let created = store.merge(asset("a1", "tenant-1", None)).await.expect("merge");
    assert_eq!(created.realm, "tenant-1");

    let mut updated = created.clone();
    updated.name = "renamed".to_string();
    store.merge(updated).await.expect("merge again");

    let found = store.find("a1").await.expect("find").expect("present");
    assert_eq!(found.name, "renamed");
}

#[tokio::test]
async fn root_and_children_queries_filter_by_realm() {
    let store = InMemoryAssetStore::new();
    store.merge(asset("root-1", "tenant-1", None)).await.expect("merge");
    store.merge(asset("root-2", "tenant-2", None)).await.expect("merge");
    store.merge(asset("child-1", "tenant-1", Some("root-1"))).await.expect("merge");
    store.merge(asset("child-2", "tenant-2", Some("root-1"))).await.expect("merge");

    let roots = store.find_root("tenant-1").await.expect("roots");
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].asset_id, "root-1");

    let all_children = store.find_children("root-1").await.expect("children");
    assert_eq!(all_children.len(), 2);

    let scoped = store
        .find_children_in_realm("root-1", "tenant-1")
        .await
        .expect("scoped children");
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].asset_id, "child-1");
}

#[tokio::test]
async fn protected_links_are_per_user() {
    let store = InMemoryAssetStore::new();
    store.merge(asset("a1", "tenant-1", None)).await.expect("merge");
    store.merge(asset("a2", "tenant-1", None)).await.expect("merge");
    store.link_protected("user-1", "a1");
    store.link_protected("user-2", "a2");

    let links = store.find_protected_of_user("user-1").await.expect("links");
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].asset_id, "a1");
    assert_eq!(links[0].realm, "tenant-1");

    assert!(store
        .find_protected_of_user_contains("user-1", "a1")
        .await
        .expect("contains"));
    assert!(!store
        .find_protected_of_user_contains("user-1", "a2")
        .await
        .expect("contains"));
}

#[tokio::test]
async fn protected_link_realm_tracks_current_asset_realm() {
    let store = InMemoryAssetStore::new();
    let created = store.merge(asset("a1", "tenant-1", None)).await.expect("merge");
    store.link_protected("user-1", "a1");

    // 资产被移入其他 realm 后，关联查询反映当前 realm
    let mut moved = created.clone();
    moved.realm = "tenant-2".to_string();
    store.merge(moved).await.expect("merge moved");

    let links = store.find_protected_of_user("user-1").await.expect("links");
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].realm, "tenant-2");
}

#[tokio::test]
async fn delete_refuses_node_with_children() {
    let store = InMemoryAssetStore::new();
    store.merge(asset("root-1", "tenant-1", None)).await.expect("merge");
    store.merge(asset("child-1", "tenant-1", Some("root-1"))).await.expect("merge");

    assert!(!store.delete("root-1").await.expect("delete parent"));
    assert!(store.delete("child-1").await.expect("delete child"));
    assert!(store.delete("root-1").await.expect("delete parent again"));
    assert!(store.find("root-1").await.expect("find").is_none());
}
