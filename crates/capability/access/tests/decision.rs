use domain::{AccessLevel, Identity};
use manager_access::decision;

fn superuser() -> Identity {
    Identity::new("u-root", "root", "master", AccessLevel::SuperUser)
}

fn standard() -> Identity {
    Identity::new("u-1", "alice", "tenant-1", AccessLevel::Standard)
}

fn restricted() -> Identity {
    Identity::new("u-2", "kiosk", "tenant-1", AccessLevel::Restricted)
}

#[test]
fn superuser_accesses_every_realm() {
    let identity = superuser();
    for realm in ["master", "tenant-1", "tenant-2", ""] {
        assert!(decision::can_access_realm(&identity, realm));
    }
}

#[test]
fn standard_user_is_realm_scoped() {
    let identity = standard();
    assert!(decision::can_access_realm(&identity, "tenant-1"));
    assert!(!decision::can_access_realm(&identity, "tenant-2"));
}

#[test]
fn only_restricted_lists_own_assets() {
    assert!(decision::can_list_own_assets(&restricted()));
    assert!(!decision::can_list_own_assets(&standard()));
    assert!(!decision::can_list_own_assets(&superuser()));
}

#[test]
fn restricted_never_reads_or_writes_assets() {
    let identity = restricted();
    // 即使目标 realm 就是认证 realm，受限用户也没有单资产读写路径
    assert!(!decision::can_read_asset(&identity, "tenant-1"));
    assert!(!decision::can_write_asset(&identity, "tenant-1"));
    assert!(!decision::can_read_asset(&identity, "tenant-2"));
}

#[test]
fn standard_reads_and_writes_within_realm() {
    let identity = standard();
    assert!(decision::can_read_asset(&identity, "tenant-1"));
    assert!(decision::can_write_asset(&identity, "tenant-1"));
    assert!(!decision::can_read_asset(&identity, "tenant-2"));
    assert!(!decision::can_write_asset(&identity, "tenant-2"));
}

#[test]
fn attribute_write_requires_protected_link_for_restricted() {
    let identity = restricted();
    assert!(decision::can_write_attribute(&identity, "tenant-1", true));
    assert!(!decision::can_write_attribute(&identity, "tenant-1", false));
    // realm 不可达时关联也救不回来
    assert!(!decision::can_write_attribute(&identity, "tenant-2", true));
}

#[test]
fn attribute_write_ignores_link_for_others() {
    assert!(decision::can_write_attribute(&standard(), "tenant-1", false));
    assert!(decision::can_write_attribute(&superuser(), "tenant-9", false));
    assert!(!decision::can_write_attribute(&standard(), "tenant-2", false));
}

#[test]
fn empty_realm_resolves_to_own() {
    let identity = standard();
    assert_eq!(decision::resolve_target_realm(&identity, None), "tenant-1");
    assert_eq!(decision::resolve_target_realm(&identity, Some("")), "tenant-1");
    assert_eq!(
        decision::resolve_target_realm(&identity, Some("tenant-2")),
        "tenant-2"
    );
}
