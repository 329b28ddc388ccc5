use super::*;

#[test]
fn mount_targets_use_host_page_ids() {
    let ids: Vec<_> = MountTarget::ALL.iter().map(|t| t.element_id()).collect();
    assert_eq!(ids, ["createTurfRoot", "turfGrid", "authControls"]);
}

#[cfg(not(feature = "csr"))]
#[test]
fn mount_pages_is_noop_off_browser() {
    mount_pages(&AppConfig::default());
}
