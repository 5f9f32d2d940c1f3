use crate::jsontext;

use super::catalog::ConfigMapCatalog;
use super::session::{EditSession, ViewMode};

#[test]
fn search_matches_name_and_deployment() {
    let catalog = ConfigMapCatalog::seeded();
    assert_eq!(catalog.search("myapp").len(), 1);
    assert_eq!(catalog.search("WORKER").len(), 1);
    assert_eq!(catalog.search("config").len(), 5);
    assert!(catalog.search("nonexistent").is_empty());
}

#[test]
fn save_pushes_a_version_and_updates_the_payload() {
    let mut catalog = ConfigMapCatalog::seeded();
    let map = catalog.get_by_name("cache-config").unwrap();
    let id = map.id;
    assert_eq!(map.versions.len(), 1);

    let mut session = EditSession::open(map);
    session.edit();
    session.set_buffer(r#"{"redis":{"host":"redis-service","port":6380}}"#);
    session
        .save(&mut catalog, "ops@company.com", "Moved Redis to port 6380")
        .unwrap();

    assert_eq!(session.mode(), ViewMode::View);
    assert_eq!(session.error(), None);

    let map = catalog.get(id).unwrap();
    assert!(map.data.contains("6380"));
    assert_eq!(map.versions.len(), 2);
    assert_eq!(map.versions[0].id, 2);
    assert_eq!(map.versions[0].editor, "ops@company.com");
    assert_eq!(map.versions[0].changes, "Moved Redis to port 6380");
    assert_eq!(map.versions[0].data, map.data);
}

#[test]
fn invalid_json_never_reaches_the_stored_payload() {
    let mut catalog = ConfigMapCatalog::seeded();
    let map = catalog.get(1).unwrap();
    let original_data = map.data.clone();
    let original_versions = map.versions.len();

    let mut session = EditSession::open(map);
    session.edit();
    session.set_buffer("{broken json");

    let err = session
        .save(&mut catalog, "ops@company.com", "bad edit")
        .unwrap_err();
    assert!(err.to_string().contains("Cannot save invalid JSON"));
    assert_eq!(
        session.error(),
        Some("Cannot save invalid JSON. Please fix the errors first.")
    );

    let map = catalog.get(1).unwrap();
    assert_eq!(map.data, original_data);
    assert_eq!(map.versions.len(), original_versions);
}

#[test]
fn beautify_leaves_a_broken_buffer_untouched() {
    let catalog = ConfigMapCatalog::seeded();
    let mut session = EditSession::open(catalog.get(1).unwrap());

    session.set_buffer("{oops");
    assert!(session.beautify().is_err());
    assert_eq!(session.buffer(), "{oops");
    assert_eq!(
        session.error(),
        Some("Invalid JSON format. Please check your syntax.")
    );

    session.set_buffer(r#"{"a":1}"#);
    session.beautify().unwrap();
    assert!(session.buffer().contains('\n'));
    assert_eq!(session.error(), None);

    // pretty-printing an already pretty buffer is a no-op
    let once = session.buffer().to_string();
    session.beautify().unwrap();
    assert_eq!(session.buffer(), once);
}

#[test]
fn restore_makes_the_version_payload_current_and_returns_to_view() {
    let mut catalog = ConfigMapCatalog::seeded();
    let map = catalog.get_by_name("myapp-config").unwrap();
    let id = map.id;
    let old_payload = map.version(3).unwrap().data.clone();

    let mut session = EditSession::open(map);
    session.view_history();
    assert_eq!(session.mode(), ViewMode::History);

    session.restore(&mut catalog, 3).unwrap();
    assert_eq!(session.mode(), ViewMode::View);
    assert_eq!(session.buffer(), old_payload);
    assert_eq!(catalog.get(id).unwrap().data, old_payload);
}

#[test]
fn restore_rejects_unknown_versions() {
    let mut catalog = ConfigMapCatalog::seeded();
    let mut session = EditSession::open(catalog.get(4).unwrap());
    let err = session.restore(&mut catalog, 9).unwrap_err();
    assert!(err.to_string().contains("no version 9"));
}

#[test]
fn cancel_discards_buffer_edits() {
    let catalog = ConfigMapCatalog::seeded();
    let map = catalog.get(2).unwrap();
    let stored = map.data.clone();

    let mut session = EditSession::open(map);
    session.edit();
    session.set_buffer("{}");
    session.cancel(&catalog).unwrap();

    assert_eq!(session.buffer(), stored);
    assert_eq!(session.mode(), ViewMode::View);
}

#[test]
fn seeded_payloads_are_valid_json() {
    let catalog = ConfigMapCatalog::seeded();
    for map in catalog.configmaps() {
        assert!(jsontext::validate(&map.data).is_ok(), "{}", map.name);
        for version in &map.versions {
            assert!(jsontext::validate(&version.data).is_ok());
        }
    }
}
