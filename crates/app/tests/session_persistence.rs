//! End-to-end checks through the session facade with a durable store.

use std::collections::HashSet;
use std::sync::Arc;

use ecocheck_app::EcoCheck;
use ecocheck_catalog::{Catalog, SimulatedScanner, SortCriterion, sample_catalog};
use ecocheck_core::{DomainError, Entity};
use ecocheck_infra::{FAVORITES_KEY, JsonFileStore, KeyValueStore, Theme};

fn open(path: &std::path::Path) -> EcoCheck<Arc<JsonFileStore>> {
    EcoCheck::new(sample_catalog(), Arc::new(JsonFileStore::open(path).unwrap()))
}

#[test]
fn bottle_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let app = open(&dir.path().join("store.json"));

    let hits = app.search("bottle");
    assert!(hits.iter().any(|p| p.id() == "2"));

    assert!(app.toggle_favorite("2").unwrap());
    let listed: Vec<String> = app
        .favorites_sorted(SortCriterion::Recent)
        .products
        .iter()
        .map(|p| p.id().to_string())
        .collect();
    assert_eq!(listed, vec!["2".to_string()]);

    assert!(!app.toggle_favorite("2").unwrap());
    assert!(app.favorites_sorted(SortCriterion::Recent).products.is_empty());
}

#[test]
fn favorites_and_theme_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let app = open(&path);
        app.toggle_favorite("6").unwrap();
        app.toggle_favorite("1").unwrap();
        app.toggle_theme().unwrap();
    }

    let app = open(&path);
    assert_eq!(app.theme(), Theme::Dark);
    let listed: Vec<String> = app
        .favorites_sorted(SortCriterion::Recent)
        .products
        .iter()
        .map(|p| p.id().to_string())
        .collect();
    assert_eq!(listed, vec!["6".to_string(), "1".to_string()]);

    app.clear_favorites().unwrap();
    drop(app);

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.get(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn malformed_favorites_on_disk_are_recovered() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{"ecocheck-favorites": "oops", "theme": "dark"}"#).unwrap();

    let app = open(&path);
    assert!(app.favorites_sorted(SortCriterion::Name).products.is_empty());
    assert_eq!(app.theme(), Theme::Dark);
    assert!(app.toggle_favorite("3").unwrap());
    assert!(app.details("3").unwrap().is_favorite);
}

#[test]
fn native_json_favorites_on_disk_are_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{"ecocheck-favorites": ["2"], "theme": "dark"}"#).unwrap();

    let app = open(&path);
    let listed: Vec<String> = app
        .favorites_sorted(SortCriterion::Recent)
        .products
        .iter()
        .map(|p| p.id().to_string())
        .collect();
    assert_eq!(listed, vec!["2".to_string()]);
    assert_eq!(app.theme(), Theme::Dark);
}

#[test]
fn non_list_favorites_on_disk_read_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{"ecocheck-favorites": 5, "theme": "dark"}"#).unwrap();

    let app = open(&path);
    assert!(app.favorites_sorted(SortCriterion::Recent).products.is_empty());
    assert_eq!(app.theme(), Theme::Dark);
    assert!(app.toggle_favorite("4").unwrap());

    drop(app);
    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.get(FAVORITES_KEY).unwrap().as_deref(), Some(r#"["4"]"#));
}

#[test]
fn scans_cover_the_catalog() {
    let app = EcoCheck::new(sample_catalog(), Arc::new(ecocheck_infra::InMemoryStore::new()))
        .with_scanner(SimulatedScanner::seeded(2024));
    let seen: HashSet<String> = (0..1000)
        .map(|_| app.scan().unwrap().id().to_string())
        .collect();
    assert_eq!(seen.len(), 6);
}

#[test]
fn empty_catalog_scan_is_reported() {
    let app = EcoCheck::new(
        Catalog::new(vec![]).unwrap(),
        Arc::new(ecocheck_infra::InMemoryStore::new()),
    );
    assert_eq!(app.scan().unwrap_err(), DomainError::EmptyCatalog);
    assert!(app.recent_scans().is_empty());
}
