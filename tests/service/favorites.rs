use std::path::PathBuf;

use holocron::{
    error::{Error, StorageError},
    model::FavoriteRecord,
    service::FavoritesStore,
    storage::{FileStorage, KeyValueStorage},
};
use holocron_test_utils::prelude::*;

fn data_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "holocron-favorites-{}-{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);

    dir
}

fn favorite(id: &str, name: &str) -> FavoriteRecord {
    FavoriteRecord {
        id: id.to_string(),
        name: name.to_string(),
        height: Some("172".to_string()),
        gender: Some("male".to_string()),
        homeworld: None,
    }
}

/// Expect favorites written by one store to be read by a fresh one on the same directory
#[test]
fn favorites_survive_restart() {
    let dir = data_dir("restart");

    let first = FavoritesStore::new(FileStorage::new(&dir), "favorites");
    assert!(first.add(favorite("1", "Luke Skywalker")).unwrap());
    assert!(first.add(favorite("4", "Darth Vader")).unwrap());

    let second = FavoritesStore::new(FileStorage::new(&dir), "favorites");
    let ids: Vec<String> = second.list().into_iter().map(|f| f.id).collect();

    assert_eq!(ids, vec!["1", "4"]);

    let _ = std::fs::remove_dir_all(&dir);
}

/// Expect toggling twice to leave the persisted collection as it was
#[test]
fn toggle_twice_restores_collection() {
    let dir = data_dir("toggle");
    let store = FavoritesStore::new(FileStorage::new(&dir), "favorites");
    store.add(favorite("1", "Luke Skywalker")).unwrap();
    let before = store.list();

    assert!(store.toggle(favorite("2", "C-3PO")).unwrap());
    assert!(!store.toggle(favorite("2", "C-3PO")).unwrap());

    assert_eq!(store.list(), before);

    let _ = std::fs::remove_dir_all(&dir);
}

/// Expect a corrupted favorites file to read as empty and be replaced on the next write
#[test]
fn corrupted_file_is_replaced() {
    let dir = data_dir("corrupted");
    let storage = FileStorage::new(&dir);
    storage.set("favorites", "{not json").unwrap();

    let store = FavoritesStore::new(storage.clone(), "favorites");
    assert!(store.list().is_empty());

    assert!(store.add(favorite("1", "Luke Skywalker")).unwrap());
    assert_eq!(store.list().len(), 1);

    let raw = storage.get("favorites").unwrap().unwrap();
    assert!(raw.starts_with('['));

    let _ = std::fs::remove_dir_all(&dir);
}

/// Expect missing optional fields to be omitted from the persisted JSON
#[test]
fn persisted_records_omit_missing_fields() -> Result<(), TestError> {
    let dir = data_dir("omit");
    let storage = FileStorage::new(&dir);
    let store = FavoritesStore::new(storage.clone(), "favorites");

    store.add(favorite("1", "Luke Skywalker")).unwrap();

    let raw = storage.get("favorites").unwrap().unwrap();
    assert!(raw.contains(r#""id":"1""#));
    assert!(!raw.contains("homeworld"));

    let persisted: Vec<serde_json::Value> = serde_json::from_str(&raw)?;
    assert_eq!(persisted[0]["name"], "Luke Skywalker");

    let _ = std::fs::remove_dir_all(&dir);

    Ok(())
}

/// Expect one undecodable record to be skipped while its siblings survive the next write
#[test]
fn undecodable_record_keeps_siblings() -> Result<(), TestError> {
    let dir = data_dir("partial");
    let storage = FileStorage::new(&dir);
    storage
        .set(
            "favorites",
            r#"[{"id":"1","name":"Luke Skywalker"},{"id":"4","name":"Darth Vader"},{"name":"no id"}]"#,
        )
        .unwrap();

    let store = FavoritesStore::new(storage.clone(), "favorites");
    assert_eq!(store.list().len(), 2);

    assert!(store.add(favorite("5", "Leia Organa")).unwrap());

    let raw = storage.get("favorites").unwrap().unwrap();
    let persisted: Vec<FavoriteRecord> = serde_json::from_str(&raw)?;
    let ids: Vec<&str> = persisted.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4", "5"]);

    let _ = std::fs::remove_dir_all(&dir);

    Ok(())
}

/// Expect an unreadable favorites file to list as empty and to be left untouched by mutations
#[test]
fn unreadable_file_is_not_overwritten() -> Result<(), TestError> {
    let dir = data_dir("unreadable");
    let bytes: &[u8] = &[0x5b, 0xff, 0xfe, 0x5d];
    std::fs::create_dir_all(&dir)?;
    std::fs::write(dir.join("favorites.json"), bytes)?;

    let store = FavoritesStore::new(FileStorage::new(&dir), "favorites");
    assert!(store.list().is_empty());

    let added = store.add(favorite("1", "Luke Skywalker"));
    assert!(matches!(
        added,
        Err(Error::StorageError(StorageError::Read { .. }))
    ));
    let toggled = store.toggle(favorite("1", "Luke Skywalker"));
    assert!(matches!(
        toggled,
        Err(Error::StorageError(StorageError::Read { .. }))
    ));

    assert_eq!(std::fs::read(dir.join("favorites.json"))?, bytes);

    let _ = std::fs::remove_dir_all(&dir);

    Ok(())
}
