use super::*;
use chrono::{TimeZone, Utc};
use std::fs;
use tempfile::tempdir;

fn version(h: u32, m: u32, s: u32) -> MigrationVersion {
    MigrationVersion::from_datetime(Utc.with_ymd_and_hms(2024, 1, 1, h, m, s).unwrap())
}

#[test]
fn test_persist_creates_directory_and_file() {
    let dir = tempdir().unwrap();
    let store = FsMigrationStore::new(dir.path().join("migrations"));

    let path = store.persist(&version(12, 0, 0), "<?php // one").unwrap();

    assert_eq!(path, dir.path().join("migrations/Version20240101120000.php"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "<?php // one");
}

#[test]
fn test_same_second_overwrites() {
    let dir = tempdir().unwrap();
    let store = FsMigrationStore::new(dir.path());

    store.persist(&version(12, 0, 0), "first").unwrap();
    let path = store.persist(&version(12, 0, 0), "second").unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "second");
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn test_list_sorted_and_filtered() {
    let dir = tempdir().unwrap();
    let store = FsMigrationStore::new(dir.path());

    store.persist(&version(13, 0, 0), "b").unwrap();
    store.persist(&version(9, 30, 0), "a").unwrap();
    fs::write(dir.path().join("VersionNotAStamp.php"), "x").unwrap();
    fs::write(dir.path().join("README.md"), "x").unwrap();
    fs::write(dir.path().join("Version20240101100000.php.bak"), "x").unwrap();

    let listed: Vec<String> = store
        .list()
        .unwrap()
        .into_iter()
        .map(|m| m.version.class_name())
        .collect();
    assert_eq!(
        listed,
        vec!["Version20240101093000", "Version20240101130000"]
    );
}

#[test]
fn test_list_missing_directory_is_empty() {
    let dir = tempdir().unwrap();
    let store = FsMigrationStore::new(dir.path().join("absent"));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_path_for() {
    let store = FsMigrationStore::new("/srv/crm/migrations");
    assert_eq!(
        store.path_for(&version(12, 0, 0)),
        PathBuf::from("/srv/crm/migrations/Version20240101120000.php")
    );
    assert_eq!(store.dir(), Path::new("/srv/crm/migrations"));
}
