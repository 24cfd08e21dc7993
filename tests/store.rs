use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use pass_launcher::store::{PasswordStore, Scanner, WalkScanner};
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"-----BEGIN PGP MESSAGE-----").unwrap();
}

fn sorted(entries: &[String]) -> Vec<String> {
    let mut entries = entries.to_vec();
    entries.sort();
    entries
}

fn sample_store() -> TempDir {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "finance/bank.gpg");
    touch(dir.path(), "wifi.gpg");
    touch(dir.path(), "email/work/outlook.gpg");
    touch(dir.path(), ".gpg-id");
    touch(dir.path(), "notes.txt");
    touch(dir.path(), "email/.gpg");
    fs::create_dir_all(dir.path().join("archive.gpg")).unwrap();
    dir
}

#[test]
fn identifiers_are_relative_without_suffix() {
    let dir = sample_store();

    let entries = WalkScanner.scan(dir.path());

    assert_eq!(
        sorted(&entries),
        vec!["email/work/outlook", "finance/bank", "wifi"]
    );
}

#[test]
fn trailing_separator_on_root_is_harmless() {
    let dir = sample_store();
    let root = format!("{}/", dir.path().display());

    let entries = PasswordStore::new().entries(&root);

    assert_eq!(
        sorted(&entries),
        vec!["email/work/outlook", "finance/bank", "wifi"]
    );
}

#[test]
fn missing_store_lists_nothing() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    assert!(WalkScanner.scan(&missing).is_empty());
}

#[test]
fn listing_is_reused_within_ttl() {
    let dir = sample_store();
    let root = dir.path().display().to_string();
    let store = PasswordStore::new();

    let first = store.entries(&root);
    touch(dir.path(), "new.gpg");
    let second = store.entries(&root);

    assert!(Arc::ptr_eq(&first, &second));
    assert!(!second.contains(&"new".to_owned()));
}

#[test]
fn listing_is_rebuilt_after_ttl() {
    let dir = sample_store();
    let root = dir.path().display().to_string();
    let store = PasswordStore::with_ttl(Duration::from_millis(20));

    store.entries(&root);
    touch(dir.path(), "new.gpg");
    std::thread::sleep(Duration::from_millis(50));

    assert!(store.entries(&root).contains(&"new".to_owned()));
}

#[test]
fn distinct_roots_are_cached_apart() {
    let one = TempDir::new().unwrap();
    let two = TempDir::new().unwrap();
    touch(one.path(), "first.gpg");
    touch(two.path(), "second.gpg");
    let store = PasswordStore::new();

    let a = store.entries(one.path().display().to_string());
    let b = store.entries(two.path().display().to_string());

    assert_eq!(*a, vec!["first"]);
    assert_eq!(*b, vec!["second"]);
    assert_eq!(store.cache().len(), 2);
}

#[test]
fn search_reads_through_the_cache() {
    let dir = sample_store();
    let root = dir.path().display().to_string();
    let store = PasswordStore::new();

    let mut found: Vec<String> = store.search("EMAIL look", &root).collect();
    found.sort();
    assert_eq!(found, vec!["email/work/outlook"]);

    assert_eq!(store.search("", &root).count(), 3);
}

#[cfg(unix)]
#[test]
fn symlinked_entries_count_but_linked_dirs_are_not_entered() {
    let dir = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    touch(outside.path(), "hidden/secret.gpg");
    touch(dir.path(), "real.gpg");
    std::os::unix::fs::symlink(dir.path().join("real.gpg"), dir.path().join("alias.gpg")).unwrap();
    std::os::unix::fs::symlink(outside.path().join("hidden"), dir.path().join("linked")).unwrap();

    let entries = WalkScanner.scan(dir.path());

    assert_eq!(sorted(&entries), vec!["alias", "real"]);
}
