#![cfg(not(feature = "hydrate"))]

use super::*;
use gallery::Gallery;

#[test]
fn open_is_none_outside_browser() {
    assert!(LocalStorage::open().is_none());
}

#[test]
fn draft_store_is_detached_outside_browser() {
    let drafts = draft_store();
    assert!(!drafts.is_attached());
    drafts.save(&Gallery::default());
    drafts.clear();
    assert_eq!(drafts.load(), None);
}

#[test]
fn adapter_reports_unavailable_outside_browser() {
    let storage = LocalStorage {};
    assert!(matches!(storage.get("k"), Err(StorageError::Unavailable)));
    assert!(matches!(storage.set("k", "v"), Err(StorageError::Unavailable)));
    assert!(matches!(storage.remove("k"), Err(StorageError::Unavailable)));
}
