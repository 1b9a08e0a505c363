use super::*;
use crate::model::{Artwork, Theme};

fn gallery(name: &str) -> Gallery {
    Gallery {
        name: name.to_owned(),
        theme: Some(Theme::Dark),
        artworks: vec![Artwork {
            id: "a1".to_owned(),
            title: "Sun ☀".to_owned(),
            url: "https://x/1.jpg".to_owned(),
            room: Some("Room A".to_owned()),
        }],
    }
}

/// Backend that fails every operation, like a full or blocked `localStorage`.
struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("quota exceeded".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("blocked".to_owned()))
    }
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_round_trip_and_remove() {
    let store = MemoryStore::new();
    store.set("k", "v").expect("set");
    assert_eq!(store.get("k").expect("get"), Some("v".to_owned()));
    store.remove("k").expect("remove");
    assert_eq!(store.get("k").expect("get"), None);
    store.remove("k").expect("remove twice");
}

#[test]
fn memory_store_clones_share_state() {
    let store = MemoryStore::new();
    let other = store.clone();
    store.set("k", "v").expect("set");
    assert_eq!(other.get("k").expect("get"), Some("v".to_owned()));
}

// =============================================================
// Save / load / clear
// =============================================================

#[test]
fn save_then_load_returns_gallery() {
    let drafts = DraftStore::new(MemoryStore::new());
    let g = gallery("Studio");
    drafts.save(&g);
    assert_eq!(drafts.load(), Some(g));
}

#[test]
fn save_writes_json_under_fixed_key() {
    let store = MemoryStore::new();
    let drafts = DraftStore::new(store.clone());
    drafts.save(&gallery("Studio"));
    let raw = store.get(GALLERY_DRAFT_KEY).expect("get").expect("stored");
    assert!(raw.starts_with(r#"{"name":"Studio""#));
}

#[test]
fn last_save_wins() {
    let drafts = DraftStore::new(MemoryStore::new());
    drafts.save(&gallery("first"));
    drafts.save(&gallery("second"));
    assert_eq!(drafts.load().map(|g| g.name), Some("second".to_owned()));
}

#[test]
fn clear_then_load_is_none() {
    let drafts = DraftStore::new(MemoryStore::new());
    drafts.save(&gallery("Studio"));
    drafts.clear();
    assert_eq!(drafts.load(), None);
    drafts.clear();
    assert_eq!(drafts.load(), None);
}

#[test]
fn load_without_draft_is_none() {
    let drafts = DraftStore::new(MemoryStore::new());
    assert_eq!(drafts.load(), None);
}

#[test]
fn load_of_empty_value_is_none() {
    let store = MemoryStore::new();
    store.set(GALLERY_DRAFT_KEY, "").expect("set");
    assert_eq!(DraftStore::new(store).load(), None);
}

#[test]
fn load_of_corrupt_value_is_none() {
    let store = MemoryStore::new();
    store.set(GALLERY_DRAFT_KEY, "{not json").expect("set");
    assert_eq!(DraftStore::new(&store).load(), None);
    store.set(GALLERY_DRAFT_KEY, "[1,2]").expect("set");
    assert_eq!(DraftStore::new(&store).load(), None);
}

#[test]
fn load_keeps_object_missing_fields() {
    let store = MemoryStore::new();
    store.set(GALLERY_DRAFT_KEY, r#"{"theme":"dark"}"#).expect("set");
    let loaded = DraftStore::new(store).load().expect("draft");
    assert_eq!(loaded.name, "");
    assert_eq!(loaded.theme, Some(Theme::Dark));
    assert!(loaded.artworks.is_empty());
}

// =============================================================
// Degraded environments
// =============================================================

#[test]
fn detached_store_is_inert() {
    let drafts: DraftStore<MemoryStore> = DraftStore::detached();
    assert!(!drafts.is_attached());
    drafts.save(&gallery("Studio"));
    drafts.clear();
    assert_eq!(drafts.load(), None);
}

#[test]
fn from_option_none_behaves_detached() {
    let drafts: DraftStore<MemoryStore> = DraftStore::from_option(None);
    drafts.save(&gallery("Studio"));
    assert_eq!(drafts.load(), None);
}

#[test]
fn failing_backend_is_swallowed() {
    let drafts = DraftStore::new(FailingStore);
    drafts.save(&gallery("Studio"));
    drafts.clear();
    assert_eq!(drafts.load(), None);
}
