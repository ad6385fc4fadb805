#![allow(clippy::float_cmp)]

use super::*;

const KEY: &str = "phantomNotes";

fn make_note(id: u64, x: f64, y: f64) -> Note {
    Note {
        id,
        title: String::new(),
        content: String::new(),
        x,
        y,
        width: None,
        height: None,
        timestamp: String::new(),
    }
}

/// Backend that fails every call.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read { key: key.into(), reason: "denied".into() })
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write { key: key.into(), reason: "quota exceeded".into() })
    }
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("nope").unwrap(), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
}

#[test]
fn memory_store_with_entry() {
    let store = MemoryStore::with_entry("k", "v");
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}

// =============================================================
// load_notes
// =============================================================

#[test]
fn load_missing_key_is_empty() {
    assert!(load_notes(&MemoryStore::new(), KEY).is_empty());
}

#[test]
fn load_invalid_json_is_empty() {
    let store = MemoryStore::with_entry(KEY, "{not json");
    assert!(load_notes(&store, KEY).is_empty());
}

#[test]
fn load_wrong_shape_is_empty() {
    let store = MemoryStore::with_entry(KEY, r#"{"id":1,"x":0,"y":0}"#);
    assert!(load_notes(&store, KEY).is_empty());
}

#[test]
fn load_backend_failure_is_empty() {
    assert!(load_notes(&BrokenStore, KEY).is_empty());
}

#[test]
fn load_reads_page_format() {
    let raw = r#"[{"id":1,"title":"a","content":"","x":10,"y":20,"timestamp":"t"},
                  {"id":3,"title":"b","content":"<u>x</u>","x":30,"y":40,"width":300,"height":220,"timestamp":"t"}]"#;
    let store = MemoryStore::with_entry(KEY, raw);
    let notes = load_notes(&store, KEY);
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, 1);
    assert_eq!(notes[1].width, Some(300.0));
}

// =============================================================
// save_notes
// =============================================================

#[test]
fn save_then_load_preserves_order_and_fields() {
    let store = MemoryStore::new();
    let mut second = make_note(2, 5.0, 6.0);
    second.height = Some(180.0);
    let notes = vec![make_note(9, 1.0, 2.0), second];
    save_notes(&store, KEY, &notes).unwrap();
    assert_eq!(load_notes(&store, KEY), notes);
}

#[test]
fn save_overwrites_previous_collection() {
    let store = MemoryStore::new();
    save_notes(&store, KEY, &[make_note(1, 0.0, 0.0), make_note(2, 0.0, 0.0)]).unwrap();
    save_notes(&store, KEY, &[make_note(2, 0.0, 0.0)]).unwrap();
    let ids: Vec<u64> = load_notes(&store, KEY).iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn save_empty_writes_empty_array() {
    let store = MemoryStore::new();
    save_notes(&store, KEY, &[]).unwrap();
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn save_backend_failure_is_reported() {
    let err = save_notes(&BrokenStore, KEY, &[make_note(1, 0.0, 0.0)]).unwrap_err();
    assert!(matches!(err, PersistError::Storage(StorageError::Write { .. })));
    assert!(err.to_string().contains("quota exceeded"));
}
