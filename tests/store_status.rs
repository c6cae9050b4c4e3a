// tests/store_status.rs

use veripanel::extract::{ArtworkRecord, ArtworkStatus};
use veripanel::store::{ArtworkStore, StoreError};

fn record(id: &str) -> ArtworkRecord {
    ArtworkRecord {
        id: id.into(),
        title: "Sunset".into(),
        artist: "Mara Ilic".into(),
        year: "2020".into(),
        image_url: String::new(),
        status: ArtworkStatus::Unverified,
    }
}

#[test]
fn update_status_is_idempotent() {
    let mut store = ArtworkStore::new();
    store.load(vec![record("sunset-2020")]);

    assert_eq!(store.update_status("sunset-2020", ArtworkStatus::Verified), Ok(()));
    assert_eq!(store.update_status("sunset-2020", ArtworkStatus::Verified), Ok(()));
    assert_eq!(store.get("sunset-2020").unwrap().status, ArtworkStatus::Verified);
}

#[test]
fn unknown_id_leaves_store_unchanged() {
    let mut store = ArtworkStore::new();
    store.load(vec![record("sunset-2020")]);

    let err = store.update_status("nope", ArtworkStatus::Verified);
    assert_eq!(err, Err(StoreError::NotFound("nope".into())));
    assert_eq!(store.get("sunset-2020").unwrap().status, ArtworkStatus::Unverified);
    assert_eq!(store.len(), 1);
}

#[test]
fn load_replaces_the_whole_collection() {
    let mut store = ArtworkStore::new();
    store.load(vec![record("sunset-2020"), record("dawn-2019")]);
    store.update_status("sunset-2020", ArtworkStatus::Verified).unwrap();

    store.load(vec![record("dusk-2021")]);
    assert_eq!(store.len(), 1);
    assert!(store.get("sunset-2020").is_none());
    assert_eq!(store.get("dusk-2021").unwrap().status, ArtworkStatus::Unverified);
}

#[test]
fn all_preserves_insertion_order() {
    let mut store = ArtworkStore::new();
    store.load(vec![record("c"), record("a"), record("b")]);

    let ids: Vec<&str> = store.all().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["c", "a", "b"]);
    assert!(!store.is_empty());
}
