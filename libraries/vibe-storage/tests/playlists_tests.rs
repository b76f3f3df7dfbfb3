//! Integration tests for the playlists collection
//!
//! Covers:
//! - Playlists start empty
//! - Two-stage lookup (primary id, then external id)
//! - Duplicate-suppressing song adds, including concurrent ones


use std::sync::Arc;
use test_helpers::*;
use vibe_core::{query::Filter, DocumentId, DocumentStore, Lookup, Playlist};

async fn song_ids(pool: &sqlx::SqlitePool, id: &DocumentId) -> Vec<String> {
    vibe_storage::playlists::find(pool, &Filter::All, 0)
        .await
        .unwrap()
        .into_iter()
        .find(|stored| &stored.id == id)
        .map(|stored| stored.record.song_ids)
        .expect("playlist missing")
}

#[tokio::test]
async fn test_create_playlist_starts_empty() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let mut playlist = Playlist::new("Road Trip");
    playlist.description = Some("Windows down".to_string());
    let id = vibe_storage::playlists::create(pool, &playlist).await.unwrap();

    let all = vibe_storage::playlists::find(pool, &Filter::All, 50).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
    assert_eq!(all[0].record.name, "Road Trip");
    assert_eq!(all[0].record.description.as_deref(), Some("Windows down"));
    assert!(all[0].record.song_ids.is_empty());
}

#[tokio::test]
async fn test_locate_by_primary_id() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let id = create_test_playlist(pool, "Mix", None).await;

    let lookup = vibe_storage::playlists::locate(pool, id.as_str()).await.unwrap();
    assert_eq!(lookup, Lookup::ByPrimary(id.clone()));

    // Upper-case spelling of the same UUID resolves too
    let upper = id.as_str().to_uppercase();
    let lookup = vibe_storage::playlists::locate(pool, &upper).await.unwrap();
    assert_eq!(lookup, Lookup::ByPrimary(id));
}

#[tokio::test]
async fn test_locate_unknown_primary_id_does_not_fall_back() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let unknown = DocumentId::generate();
    // A playlist whose external id happens to look like a UUID
    create_test_playlist(pool, "Imported", Some(unknown.as_str())).await;

    let lookup = vibe_storage::playlists::locate(pool, unknown.as_str()).await.unwrap();
    assert_eq!(lookup, Lookup::NotFound);
}

#[tokio::test]
async fn test_locate_by_external_id_fallback() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_playlist(pool, "Other", Some("legacy-7")).await;
    let id = create_test_playlist(pool, "Imported", Some("legacy-42")).await;

    let lookup = vibe_storage::playlists::locate(pool, "legacy-42").await.unwrap();
    assert_eq!(lookup, Lookup::ByFallback(id));

    let lookup = vibe_storage::playlists::locate(pool, "legacy-404").await.unwrap();
    assert_eq!(lookup, Lookup::NotFound);
}

#[tokio::test]
async fn test_add_song_suppresses_duplicates() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let id = create_test_playlist(pool, "Mix", None).await;

    assert!(vibe_storage::playlists::add_song(pool, &id, "song-1").await.unwrap());
    assert!(vibe_storage::playlists::add_song(pool, &id, "song-2").await.unwrap());
    assert!(!vibe_storage::playlists::add_song(pool, &id, "song-1").await.unwrap());

    assert_eq!(song_ids(pool, &id).await, vec!["song-1", "song-2"]);
}

#[tokio::test]
async fn test_add_song_accepts_dangling_ids() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let id = create_test_playlist(pool, "Mix", None).await;
    let never_created = DocumentId::generate();

    assert!(vibe_storage::playlists::add_song(pool, &id, never_created.as_str())
        .await
        .unwrap());
    assert_eq!(song_ids(pool, &id).await, vec![never_created.into_string()]);
}

#[tokio::test]
async fn test_add_song_to_missing_playlist_writes_nothing() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let added = vibe_storage::playlists::add_song(pool, &DocumentId::generate(), "song-1")
        .await
        .unwrap();
    assert!(!added);
}

#[tokio::test]
async fn test_concurrent_adds_of_same_song_store_it_once() {
    let test_db = TestDb::new().await;
    let store = Arc::new(test_db.store.clone());

    let id = store.insert_playlist(Playlist::new("Party")).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = Arc::clone(&store);
        let id = id.clone();
        handles.push(tokio::spawn(async move {
            store.add_song_to_playlist(&id, "anthem").await.unwrap()
        }));
    }

    let mut added = 0;
    for handle in handles {
        if handle.await.unwrap() {
            added += 1;
        }
    }

    assert_eq!(added, 1);
    assert_eq!(song_ids(test_db.pool(), &id).await, vec!["anthem"]);
}
