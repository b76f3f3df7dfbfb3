use crate::documents;
use sqlx::SqlitePool;
use vibe_core::{error::Result, query::Filter, Collection, DocumentId, Lookup, Playlist, Stored};

/// Playlists matching `filter`, oldest first
pub async fn find(
    pool: &SqlitePool,
    filter: &Filter,
    limit: usize,
) -> Result<Vec<Stored<Playlist>>> {
    documents::find(pool, Collection::Playlists, filter, limit).await
}

/// Create new playlist
pub async fn create(pool: &SqlitePool, playlist: &Playlist) -> Result<DocumentId> {
    let id = documents::insert(pool, Collection::Playlists, playlist).await?;
    tracing::info!("Playlist created: {} ({})", id, playlist.name);
    Ok(id)
}

/// Locate a playlist in two stages.
///
/// A well-formed UUID is only ever matched against the primary key. Any other
/// string is matched against the document's `external_id`.
pub async fn locate(pool: &SqlitePool, raw_id: &str) -> Result<Lookup> {
    if let Some(id) = DocumentId::parse_primary(raw_id) {
        let found: Option<DocumentId> = sqlx::query_scalar("SELECT id FROM playlists WHERE id = ?")
            .bind(&id)
            .fetch_optional(pool)
            .await?;

        return Ok(found.map_or(Lookup::NotFound, Lookup::ByPrimary));
    }

    let found: Option<DocumentId> = sqlx::query_scalar(
        r#"
        SELECT id FROM playlists
        WHERE json_extract(document, '$.external_id') = ?
        ORDER BY rowid
        LIMIT 1
        "#,
    )
    .bind(raw_id)
    .fetch_optional(pool)
    .await?;

    Ok(found.map_or(Lookup::NotFound, Lookup::ByFallback))
}

/// Add a song id to the playlist's set.
///
/// The membership check and the append run as one statement, so concurrent
/// adds of the same id cannot both succeed. Returns `false` when nothing was
/// written (id already present, or no such playlist).
pub async fn add_song(pool: &SqlitePool, playlist_id: &DocumentId, song_id: &str) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE playlists
        SET document = json_insert(
            json_insert(document, '$.song_ids', json_array()),
            '$.song_ids[#]',
            ?
        )
        WHERE id = ?
          AND NOT EXISTS (
              SELECT 1 FROM json_each(playlists.document, '$.song_ids')
              WHERE json_each.value = ?
          )
        "#,
    )
    .bind(song_id)
    .bind(playlist_id)
    .bind(song_id)
    .execute(pool)
    .await?;

    let added = result.rows_affected() > 0;
    tracing::debug!(
        "Add song {} to playlist {}: {}",
        song_id,
        playlist_id,
        if added { "added" } else { "already present" }
    );
    Ok(added)
}
