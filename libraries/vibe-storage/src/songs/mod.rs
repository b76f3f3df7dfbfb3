use crate::documents;
use sqlx::SqlitePool;
use vibe_core::{error::Result, query::Filter, Collection, DocumentId, Song, Stored};

/// Songs matching `filter`, oldest first
pub async fn find(pool: &SqlitePool, filter: &Filter, limit: usize) -> Result<Vec<Stored<Song>>> {
    documents::find(pool, Collection::Songs, filter, limit).await
}

/// Add a song to the catalog
pub async fn create(pool: &SqlitePool, song: &Song) -> Result<DocumentId> {
    let id = documents::insert(pool, Collection::Songs, song).await?;
    tracing::info!("Song added: {} ({} - {})", id, song.artist, song.title);
    Ok(id)
}
