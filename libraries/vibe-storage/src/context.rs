use crate::{channels, collections, documents, playlists, songs, StorageError};
use async_trait::async_trait;
use sqlx::SqlitePool;
use vibe_core::{
    error::Result, query::Filter, storage::DocumentStore, Channel, Collection, DocumentId, Lookup,
    Playlist, SeedOutcome, Song, Stored,
};

/// Document store backed by `SQLite`
#[derive(Debug, Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    /// Wrap an existing pool. Its connections must register `REGEXP`, as
    /// [`create_pool`](crate::create_pool) does.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool on `database_url` and bring the schema up to date
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
    ) -> std::result::Result<Self, StorageError> {
        let pool = crate::create_pool(database_url, max_connections)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection. Later operations fail.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    // Songs
    async fn find_songs(&self, filter: &Filter, limit: usize) -> Result<Vec<Stored<Song>>> {
        songs::find(&self.pool, filter, limit).await
    }

    async fn insert_song(&self, song: Song) -> Result<DocumentId> {
        songs::create(&self.pool, &song).await
    }

    // Playlists
    async fn find_playlists(
        &self,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Stored<Playlist>>> {
        playlists::find(&self.pool, filter, limit).await
    }

    async fn insert_playlist(&self, playlist: Playlist) -> Result<DocumentId> {
        playlists::create(&self.pool, &playlist).await
    }

    async fn locate_playlist(&self, raw_id: &str) -> Result<Lookup> {
        playlists::locate(&self.pool, raw_id).await
    }

    async fn add_song_to_playlist(
        &self,
        playlist_id: &DocumentId,
        song_id: &str,
    ) -> Result<bool> {
        playlists::add_song(&self.pool, playlist_id, song_id).await
    }

    // Channels
    async fn find_channels(&self, filter: &Filter, limit: usize) -> Result<Vec<Stored<Channel>>> {
        channels::find(&self.pool, filter, limit).await
    }

    async fn insert_channel(&self, channel: Channel) -> Result<DocumentId> {
        channels::create(&self.pool, &channel).await
    }

    async fn seed_channels(&self, defaults: Vec<Channel>) -> Result<SeedOutcome> {
        channels::seed(&self.pool, &defaults).await
    }

    // Diagnostics
    async fn count(&self, collection: Collection) -> Result<u64> {
        documents::count(&self.pool, collection).await
    }

    async fn collection_names(&self) -> Result<Vec<String>> {
        collections::list_names(&self.pool).await
    }
}
