//! Document store gateway trait

use crate::error::Result;
use crate::query::Filter;
use crate::types::{Channel, Collection, DocumentId, Lookup, Playlist, Song, Stored};
use async_trait::async_trait;

/// Result of a one-time channel seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The collection was empty and the defaults were inserted
    Seeded(usize),
    /// The collection already held documents; nothing was written
    AlreadySeeded,
}

/// Filtered reads and inserts against the songs, playlists and channels
/// collections.
///
/// Every returned document carries its identifier as a [`DocumentId`], never
/// in the store's internal representation. A `limit` of `0` means no limit.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    // ========================================================================
    // Songs
    // ========================================================================

    /// Songs matching `filter`, in insertion order
    async fn find_songs(&self, filter: &Filter, limit: usize) -> Result<Vec<Stored<Song>>>;

    /// Insert a song and return its new identifier
    async fn insert_song(&self, song: Song) -> Result<DocumentId>;

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Playlists matching `filter`, in insertion order
    async fn find_playlists(&self, filter: &Filter, limit: usize)
        -> Result<Vec<Stored<Playlist>>>;

    /// Insert a playlist and return its new identifier
    async fn insert_playlist(&self, playlist: Playlist) -> Result<DocumentId>;

    /// Locate a playlist by primary identifier, falling back to its
    /// `external_id` when `raw_id` is not in primary form
    async fn locate_playlist(&self, raw_id: &str) -> Result<Lookup>;

    /// Add `song_id` to the playlist's song set.
    ///
    /// Returns `false` when the id was already present. Implementations must
    /// make the membership check and the write a single atomic step.
    async fn add_song_to_playlist(&self, playlist_id: &DocumentId, song_id: &str)
        -> Result<bool>;

    // ========================================================================
    // Channels
    // ========================================================================

    /// Channels matching `filter`, in insertion order
    async fn find_channels(&self, filter: &Filter, limit: usize) -> Result<Vec<Stored<Channel>>>;

    /// Insert a channel and return its new identifier
    async fn insert_channel(&self, channel: Channel) -> Result<DocumentId>;

    /// Insert `defaults` only if the channel collection is empty
    async fn seed_channels(&self, defaults: Vec<Channel>) -> Result<SeedOutcome>;

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Number of documents in a collection
    async fn count(&self, collection: Collection) -> Result<u64>;

    /// Names of the collections present in the store
    async fn collection_names(&self) -> Result<Vec<String>>;
}
