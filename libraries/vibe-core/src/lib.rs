//! Vibe Music Core
//!
//! Platform-agnostic domain types, catalog queries, and command intents for the
//! Vibe Music API.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `Playlist`, `Channel` and their create requests
//! - **Catalog Queries**: `CatalogQuery` and the `Filter` predicates it builds
//! - **Command Intents**: keyword classification of free-text transcripts
//! - **Storage Trait**: `DocumentStore`, the gateway every backend implements
//! - **Error Handling**: Unified `VibeError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use vibe_core::intent::{Action, Intent};
//! use vibe_core::Collection;
//!
//! let intent = Intent::classify("Find song by Coldplay");
//! assert_eq!(intent.action(), Action::PlaySong);
//!
//! let search = intent.search().unwrap();
//! assert_eq!(search.collection(), Collection::Songs);
//! assert_eq!(search.query().text(), Some("by coldplay"));
//! let _filter = search.filter();
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod intent;
pub mod query;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, VibeError};
pub use intent::{Action, CatalogSearch, Intent};
pub use query::{CatalogQuery, Field, Filter, SearchFields};
pub use storage::{DocumentStore, SeedOutcome};

pub use types::{
    default_channels, AddSongToPlaylist, Channel, Collection, CreateChannel, CreatePlaylist,
    CreateSong, DocumentId, Lookup, Playlist, Song, Stored,
};
