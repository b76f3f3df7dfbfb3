/// Collections and identifier-normalized documents
use crate::types::DocumentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical grouping of same-kind documents in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Songs,
    Playlists,
    Channels,
}

impl Collection {
    /// All collections, in the order diagnostics report them
    pub const ALL: [Collection; 3] = [Self::Channels, Self::Playlists, Self::Songs];

    /// Name of the collection in the store
    pub fn name(&self) -> &'static str {
        match self {
            Self::Songs => "songs",
            Self::Playlists => "playlists",
            Self::Channels => "channels",
        }
    }

    /// Human-readable entity name for error messages
    pub fn entity(&self) -> &'static str {
        match self {
            Self::Songs => "Song",
            Self::Playlists => "Playlist",
            Self::Channels => "Channel",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A persisted record with its identifier rendered as a string `id` field.
///
/// The record's own fields are flattened next to `id`, so a stored song
/// serializes as `{"id": "...", "title": "...", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stored<T> {
    pub id: DocumentId,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Stored<T> {
    pub fn new(id: DocumentId, record: T) -> Self {
        Self { id, record }
    }
}

/// Outcome of the two-stage identifier lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Identifier was in primary form and matched a document
    ByPrimary(DocumentId),
    /// Identifier was not in primary form and matched the alternate field
    ByFallback(DocumentId),
    /// Nothing matched
    NotFound,
}

impl Lookup {
    /// The located document, if any
    pub fn id(&self) -> Option<&DocumentId> {
        match self {
            Self::ByPrimary(id) | Self::ByFallback(id) => Some(id),
            Self::NotFound => None,
        }
    }
}
