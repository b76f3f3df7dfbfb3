/// Playlist domain types
use serde::{Deserialize, Serialize};

/// Playlist document
///
/// `song_ids` behaves as a set: adding an id that is already present is a
/// no-op. Ids are not checked against the song collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub song_ids: Vec<String>,
    /// Identifier assigned by an outside system, used as the fallback lookup key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            song_ids: Vec::new(),
            external_id: None,
        }
    }

    pub fn contains_song(&self, song_id: &str) -> bool {
        self.song_ids.iter().any(|id| id == song_id)
    }
}

/// Request body for creating a playlist
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylist {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
}

impl From<CreatePlaylist> for Playlist {
    fn from(req: CreatePlaylist) -> Self {
        Self {
            name: req.name,
            description: req.description,
            song_ids: Vec::new(),
            external_id: req.external_id.filter(|id| !id.trim().is_empty()),
        }
    }
}

/// Request body for adding a song to a playlist
#[derive(Debug, Clone, Deserialize)]
pub struct AddSongToPlaylist {
    pub playlist_id: String,
    pub song_id: String,
}
