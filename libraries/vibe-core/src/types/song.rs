/// Song domain types
use serde::{Deserialize, Serialize};

/// Song document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    /// Public URL of the uploaded audio file
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub duration_sec: Option<u32>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl Song {
    /// Create a song with only the required fields set
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: None,
            cover_url: None,
            audio_url: None,
            duration_sec: None,
            genre: None,
        }
    }
}

/// Request body for adding a song to the catalog
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSong {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub cover_url: Option<String>,
    pub audio_url: Option<String>,
    pub duration_sec: Option<u32>,
    pub genre: Option<String>,
}

impl From<CreateSong> for Song {
    fn from(req: CreateSong) -> Self {
        Self {
            title: req.title,
            artist: req.artist,
            album: req.album,
            cover_url: req.cover_url,
            audio_url: req.audio_url,
            duration_sec: req.duration_sec,
            genre: req.genre,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_song_requires_title_and_artist() {
        let missing_artist = serde_json::from_str::<CreateSong>(r#"{"title": "Yellow"}"#);
        assert!(missing_artist.is_err());

        let minimal: CreateSong =
            serde_json::from_str(r#"{"title": "Yellow", "artist": "Coldplay"}"#).unwrap();
        let song = Song::from(minimal);
        assert_eq!(song, Song::new("Yellow", "Coldplay"));
    }

    #[test]
    fn negative_duration_is_rejected() {
        let result = serde_json::from_str::<CreateSong>(
            r#"{"title": "Yellow", "artist": "Coldplay", "duration_sec": -1}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn stored_document_with_missing_optionals_deserializes() {
        let song: Song = serde_json::from_str(r#"{"title": "Clocks", "artist": "Coldplay"}"#)
            .unwrap();
        assert!(song.genre.is_none());
        assert!(song.duration_sec.is_none());
    }
}
