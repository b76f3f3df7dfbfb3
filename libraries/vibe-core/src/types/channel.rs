/// FM/radio channel domain types
use serde::{Deserialize, Serialize};

/// Channel document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    /// What this channel plays
    #[serde(default)]
    pub description: Option<String>,
    /// Streaming URL (mp3/aac/m3u8)
    pub stream_url: String,
    #[serde(default)]
    pub genre: Option<String>,
}

impl Channel {
    pub fn new(name: impl Into<String>, stream_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            stream_url: stream_url.into(),
            genre: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }
}

/// Request body for adding a channel
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChannel {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub stream_url: String,
    #[serde(default)]
    pub genre: Option<String>,
}

impl From<CreateChannel> for Channel {
    fn from(req: CreateChannel) -> Self {
        Self {
            name: req.name,
            description: req.description,
            stream_url: req.stream_url,
            genre: req.genre,
        }
    }
}

/// The channels inserted by a one-time seed of an empty collection
pub fn default_channels() -> Vec<Channel> {
    vec![
        Channel::new(
            "Lofi Beats FM",
            "https://streams.ilovemusic.de/iloveradio9.mp3",
        )
        .with_description("Chill lofi for focus")
        .with_genre("lofi"),
        Channel::new("Classic Rock FM", "https://stream.revma.ihrhls.com/zc1469")
            .with_description("Rock anthems 24/7")
            .with_genre("rock"),
        Channel::new(
            "Jazz Lounge",
            "https://us4.internet-radio.com/proxy/club107?mp=/stream",
        )
        .with_description("Smooth jazz and lounge")
        .with_genre("jazz"),
    ]
}
