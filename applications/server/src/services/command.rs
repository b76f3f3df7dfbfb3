/// Text command interpreter - classifies a transcript and runs its catalog search
use serde::Serialize;
use vibe_core::{
    error::Result, Action, CatalogSearch, Channel, DocumentStore, Intent, Song, Stored,
};

/// Search results attached to a command response
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CommandItems {
    Channels(Vec<Stored<Channel>>),
    Songs(Vec<Stored<Song>>),
}

impl CommandItems {
    pub fn len(&self) -> usize {
        match self {
            Self::Channels(items) => items.len(),
            Self::Songs(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandResponse {
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<CommandItems>,
    pub message: String,
}

/// Classify `transcript` and run the search it implies.
///
/// Empty and unrecognized transcripts return guidance without touching the
/// store.
pub async fn run_command(store: &dyn DocumentStore, transcript: &str) -> Result<CommandResponse> {
    let intent = Intent::classify(transcript);
    tracing::debug!("Classified transcript {:?} as {:?}", transcript, intent);

    let Some(search) = intent.search() else {
        return Ok(CommandResponse {
            action: intent.action(),
            items: None,
            message: intent.guidance().unwrap_or_default().to_string(),
        });
    };

    let filter = search.filter();
    let limit = search.query().limit();
    let (items, message) = match search {
        CatalogSearch::Channels(_) => {
            let channels = store.find_channels(&filter, limit).await?;
            let message = format!("Found {} channel(s)", channels.len());
            (CommandItems::Channels(channels), message)
        }
        CatalogSearch::Songs(_) => {
            let songs = store.find_songs(&filter, limit).await?;
            let message = format!("Found {} song(s)", songs.len());
            (CommandItems::Songs(songs), message)
        }
    };

    Ok(CommandResponse {
        action: intent.action(),
        items: Some(items),
        message,
    })
}
