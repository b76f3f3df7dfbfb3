/// Core domain types for Vibe Music
mod channel;
mod document;
mod ids;
mod playlist;
mod song;

pub use channel::{default_channels, Channel, CreateChannel};
pub use document::{Collection, Lookup, Stored};
pub use ids::DocumentId;
pub use playlist::{AddSongToPlaylist, CreatePlaylist, Playlist};
pub use song::{CreateSong, Song};
