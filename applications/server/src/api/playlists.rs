/// Playlists API routes
use crate::{
    api::{default_limit, CreatedResponse, ItemsResponse, QueryParams},
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::State,
    Json,
};
use serde::{Deserialize, Serialize};
use vibe_core::{AddSongToPlaylist, CreatePlaylist, Filter, Lookup, Playlist};

#[derive(Debug, Deserialize)]
pub struct PlaylistListParams {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct AddSongResponse {
    pub ok: bool,
}

/// GET /api/playlists
pub async fn list_playlists(
    State(app_state): State<AppState>,
    QueryParams(params): QueryParams<PlaylistListParams>,
) -> Result<Json<ItemsResponse<Playlist>>> {
    let items = app_state
        .store
        .find_playlists(&Filter::All, params.limit)
        .await?;
    Ok(Json(ItemsResponse { items }))
}

/// POST /api/playlists
/// Create an empty playlist
pub async fn create_playlist(
    State(app_state): State<AppState>,
    Json(req): Json<CreatePlaylist>,
) -> Result<Json<CreatedResponse>> {
    let id = app_state.store.insert_playlist(Playlist::from(req)).await?;
    Ok(Json(CreatedResponse {
        id,
        message: "Playlist created",
    }))
}

/// POST /api/playlists/add
/// Add a song to a playlist; adding a song twice is a no-op
pub async fn add_song_to_playlist(
    State(app_state): State<AppState>,
    Json(req): Json<AddSongToPlaylist>,
) -> Result<Json<AddSongResponse>> {
    let playlist_id = match app_state.store.locate_playlist(&req.playlist_id).await? {
        Lookup::ByPrimary(id) | Lookup::ByFallback(id) => id,
        Lookup::NotFound => {
            return Err(ServerError::NotFound(format!(
                "Playlist not found: {}",
                req.playlist_id
            )))
        }
    };

    let added = app_state
        .store
        .add_song_to_playlist(&playlist_id, &req.song_id)
        .await?;
    if !added {
        tracing::debug!("Song {} already in playlist {}", req.song_id, playlist_id);
    }

    Ok(Json(AddSongResponse { ok: true }))
}
