/// Songs API routes
use crate::{
    api::{default_limit, CreatedResponse, ItemsResponse, QueryParams},
    error::Result,
    state::AppState,
};
use axum::{
    extract::State,
    Json,
};
use serde::Deserialize;
use vibe_core::{query::SONG_SEARCH, CatalogQuery, CreateSong, Song};

#[derive(Debug, Deserialize)]
pub struct SongSearchParams {
    pub query: Option<String>,
    pub genre: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl From<SongSearchParams> for CatalogQuery {
    fn from(params: SongSearchParams) -> Self {
        CatalogQuery::new()
            .with_text(params.query)
            .with_genre(params.genre)
            .with_limit(params.limit)
    }
}

/// GET /api/songs
/// Search songs by title/artist substring and exact genre
pub async fn list_songs(
    State(app_state): State<AppState>,
    QueryParams(params): QueryParams<SongSearchParams>,
) -> Result<Json<ItemsResponse<Song>>> {
    let query = CatalogQuery::from(params);
    let items = app_state
        .store
        .find_songs(&query.filter(SONG_SEARCH), query.limit())
        .await?;
    Ok(Json(ItemsResponse { items }))
}

/// POST /api/songs
pub async fn create_song(
    State(app_state): State<AppState>,
    Json(req): Json<CreateSong>,
) -> Result<Json<CreatedResponse>> {
    let id = app_state.store.insert_song(Song::from(req)).await?;
    Ok(Json(CreatedResponse {
        id,
        message: "Song added",
    }))
}
