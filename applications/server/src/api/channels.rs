/// Channels API routes
use crate::{
    api::{default_limit, CreatedResponse, ItemsResponse, MessageResponse, QueryParams},
    error::Result,
    state::AppState,
};
use axum::{
    extract::State,
    Json,
};
use serde::Deserialize;
use vibe_core::{
    default_channels, query::CHANNEL_SEARCH, CatalogQuery, Channel, CreateChannel, SeedOutcome,
};

#[derive(Debug, Deserialize)]
pub struct ChannelListParams {
    pub genre: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// GET /api/channels
/// List channels, optionally restricted to one genre (case-insensitive)
pub async fn list_channels(
    State(app_state): State<AppState>,
    QueryParams(params): QueryParams<ChannelListParams>,
) -> Result<Json<ItemsResponse<Channel>>> {
    let query = CatalogQuery::new()
        .with_genre(params.genre)
        .with_limit(params.limit);
    let items = app_state
        .store
        .find_channels(&query.filter(CHANNEL_SEARCH), query.limit())
        .await?;
    Ok(Json(ItemsResponse { items }))
}

/// POST /api/channels
pub async fn create_channel(
    State(app_state): State<AppState>,
    Json(req): Json<CreateChannel>,
) -> Result<Json<CreatedResponse>> {
    let id = app_state.store.insert_channel(Channel::from(req)).await?;
    Ok(Json(CreatedResponse {
        id,
        message: "Channel added",
    }))
}

/// POST /api/channels/seed
/// Insert the default channels when the collection is empty
pub async fn seed_channels(State(app_state): State<AppState>) -> Result<Json<MessageResponse>> {
    let message = match app_state.store.seed_channels(default_channels()).await? {
        SeedOutcome::Seeded(_) => "Seeded default channels",
        SeedOutcome::AlreadySeeded => "Channels already seeded",
    };
    Ok(Json(MessageResponse { message }))
}
