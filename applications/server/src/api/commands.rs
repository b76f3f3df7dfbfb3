/// Text command route
use crate::{
    error::Result,
    services::{run_command, CommandResponse},
    state::AppState,
};
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    #[serde(default)]
    pub transcript: String,
}

/// POST /api/ai/command
/// Interpret a transcript such as "play channel jazz" and return matches
pub async fn handle_command(
    State(app_state): State<AppState>,
    Json(req): Json<CommandRequest>,
) -> Result<Json<CommandResponse>> {
    let response = run_command(app_state.store.as_ref(), &req.transcript).await?;
    Ok(Json(response))
}
