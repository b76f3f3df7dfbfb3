//! Vibe Music Server Library
//!
//! HTTP API for the song catalog, playlists, radio channels and text commands.
//!
//! This library exposes the router and its components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::{run_command, CommandResponse};
pub use state::AppState;

/// Build the application router with every route and layer attached
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        // Songs
        .route(
            "/songs",
            get(api::songs::list_songs).post(api::songs::create_song),
        )
        // Playlists
        .route(
            "/playlists",
            get(api::playlists::list_playlists).post(api::playlists::create_playlist),
        )
        .route("/playlists/add", post(api::playlists::add_song_to_playlist))
        // Channels
        .route(
            "/channels",
            get(api::channels::list_channels).post(api::channels::create_channel),
        )
        .route("/channels/seed", post(api::channels::seed_channels))
        // Commands
        .route("/ai/command", post(api::commands::handle_command));

    let router = Router::new()
        .route("/", get(api::health::root))
        .route("/test", get(api::health::diagnostics))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()));

    let router = if app_state.config.cors.permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(app_state)
}
