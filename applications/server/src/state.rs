/// Shared application state
use crate::config::ServerConfig;
use std::sync::Arc;
use vibe_core::DocumentStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, config: Arc<ServerConfig>) -> Self {
        Self { store, config }
    }
}
