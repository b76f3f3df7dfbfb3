/// Liveness and diagnostics routes
use crate::{api::MessageResponse, state::AppState};
use axum::{extract::State, Json};
use serde::Serialize;
use vibe_core::{Collection, DocumentStore};

const ERROR_DETAIL_LEN: usize = 50;

#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// GET / - Liveness message
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Vibe Music API running",
    })
}

/// GET /test - Store connectivity report
///
/// Always answers 200; store failures are folded into the body.
pub async fn diagnostics(State(app_state): State<AppState>) -> Json<DiagnosticsResponse> {
    let storage = &app_state.config.storage;
    let mut report = DiagnosticsResponse {
        backend: "running",
        database: "not connected".to_string(),
        database_url: if storage.database_url.trim().is_empty() {
            "not set"
        } else {
            "set"
        },
        database_name: storage.database_name(),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match probe(app_state.store.as_ref()).await {
        Ok(collections) => {
            report.database = "connected".to_string();
            report.connection_status = "Connected".to_string();
            report.collections = collections;
        }
        Err(e) => {
            tracing::warn!("Diagnostics probe failed: {}", e);
            report.database = format!("error: {}", truncate(&e.to_string(), ERROR_DETAIL_LEN));
        }
    }

    Json(report)
}

async fn probe(store: &dyn DocumentStore) -> vibe_core::Result<Vec<String>> {
    store.count(Collection::Channels).await?;
    store.collection_names().await
}

fn truncate(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("short", 50), "short");
        assert_eq!(truncate("ééééé", 3), "ééé");
        assert_eq!(truncate(&"x".repeat(80), ERROR_DETAIL_LEN).len(), 50);
    }
}
