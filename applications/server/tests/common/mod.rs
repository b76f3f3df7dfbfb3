//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;
use vibe_server::{create_router, state::AppState, ServerConfig};
use vibe_storage::SqliteDocumentStore;

/// Router backed by a real `SQLite` file in a temp dir
pub struct TestApp {
    pub router: Router,
    pub store: SqliteDocumentStore,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}", temp_dir.path().join("vibe.db").display());

        let mut config = ServerConfig::default();
        config.storage.database_url = db_url.clone();

        let store = SqliteDocumentStore::connect(&db_url, 5).await.unwrap();
        let app_state = AppState::new(Arc::new(store.clone()), Arc::new(config));

        Self {
            router: create_router(app_state),
            store,
            _temp_dir: temp_dir,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    /// Insert a song through the API and return its id
    pub async fn add_song(&self, title: &str, artist: &str, genre: Option<&str>) -> String {
        let (status, body) = self
            .post(
                "/api/songs",
                serde_json::json!({ "title": title, "artist": artist, "genre": genre }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn add_channel(&self, name: &str, genre: &str) -> String {
        let (status, body) = self
            .post(
                "/api/channels",
                serde_json::json!({
                    "name": name,
                    "stream_url": format!("https://streams.example.com/{}", genre),
                    "genre": genre,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["id"].as_str().unwrap().to_string()
    }
}

pub fn item_field<'a>(body: &'a Value, field: &str) -> Vec<&'a str> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item[field].as_str().unwrap())
        .collect()
}
