/// API route modules
pub mod channels;
pub mod commands;
pub mod health;
pub mod playlists;
pub mod songs;

use crate::error::ServerError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Serialize};
use vibe_core::{query::DEFAULT_LIMIT, DocumentId, Stored};

/// Query-string extractor that rejects with a `{"detail": ...}` body
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(params)| Self(params))
            .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))
    }
}

/// Envelope for list endpoints
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<Stored<T>>,
}

/// Body returned after inserting a document
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DocumentId,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}
