//! Unauthenticated read endpoints.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use marquee_api_types::{MovieRecord, SettingsDocument};
use serde::Deserialize;

use super::HttpState;
use super::models;
use crate::application::catalog;

#[derive(Debug, Deserialize, Default)]
pub struct PostsQuery {
    /// Case-insensitive substring match on title or genre.
    pub search: Option<String>,
}

/// `GET /wp-json/wp/v2/posts`: published (active) entries only, optionally
/// filtered by a search query.
pub async fn list_posts(
    State(state): State<HttpState>,
    Query(query): Query<PostsQuery>,
) -> Json<Vec<MovieRecord>> {
    let docs = state.documents.snapshot().await;
    let visible = match query.search.as_deref() {
        Some(needle) => catalog::search(&docs.movies, needle),
        None => catalog::active_movies(&docs.movies),
    };
    Json(visible.into_iter().map(MovieRecord::from).collect())
}

/// `GET /wp-json/wp/v2/settings`: the merged settings document.
pub async fn get_settings(State(state): State<HttpState>) -> Json<SettingsDocument> {
    let docs = state.documents.snapshot().await;
    Json(models::settings_document(&docs))
}

pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}
