//! Admin API handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use marquee_api_types::{ContentDocument, LoginRequest};
use tracing::info;

use super::error::ApiError;
use crate::infra::http::HttpState;

/// `POST /api/wp-login`: compare the supplied password against the shared
/// secret. A plain accept/reject; no session, no lockout, no retry policy.
pub async fn login(
    State(state): State<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    if payload.password == state.admin_secret.as_ref() {
        StatusCode::OK.into_response()
    } else {
        ApiError::unauthorized().into_response()
    }
}

/// `POST /api/wp-save`: replace the stored state with the supplied document
/// wholesale. Auth is enforced by the middleware on this route; by the time
/// this runs the caller holds the admin secret. Concurrent saves race and
/// the last writer wins, per document.
pub async fn save(
    State(state): State<HttpState>,
    Json(document): Json<ContentDocument>,
) -> Result<impl IntoResponse, ApiError> {
    let ContentDocument { movies, settings } = document;
    let entries = movies.len();

    state
        .documents
        .publish_movies(movies.into_iter().map(Into::into).collect())
        .await
        .map_err(|err| ApiError::store(Some(err.to_string())))?;
    state
        .documents
        .publish_site_config(settings.site.into())
        .await
        .map_err(|err| ApiError::store(Some(err.to_string())))?;
    state
        .documents
        .publish_ad_config(settings.ad_codes.into())
        .await
        .map_err(|err| ApiError::store(Some(err.to_string())))?;
    state
        .documents
        .publish_ads_enabled(settings.ads_enabled)
        .await
        .map_err(|err| ApiError::store(Some(err.to_string())))?;

    info!(target: "marquee::api", entries, "content document saved");
    Ok(StatusCode::OK)
}
