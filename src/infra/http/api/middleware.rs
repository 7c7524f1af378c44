use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::error::ApiError;
use crate::infra::http::HttpState;

/// Gate on the shared admin secret passed as the `Authorization` header
/// value, compared with plain string equality. This mirrors the deployment's
/// single-operator trust model; it is deliberately not a hardened
/// authentication scheme.
pub async fn require_admin_secret(
    State(state): State<HttpState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let supplied = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match supplied {
        Some(secret) if secret == state.admin_secret.as_ref() => next.run(request).await,
        _ => ApiError::unauthorized().into_response(),
    }
}
