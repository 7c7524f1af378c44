pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{Router, middleware as axum_middleware, routing::post};

use super::HttpState;

/// Admin write surface: login check plus the full-document save, the latter
/// gated by the shared admin secret.
pub fn build_api_router(state: HttpState) -> Router<HttpState> {
    let auth_state = state.clone();

    Router::new()
        .route("/api/wp-login", post(handlers::login))
        .route(
            "/api/wp-save",
            post(handlers::save).layer(axum_middleware::from_fn_with_state(
                auth_state,
                middleware::require_admin_secret,
            )),
        )
}
