pub mod api;
pub mod middleware;
pub mod models;
pub mod public;

use std::sync::Arc;

use axum::{Router, middleware as axum_middleware, routing::get};

use crate::application::documents::DocumentService;

/// Shared state for every route.
#[derive(Clone)]
pub struct HttpState {
    pub documents: Arc<DocumentService>,
    pub admin_secret: Arc<str>,
}

/// Full router: public read endpoints plus the authenticated admin API.
pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/wp-json/wp/v2/posts", get(public::list_posts))
        .route("/wp-json/wp/v2/settings", get(public::get_settings))
        .route("/healthz", get(public::health))
        .merge(api::build_api_router(state.clone()))
        .layer(axum_middleware::from_fn(middleware::log_responses))
        .with_state(state)
}
