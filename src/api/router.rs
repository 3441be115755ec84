//! HTTP API router.
//!
//! Returns a composable `Router` exposing the conversation store and
//! the chat pipeline as JSON endpoints.

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router.
///
/// Handlers receive the shared `ApiContext` via `State`. CORS stays
/// permissive because the prototype UI is served from a different
/// origin than the API during development.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn build_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/health", get(endpoints::health::check))
        .route(
            "/conversations",
            get(endpoints::conversations::list).post(endpoints::conversations::create),
        )
        .route(
            "/conversations/:id",
            get(endpoints::conversations::get_by_id),
        )
        .route(
            "/conversations/:id/rating",
            put(endpoints::conversations::update_rating),
        )
        .route("/chat", post(endpoints::chat::send))
        .with_state(ctx)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
