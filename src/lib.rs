// Library exports for Echo
// The binary and the integration tests both build the app from here

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod identity;
pub mod routes;
pub mod shaper;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router with CORS and request tracing applied.
pub fn build_app(state: AppState) -> Router {
    routes::router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
