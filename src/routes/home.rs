use axum::routing::get;
use axum::{Json, Router};

use crate::routes::Ack;
use crate::state::AppState;

pub const GREETING: &str = "Echo API is running ✅ Try /health or /signals";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

pub async fn index() -> &'static str {
    GREETING
}

pub async fn health() -> Json<Ack> {
    Json(Ack::ok())
}
