use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extractors::JsonBody;
use crate::identity::AnonymousIdentity;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AnonymousLoginRequest {
    pub secret: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/auth/anonymous", post(anonymous))
}

/// POST /auth/anonymous
/// Issues a display identity for the caller's secret. Nothing is persisted.
pub async fn anonymous(
    JsonBody(req): JsonBody<AnonymousLoginRequest>,
) -> AppResult<Json<AnonymousIdentity>> {
    let secret = req
        .secret
        .filter(|s| !s.is_empty())
        .ok_or(AppError::SecretRequired)?;

    Ok(Json(AnonymousIdentity::from_secret(&secret)))
}
