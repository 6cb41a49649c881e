use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::db::models::NewSignal;
use crate::error::{AppError, AppResult};
use crate::extractors::JsonBody;
use crate::routes::Ack;
use crate::shaper::{shape, ShapedSignal};
use crate::state::AppState;

// -- Request types --

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSignalRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub author_id: Option<String>,
}

impl CreateSignalRequest {
    /// Presence check only: the three content fields must be non-empty.
    /// Values are otherwise stored exactly as sent.
    pub fn validate(self) -> AppResult<NewSignal> {
        match (
            non_empty(self.title),
            non_empty(self.body),
            non_empty(self.category),
        ) {
            (Some(title), Some(body), Some(category)) => Ok(NewSignal {
                title,
                body,
                category,
                author: self.author_id,
            }),
            _ => Err(AppError::MissingFields),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// -- Router --

pub fn router() -> Router<AppState> {
    Router::new().route("/signals", get(list_signals).post(create_signal))
}

// -- Handlers --

/// GET /signals
pub async fn list_signals(State(state): State<AppState>) -> AppResult<Json<Vec<ShapedSignal>>> {
    let rows = state.signals.list_recent().await?;
    Ok(Json(rows.into_iter().map(shape).collect()))
}

/// POST /signals
pub async fn create_signal(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateSignalRequest>,
) -> AppResult<Json<Ack>> {
    let signal = req.validate()?;

    state.signals.insert(&signal).await?;
    tracing::info!(category = %signal.category, "Signal created");

    Ok(Json(Ack::ok()))
}
