pub mod auth;
pub mod home;
pub mod signals;
pub mod votes;

use axum::Router;
use serde::Serialize;

use crate::state::AppState;

/// `{"ok": true}` acknowledgement shared by write and probe endpoints.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(home::router())
        .merge(signals::router())
        .merge(auth::router())
        .merge(votes::router())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use crate::db;
    use crate::db::models::{NewSignal, SignalRow};
    use crate::db::signals::{SignalRepository, StorageError};
    use crate::state::{AppState, DbPool};

    /// Router backed by a fresh migrated database in a temp dir.
    pub fn test_app() -> (tempfile::TempDir, DbPool, Router) {
        let tmp = tempfile::tempdir().unwrap();
        let pool = db::create_pool(&tmp.path().join("test.db"), 2).unwrap();
        db::run_migrations(&pool).unwrap();
        let app = crate::build_app(AppState::new(pool.clone()));
        (tmp, pool, app)
    }

    /// Repository whose every call fails like a dropped database.
    pub struct FailingRepository;

    #[async_trait]
    impl SignalRepository for FailingRepository {
        async fn list_recent(&self) -> Result<Vec<SignalRow>, StorageError> {
            Err(StorageError::Sql(rusqlite::Error::InvalidQuery))
        }

        async fn insert(&self, _signal: &NewSignal) -> Result<(), StorageError> {
            Err(StorageError::Sql(rusqlite::Error::InvalidQuery))
        }
    }

    pub fn failing_app() -> Router {
        crate::build_app(AppState {
            signals: Arc::new(FailingRepository),
        })
    }

    pub fn count_signals(pool: &DbPool) -> i64 {
        pool.get()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM signals", [], |row| row.get(0))
            .unwrap()
    }

    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, bytes) = send(app, request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    pub async fn post_json(
        app: &Router,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        post_raw(app, uri, "application/json", body.to_string()).await
    }

    /// POST with no body and no content type.
    pub async fn post_empty(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, bytes) = send(app, request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    pub async fn post_raw(
        app: &Router,
        uri: &str,
        content_type: &str,
        body: impl Into<Body>,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(body.into())
            .unwrap();
        let (status, bytes) = send(app, request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}
