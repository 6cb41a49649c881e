use axum::routing::post;
use axum::{Json, Router};

use crate::routes::Ack;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/votes", post(submit_vote))
}

/// POST /votes
/// Votes are not recorded yet. The body is never read, so any payload is
/// accepted.
pub async fn submit_vote() -> Json<Ack> {
    tracing::debug!("Vote received (not persisted)");
    Json(Ack::ok())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::{count_signals, get_json, post_json, post_raw, test_app};

    #[tokio::test]
    async fn any_body_is_acknowledged() {
        let (_tmp, _pool, app) = test_app();

        let (status, body) = post_json(&app, "/votes", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));

        let (status, body) = post_json(&app, "/votes", json!({ "signalId": "1", "dir": 1 })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));

        let (status, body) = post_raw(&app, "/votes", "text/plain", "not json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn votes_change_nothing() {
        let (_tmp, pool, app) = test_app();
        post_json(
            &app,
            "/signals",
            json!({ "title": "t", "body": "b", "category": "c" }),
        )
        .await;
        let (_, before) = get_json(&app, "/signals").await;

        post_json(&app, "/votes", json!({ "signalId": before[0]["id"] })).await;

        let (_, after) = get_json(&app, "/signals").await;
        assert_eq!(before, after);
        assert_eq!(after[0]["upvotes"], json!(0));
        assert_eq!(count_signals(&pool), 1);
    }
}
