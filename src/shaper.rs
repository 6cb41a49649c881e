//! Converts storage rows into the shape clients render.
//!
//! Clients treat ids as opaque strings and timestamps as epoch milliseconds.
//! `replies`, `upvotes` and `votedBy` are not backed by any storage yet and
//! are always sent empty.

use serde::Serialize;

use crate::db::models::{author_or_anonymous, SignalRow};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapedSignal {
    pub id: String,
    pub title: String,
    pub body: String,
    pub cat: String,
    pub author: String,
    pub time: i64,
    pub replies: Vec<serde_json::Value>,
    pub upvotes: u32,
    pub voted_by: Vec<String>,
}

pub fn shape(row: SignalRow) -> ShapedSignal {
    let author = author_or_anonymous(row.author.as_deref()).to_string();
    ShapedSignal {
        id: row.id.to_string(),
        title: row.title,
        body: row.body,
        cat: row.category,
        author,
        time: row.created_at.timestamp_millis(),
        replies: Vec::new(),
        upvotes: 0,
        voted_by: Vec::new(),
    }
}
