use chrono::{DateTime, Utc};

/// Author recorded for signals posted without one.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// A row of the `signals` table as read back from storage.
#[derive(Debug, Clone)]
pub struct SignalRow {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub category: String,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated signal ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSignal {
    pub title: String,
    pub body: String,
    pub category: String,
    pub author: Option<String>,
}

impl NewSignal {
    /// The author to store, falling back to [`ANONYMOUS_AUTHOR`].
    pub fn author_or_anonymous(&self) -> &str {
        author_or_anonymous(self.author.as_deref())
    }
}

pub fn author_or_anonymous(author: Option<&str>) -> &str {
    match author {
        Some(name) if !name.is_empty() => name,
        _ => ANONYMOUS_AUTHOR,
    }
}
