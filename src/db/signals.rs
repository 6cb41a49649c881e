// Signal storage - the only place SQL for signals lives
use async_trait::async_trait;
use rusqlite::params;
use thiserror::Error;

use crate::db::models::{NewSignal, SignalRow};
use crate::state::DbPool;

/// Maximum number of rows returned by a listing.
pub const LIST_LIMIT: u32 = 200;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("SQL error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Repository trait - every signal read and write goes through here
#[async_trait]
pub trait SignalRepository: Send + Sync {
    /// Most recent signals first, at most [`LIST_LIMIT`] of them
    async fn list_recent(&self) -> Result<Vec<SignalRow>, StorageError>;

    /// Append one signal; id and timestamp are assigned by storage
    async fn insert(&self, signal: &NewSignal) -> Result<(), StorageError>;
}

/// SQLite implementation
pub struct SqliteSignalRepository {
    pool: DbPool,
}

impl SqliteSignalRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SignalRepository for SqliteSignalRepository {
    async fn list_recent(&self) -> Result<Vec<SignalRow>, StorageError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || query_recent(&pool, LIST_LIMIT)).await?
    }

    async fn insert(&self, signal: &NewSignal) -> Result<(), StorageError> {
        let pool = self.pool.clone();
        let signal = signal.clone();
        tokio::task::spawn_blocking(move || insert_signal(&pool, &signal)).await?
    }
}

fn query_recent(pool: &DbPool, limit: u32) -> Result<Vec<SignalRow>, StorageError> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, title, body, category, author, created_at
         FROM signals ORDER BY id DESC LIMIT ?1",
    )?;

    let rows = stmt
        .query_map(params![limit], |row| {
            Ok(SignalRow {
                id: row.get(0)?,
                title: row.get(1)?,
                body: row.get(2)?,
                category: row.get(3)?,
                author: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn insert_signal(pool: &DbPool, signal: &NewSignal) -> Result<(), StorageError> {
    let conn = pool.get()?;
    conn.execute(
        "INSERT INTO signals (title, body, category, author) VALUES (?1, ?2, ?3, ?4)",
        params![
            signal.title,
            signal.body,
            signal.category,
            signal.author_or_anonymous()
        ],
    )?;
    Ok(())
}
