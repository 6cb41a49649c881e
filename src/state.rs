use std::sync::Arc;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::db::signals::{SignalRepository, SqliteSignalRepository};

pub type DbPool = Pool<SqliteConnectionManager>;

#[derive(Clone)]
pub struct AppState {
    pub signals: Arc<dyn SignalRepository>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            signals: Arc::new(SqliteSignalRepository::new(pool)),
        }
    }
}
