pub mod repository;
pub mod sqlite;
pub mod statement;

pub use repository::*;
pub use sqlite::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Any failure reported by SQLite.
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Schema initialization failed: {reason}")]
    SchemaFailed { reason: String },
}
