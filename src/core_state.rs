//! Shared application state for the HTTP handlers.
//!
//! Holds only immutable configuration. Each request opens its own SQLite
//! connection through [`CoreState::open_db`]; the connection is closed when
//! the handler drops it, on success and error paths alike.

use std::path::Path;

use rusqlite::Connection;

use crate::config::AppConfig;
use crate::db::{self, DatabaseError};

pub struct CoreState {
    pub config: AppConfig,
}

impl CoreState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Create the database file's directory and the clinic schema.
    ///
    /// Run once at startup, before the server accepts requests.
    pub fn prepare_database(&self) -> Result<(), DatabaseError> {
        if let Some(parent) = self.config.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| DatabaseError::SchemaFailed {
                    reason: format!("cannot create {}: {e}", parent.display()),
                })?;
            }
        }
        db::open_database(&self.config.db_path)?;
        tracing::info!(path = %self.config.db_path.display(), "Database ready");
        Ok(())
    }

    /// Open a database connection for one request.
    pub fn open_db(&self) -> Result<Connection, DatabaseError> {
        db::connect(&self.config.db_path)
    }

    pub fn db_path(&self) -> &Path {
        &self.config.db_path
    }
}
