use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;

use super::DatabaseError;

const SCHEMA: &str = include_str!("../../resources/schema.sql");

/// How long a connection waits on another writer's lock before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a SQLite connection to the given path and create the schema.
///
/// Called once at startup. Request handlers use [`connect`].
pub fn open_database(path: &Path) -> Result<Connection, DatabaseError> {
    let conn = connect(path)?;
    initialize_schema(&conn)?;
    Ok(conn)
}

/// Open a connection to an existing database for a single request.
///
/// The connection closes when dropped.
pub fn connect(path: &Path) -> Result<Connection, DatabaseError> {
    let conn = Connection::open(path)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (for testing)
pub fn open_memory_database() -> Result<Connection, DatabaseError> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    initialize_schema(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> Result<(), DatabaseError> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    conn.execute_batch(
        "PRAGMA journal_mode=DELETE;
         PRAGMA foreign_keys=ON;",
    )?;
    Ok(())
}

/// Create the clinic tables if they do not exist yet.
pub fn initialize_schema(conn: &Connection) -> Result<(), DatabaseError> {
    tracing::debug!("Applying clinic schema");
    conn.execute_batch(SCHEMA)
        .map_err(|e| DatabaseError::SchemaFailed {
            reason: e.to_string(),
        })
}

/// Count tables in the database (for verification)
pub fn count_tables(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(count)
}
