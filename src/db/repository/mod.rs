//! Repository layer: entity-scoped database operations.
//!
//! Writes go through the allow-list-driven builders in `db::statement`.
//! Reads map rows into the typed models.

mod appointment;
mod cascade;
mod doctor;
mod patient;

use rusqlite::{Connection, OptionalExtension, Row};

use super::statement::{self, Statement};
use super::DatabaseError;
use crate::models::EntityDef;
use crate::validation::FieldSet;

pub use appointment::*;
pub use cascade::*;
pub use doctor::*;
pub use patient::*;

/// Insert a validated row, returning the id the store assigned.
pub(crate) fn insert_row(
    conn: &Connection,
    def: &EntityDef,
    fields: &FieldSet,
) -> Result<i64, DatabaseError> {
    statement::insert(def, fields).execute(conn)?;
    let id = conn.last_insert_rowid();
    tracing::info!(entity = def.label, id, "Row created");
    Ok(id)
}

/// Apply a partial update. Zero matched rows is `NotFound`.
pub(crate) fn update_row(
    conn: &Connection,
    def: &EntityDef,
    id: i64,
    fields: &FieldSet,
) -> Result<(), DatabaseError> {
    let updated = statement::update(def, fields, id).execute(conn)?;
    if updated == 0 {
        return Err(not_found(def, id));
    }
    tracing::info!(entity = def.label, id, columns = ?fields.columns(), "Row updated");
    Ok(())
}

/// Delete one row by id with no cascade. Zero rows is `NotFound`.
pub(crate) fn delete_row(conn: &Connection, def: &EntityDef, id: i64) -> Result<(), DatabaseError> {
    let removed = statement::delete_by_id(def, id).execute(conn)?;
    if removed == 0 {
        return Err(not_found(def, id));
    }
    tracing::info!(entity = def.label, id, "Row deleted");
    Ok(())
}

fn query_all<T>(
    conn: &Connection,
    stmt: &Statement,
    map: impl FnMut(&Row<'_>) -> rusqlite::Result<T>,
) -> Result<Vec<T>, DatabaseError> {
    let mut prepared = conn.prepare(stmt.sql())?;
    let rows = prepared.query_map(rusqlite::params_from_iter(stmt.params().iter()), map)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

fn query_one<T>(
    conn: &Connection,
    def: &EntityDef,
    id: i64,
    map: impl FnOnce(&Row<'_>) -> rusqlite::Result<T>,
) -> Result<T, DatabaseError> {
    let stmt = statement::select_by_id(def, id);
    conn.query_row(
        stmt.sql(),
        rusqlite::params_from_iter(stmt.params().iter()),
        map,
    )
    .optional()?
    .ok_or_else(|| not_found(def, id))
}

fn not_found(def: &EntityDef, id: i64) -> DatabaseError {
    DatabaseError::NotFound {
        entity: def.label,
        id,
    }
}
