//! Application-level cascade delete for Patient and Doctor.
//!
//! The schema carries no `ON DELETE CASCADE`; dependent appointments are
//! removed here before the parent row.

use rusqlite::Connection;

use super::not_found;
use crate::db::statement;
use crate::db::DatabaseError;
use crate::models::EntityDef;

/// Delete `parent` row `id` after removing the appointments that reference it.
///
/// Both deletes run in one transaction. The dependent delete is committed
/// even when the parent turns out not to exist, in which case `NotFound` is
/// returned. A store error in either step rolls both back.
///
/// Returns the number of appointments removed.
pub fn delete_parent_cascade(
    conn: &Connection,
    parent: &EntityDef,
    id: i64,
) -> Result<usize, DatabaseError> {
    let tx = conn.unchecked_transaction()?;

    let dependents = match statement::delete_dependents(parent, id) {
        Some(stmt) => stmt.execute(&tx)?,
        None => 0,
    };
    let removed = statement::delete_by_id(parent, id).execute(&tx)?;

    tx.commit()?;

    if removed == 0 {
        tracing::debug!(entity = parent.label, id, "Cascade delete: parent not found");
        return Err(not_found(parent, id));
    }

    tracing::info!(
        entity = parent.label,
        id,
        appointments_removed = dependents,
        "Row deleted with dependents"
    );
    Ok(dependents)
}
