use rusqlite::{Connection, Row};

use super::{delete_parent_cascade, insert_row, query_all, query_one, update_row};
use crate::db::statement;
use crate::db::DatabaseError;
use crate::models::{Doctor, DOCTOR};
use crate::validation::FieldSet;

fn doctor_from_row(row: &Row<'_>) -> rusqlite::Result<Doctor> {
    Ok(Doctor {
        doctor_id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        email: row.get(3)?,
        specialization: row.get(4)?,
    })
}

pub fn list_doctors(conn: &Connection) -> Result<Vec<Doctor>, DatabaseError> {
    query_all(conn, &statement::select_all(&DOCTOR), doctor_from_row)
}

pub fn get_doctor(conn: &Connection, doctor_id: i64) -> Result<Doctor, DatabaseError> {
    query_one(conn, &DOCTOR, doctor_id, doctor_from_row)
}

pub fn insert_doctor(conn: &Connection, fields: &FieldSet) -> Result<i64, DatabaseError> {
    insert_row(conn, &DOCTOR, fields)
}

pub fn update_doctor(
    conn: &Connection,
    doctor_id: i64,
    fields: &FieldSet,
) -> Result<(), DatabaseError> {
    update_row(conn, &DOCTOR, doctor_id, fields)
}

/// Delete a doctor and every appointment booked with them.
pub fn delete_doctor(conn: &Connection, doctor_id: i64) -> Result<(), DatabaseError> {
    delete_parent_cascade(conn, &DOCTOR, doctor_id).map(|_| ())
}
