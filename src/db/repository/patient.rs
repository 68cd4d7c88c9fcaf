use rusqlite::{Connection, Row};

use super::{delete_parent_cascade, insert_row, query_all, query_one, update_row};
use crate::db::statement;
use crate::db::DatabaseError;
use crate::models::{Patient, PATIENT};
use crate::validation::FieldSet;

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        patient_id: row.get(0)?,
        name: row.get(1)?,
        dob: row.get(2)?,
        gender: row.get(3)?,
        phone: row.get(4)?,
        address: row.get(5)?,
    })
}

/// All patients ordered by name.
pub fn list_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    query_all(conn, &statement::select_all(&PATIENT), patient_from_row)
}

pub fn get_patient(conn: &Connection, patient_id: i64) -> Result<Patient, DatabaseError> {
    query_one(conn, &PATIENT, patient_id, patient_from_row)
}

pub fn insert_patient(conn: &Connection, fields: &FieldSet) -> Result<i64, DatabaseError> {
    insert_row(conn, &PATIENT, fields)
}

pub fn update_patient(
    conn: &Connection,
    patient_id: i64,
    fields: &FieldSet,
) -> Result<(), DatabaseError> {
    update_row(conn, &PATIENT, patient_id, fields)
}

/// Delete a patient together with all of their appointments.
pub fn delete_patient(conn: &Connection, patient_id: i64) -> Result<(), DatabaseError> {
    delete_parent_cascade(conn, &PATIENT, patient_id).map(|_| ())
}
