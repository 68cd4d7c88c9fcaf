use rusqlite::{Connection, Row};

use super::{delete_row, insert_row, query_all};
use crate::db::statement;
use crate::db::DatabaseError;
use crate::models::{AppointmentDetail, APPOINTMENT};
use crate::validation::FieldSet;

fn detail_from_row(row: &Row<'_>) -> rusqlite::Result<AppointmentDetail> {
    Ok(AppointmentDetail {
        appointment_id: row.get(0)?,
        patient_id: row.get(1)?,
        doctor_id: row.get(2)?,
        date: row.get(3)?,
        time: row.get(4)?,
        patient_name: row.get(5)?,
        doctor_name: row.get(6)?,
    })
}

/// All appointments with patient and doctor names, by date then time.
pub fn list_appointments(conn: &Connection) -> Result<Vec<AppointmentDetail>, DatabaseError> {
    query_all(conn, &statement::appointment_details(None), detail_from_row)
}

/// Appointments on one `YYYY-MM-DD` date.
pub fn list_appointments_on(
    conn: &Connection,
    date: &str,
) -> Result<Vec<AppointmentDetail>, DatabaseError> {
    query_all(conn, &statement::appointment_details(Some(date)), detail_from_row)
}

/// Book an appointment. The store rejects unknown patient or doctor ids.
pub fn insert_appointment(conn: &Connection, fields: &FieldSet) -> Result<i64, DatabaseError> {
    insert_row(conn, &APPOINTMENT, fields)
}

pub fn delete_appointment(conn: &Connection, appointment_id: i64) -> Result<(), DatabaseError> {
    delete_row(conn, &APPOINTMENT, appointment_id)
}
