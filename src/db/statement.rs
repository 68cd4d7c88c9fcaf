//! Parameterized SQL statements for the clinic tables.
//!
//! Table and column names come from the static `EntityDef` descriptors and
//! from `FieldSet`s, whose columns are copied out of the same allow-lists.
//! Every value is a bound parameter; nothing a client sends ends up in the
//! SQL text.

use rusqlite::types::Value as SqlValue;
use rusqlite::{params_from_iter, Connection};

use crate::models::EntityDef;
use crate::validation::FieldSet;

/// SQL text plus its positional parameters (`?1`, `?2`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<SqlValue>,
}

impl Statement {
    fn new(sql: String, params: Vec<SqlValue>) -> Self {
        Self { sql, params }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Run a non-query statement, returning the affected row count.
    pub fn execute(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(&self.sql, params_from_iter(self.params.iter()))
    }
}

fn projection(def: &EntityDef) -> String {
    std::iter::once(def.id_column)
        .chain(def.fields.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `SELECT <id>, <fields> FROM <table> ORDER BY <order>`
pub fn select_all(def: &EntityDef) -> Statement {
    Statement::new(
        format!(
            "SELECT {} FROM {} ORDER BY {}",
            projection(def),
            def.table,
            def.order_by
        ),
        Vec::new(),
    )
}

/// `SELECT <id>, <fields> FROM <table> WHERE <id> = ?1`
pub fn select_by_id(def: &EntityDef, id: i64) -> Statement {
    Statement::new(
        format!(
            "SELECT {} FROM {} WHERE {} = ?1",
            projection(def),
            def.table,
            def.id_column
        ),
        vec![SqlValue::Integer(id)],
    )
}

/// `INSERT INTO <table> (<columns>) VALUES (?1, ...)`
pub fn insert(def: &EntityDef, fields: &FieldSet) -> Statement {
    debug_assert_eq!(fields.table(), def.table);
    Statement::new(
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            def.table,
            fields.columns().join(", "),
            placeholders(fields.len())
        ),
        fields.values().to_vec(),
    )
}

/// `UPDATE <table> SET c1 = ?1, c2 = ?2 WHERE <id> = ?3`
///
/// Parameters are the field values in column order, then `id`.
pub fn update(def: &EntityDef, fields: &FieldSet, id: i64) -> Statement {
    debug_assert_eq!(fields.table(), def.table);
    let assignments = fields
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = ?{}", i + 1))
        .collect::<Vec<_>>()
        .join(", ");

    let mut params = fields.values().to_vec();
    params.push(SqlValue::Integer(id));

    Statement::new(
        format!(
            "UPDATE {} SET {} WHERE {} = ?{}",
            def.table,
            assignments,
            def.id_column,
            params.len()
        ),
        params,
    )
}

/// `DELETE FROM <table> WHERE <id> = ?1`
pub fn delete_by_id(def: &EntityDef, id: i64) -> Statement {
    Statement::new(
        format!("DELETE FROM {} WHERE {} = ?1", def.table, def.id_column),
        vec![SqlValue::Integer(id)],
    )
}

/// `DELETE FROM Appointment WHERE <fk> = ?1`, for a parent with dependents.
pub fn delete_dependents(parent: &EntityDef, id: i64) -> Option<Statement> {
    parent.appointment_fk.map(|fk| {
        Statement::new(
            format!("DELETE FROM Appointment WHERE {fk} = ?1"),
            vec![SqlValue::Integer(id)],
        )
    })
}

const APPOINTMENT_DETAIL_SELECT: &str = "SELECT a.appointment_id,
        a.patient_id,
        a.doctor_id,
        a.date,
        a.time,
        p.name AS patient_name,
        d.name AS doctor_name
 FROM Appointment a
 JOIN Patient p ON a.patient_id = p.patient_id
 JOIN Doctor d ON a.doctor_id = d.doctor_id";

/// Appointments joined with patient and doctor names, by date then time.
///
/// With `on` set, only appointments on that `YYYY-MM-DD` date are returned.
pub fn appointment_details(on: Option<&str>) -> Statement {
    match on {
        Some(date) => Statement::new(
            format!("{APPOINTMENT_DETAIL_SELECT}\n WHERE a.date = ?1\n ORDER BY a.date, a.time"),
            vec![SqlValue::Text(date.to_string())],
        ),
        None => Statement::new(
            format!("{APPOINTMENT_DETAIL_SELECT}\n ORDER BY a.date, a.time"),
            Vec::new(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{APPOINTMENT, DOCTOR, PATIENT};
    use crate::validation::{validate_create, validate_update, Fields};
    use serde_json::json;

    fn fields(value: serde_json::Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn select_all_orders_by_name() {
        let stmt = select_all(&PATIENT);
        assert_eq!(
            stmt.sql(),
            "SELECT patient_id, name, dob, gender, phone, address FROM Patient ORDER BY name"
        );
        assert!(stmt.params().is_empty());
    }

    #[test]
    fn select_all_appointments_orders_by_date_then_time() {
        let stmt = select_all(&APPOINTMENT);
        assert!(stmt.sql().ends_with("ORDER BY date, time"));
    }

    #[test]
    fn insert_uses_fixed_column_list() {
        let set = validate_create(
            &DOCTOR,
            &fields(json!({
                "specialization": "GP",
                "email": "lee@clinic.test",
                "phone": "1",
                "name": "Lee"
            })),
        )
        .unwrap();
        let stmt = insert(&DOCTOR, &set);
        assert_eq!(
            stmt.sql(),
            "INSERT INTO Doctor (name, phone, email, specialization) VALUES (?1, ?2, ?3, ?4)"
        );
        assert_eq!(
            stmt.params(),
            &[
                SqlValue::Text("Lee".into()),
                SqlValue::Text("1".into()),
                SqlValue::Text("lee@clinic.test".into()),
                SqlValue::Text("GP".into()),
            ]
        );
    }

    #[test]
    fn update_builds_set_clause_from_filtered_fields() {
        let set = validate_update(
            &PATIENT,
            &fields(json!({ "address": "2 Rd", "phone": "999", "bogus": "x", "name": null })),
        )
        .unwrap();
        let stmt = update(&PATIENT, &set, 42);
        assert_eq!(
            stmt.sql(),
            "UPDATE Patient SET phone = ?1, address = ?2 WHERE patient_id = ?3"
        );
        assert_eq!(
            stmt.params(),
            &[
                SqlValue::Text("999".into()),
                SqlValue::Text("2 Rd".into()),
                SqlValue::Integer(42),
            ]
        );
    }

    #[test]
    fn update_never_copies_caller_keys_into_sql() {
        let set = validate_update(
            &PATIENT,
            &fields(json!({ "phone": "1", "name = name; DROP TABLE Patient; --": "x" })),
        )
        .unwrap();
        let stmt = update(&PATIENT, &set, 1);
        assert!(!stmt.sql().contains("DROP"));
        assert!(!stmt.sql().contains('\''));
    }

    #[test]
    fn update_keeps_values_out_of_sql_text() {
        let set = validate_update(&PATIENT, &fields(json!({ "name": "Robert'); --" }))).unwrap();
        let stmt = update(&PATIENT, &set, 1);
        assert!(!stmt.sql().contains("Robert"));
        assert_eq!(stmt.params()[0], SqlValue::Text("Robert'); --".into()));
    }

    #[test]
    fn delete_dependents_only_for_parents() {
        let stmt = delete_dependents(&DOCTOR, 7).unwrap();
        assert_eq!(stmt.sql(), "DELETE FROM Appointment WHERE doctor_id = ?1");
        assert_eq!(stmt.params(), &[SqlValue::Integer(7)]);
        assert!(delete_dependents(&APPOINTMENT, 7).is_none());
    }

    #[test]
    fn appointment_details_filters_by_bound_date() {
        let all = appointment_details(None);
        assert!(!all.sql().contains("WHERE"));

        let today = appointment_details(Some("2026-10-16"));
        assert!(today.sql().contains("WHERE a.date = ?1"));
        assert_eq!(today.params(), &[SqlValue::Text("2026-10-16".into())]);
    }
}
