//! Table descriptors for the three clinic entities.
//!
//! Each `EntityDef` carries the allow-list of writable columns. Dynamic SQL
//! only ever names columns taken from these static lists.

/// Static description of one table.
#[derive(Debug)]
pub struct EntityDef {
    /// Human label used in response messages ("Patient created").
    pub label: &'static str,
    pub table: &'static str,
    pub id_column: &'static str,
    /// Writable columns, in insert order.
    pub fields: &'static [&'static str],
    /// Subset of `fields` that must be non-empty on create.
    pub required: &'static [&'static str],
    /// `ORDER BY` clause for list queries.
    pub order_by: &'static str,
    /// Column of `Appointment` that references this table, if any.
    pub appointment_fk: Option<&'static str>,
}

impl EntityDef {
    /// Look up an allow-listed column by name, returning the static name.
    pub fn column(&self, name: &str) -> Option<&'static str> {
        self.fields.iter().copied().find(|f| *f == name)
    }
}

pub const PATIENT: EntityDef = EntityDef {
    label: "Patient",
    table: "Patient",
    id_column: "patient_id",
    fields: &["name", "dob", "gender", "phone", "address"],
    required: &["name", "dob", "gender", "phone", "address"],
    order_by: "name",
    appointment_fk: Some("patient_id"),
};

pub const DOCTOR: EntityDef = EntityDef {
    label: "Doctor",
    table: "Doctor",
    id_column: "doctor_id",
    fields: &["name", "phone", "email", "specialization"],
    required: &["name", "phone", "email", "specialization"],
    order_by: "name",
    appointment_fk: Some("doctor_id"),
};

pub const APPOINTMENT: EntityDef = EntityDef {
    label: "Appointment",
    table: "Appointment",
    id_column: "appointment_id",
    fields: &["patient_id", "doctor_id", "date", "time"],
    required: &["patient_id", "doctor_id", "date", "time"],
    order_by: "date, time",
    appointment_fk: None,
};
