use serde::{Deserialize, Serialize};

/// Appointment row joined with the names of its patient and doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDetail {
    pub appointment_id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`, as stored.
    pub time: String,
    pub patient_name: String,
    pub doctor_name: String,
}
