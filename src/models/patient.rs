use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: i64,
    pub name: String,
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: String,
    pub gender: String,
    pub phone: String,
    pub address: String,
}
