//! Shared types for the API layer.

use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::api::error::ApiError;
use crate::core_state::CoreState;
use crate::models::EntityDef;

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        Self { core }
    }
}

/// `{"message": "..."}` body for updates and deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn updated(def: &EntityDef) -> Self {
        Self {
            message: format!("{} updated", def.label),
        }
    }

    pub fn deleted(def: &EntityDef) -> Self {
        Self {
            message: format!("{} deleted", def.label),
        }
    }
}

/// `{"message": "Patient created", "patient_id": 7}`
#[derive(Debug)]
pub struct CreatedResponse {
    pub message: String,
    pub id_key: &'static str,
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(def: &EntityDef, id: i64) -> Self {
        Self {
            message: format!("{} created", def.label),
            id_key: def.id_column,
            id,
        }
    }
}

impl Serialize for CreatedResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("message", &self.message)?;
        map.serialize_entry(self.id_key, &self.id)?;
        map.end()
    }
}

/// Parse a path identifier. Anything but plain digits is `NotFound`,
/// matching a route that only accepts integer ids.
pub fn parse_id(def: &EntityDef, raw: &str) -> Result<i64, ApiError> {
    let not_found = || ApiError::NotFound(format!("{} not found", def.label));
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found());
    }
    raw.parse::<i64>().map_err(|_| not_found())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{APPOINTMENT, PATIENT};

    #[test]
    fn created_response_uses_entity_id_key() {
        let json = serde_json::to_value(CreatedResponse::new(&APPOINTMENT, 12)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "Appointment created", "appointment_id": 12 })
        );
    }

    #[test]
    fn message_response_names_entity() {
        assert_eq!(MessageResponse::updated(&PATIENT).message, "Patient updated");
        assert_eq!(MessageResponse::deleted(&PATIENT).message, "Patient deleted");
    }

    #[test]
    fn parse_id_accepts_digits_only() {
        assert_eq!(parse_id(&PATIENT, "42").unwrap(), 42);
        for raw in ["", "-1", "+1", "abc", "1.5", "99999999999999999999"] {
            assert!(matches!(parse_id(&PATIENT, raw), Err(ApiError::NotFound(_))), "{raw}");
        }
    }
}
