//! Appointment endpoints.
//!
//! - `GET /api/appointments`: all appointments with patient and doctor names
//! - `GET /api/appointments/today`: the same, limited to today's date
//! - `POST /api/appointments`: book (patient_id, doctor_id, date, time)
//! - `DELETE /api/appointments/:id`: cancel one appointment

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{parse_id, ApiContext, CreatedResponse, MessageResponse};
use crate::db;
use crate::models::{AppointmentDetail, APPOINTMENT};
use crate::validation::{parse_body, validate_create};

pub async fn list(
    State(ctx): State<ApiContext>,
) -> Result<Json<Vec<AppointmentDetail>>, ApiError> {
    let conn = ctx.core.open_db()?;
    Ok(Json(db::list_appointments(&conn)?))
}

/// `GET /api/appointments/today`: uses the server's local date.
pub async fn today(
    State(ctx): State<ApiContext>,
) -> Result<Json<Vec<AppointmentDetail>>, ApiError> {
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let conn = ctx.core.open_db()?;
    Ok(Json(db::list_appointments_on(&conn, &today)?))
}

/// Unknown patient or doctor ids are rejected by the store's foreign keys
/// and surface as a 500.
pub async fn create(
    State(ctx): State<ApiContext>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let fields = validate_create(&APPOINTMENT, &parse_body(&body))?;

    let conn = ctx.core.open_db()?;
    let appointment_id = db::insert_appointment(&conn, &fields)?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(&APPOINTMENT, appointment_id)),
    ))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let appointment_id = parse_id(&APPOINTMENT, &raw_id)?;

    let conn = ctx.core.open_db()?;
    db::delete_appointment(&conn, appointment_id)?;

    Ok(Json(MessageResponse::deleted(&APPOINTMENT)))
}
