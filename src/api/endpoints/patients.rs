//! Patient endpoints.
//!
//! - `GET /api/patients`: list patients by name
//! - `GET /api/patients/:id`: one patient
//! - `POST /api/patients`: create (all fields required)
//! - `PUT /api/patients/:id`: partial update
//! - `DELETE /api/patients/:id`: delete with their appointments

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{parse_id, ApiContext, CreatedResponse, MessageResponse};
use crate::db;
use crate::models::{Patient, PATIENT};
use crate::validation::{parse_body, validate_create, validate_update};

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Patient>>, ApiError> {
    let conn = ctx.core.open_db()?;
    let patients = db::list_patients(&conn)?;
    Ok(Json(patients))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<Patient>, ApiError> {
    let patient_id = parse_id(&PATIENT, &raw_id)?;
    let conn = ctx.core.open_db()?;
    Ok(Json(db::get_patient(&conn, patient_id)?))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let fields = validate_create(&PATIENT, &parse_body(&body))?;

    let conn = ctx.core.open_db()?;
    let patient_id = db::insert_patient(&conn, &fields)?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(&PATIENT, patient_id)),
    ))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let patient_id = parse_id(&PATIENT, &raw_id)?;
    let fields = validate_update(&PATIENT, &parse_body(&body))?;

    let conn = ctx.core.open_db()?;
    db::update_patient(&conn, patient_id, &fields)?;

    Ok(Json(MessageResponse::updated(&PATIENT)))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let patient_id = parse_id(&PATIENT, &raw_id)?;

    let conn = ctx.core.open_db()?;
    db::delete_patient(&conn, patient_id)?;

    Ok(Json(MessageResponse::deleted(&PATIENT)))
}
