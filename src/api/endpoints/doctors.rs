//! Doctor endpoints.
//!
//! - `GET /api/doctors`: list doctors by name
//! - `GET /api/doctors/:id`: one doctor
//! - `POST /api/doctors`: create (all fields required)
//! - `PUT /api/doctors/:id`: partial update
//! - `DELETE /api/doctors/:id`: delete with their appointments

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{parse_id, ApiContext, CreatedResponse, MessageResponse};
use crate::db;
use crate::models::{Doctor, DOCTOR};
use crate::validation::{parse_body, validate_create, validate_update};

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Doctor>>, ApiError> {
    let conn = ctx.core.open_db()?;
    let doctors = db::list_doctors(&conn)?;
    Ok(Json(doctors))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<Doctor>, ApiError> {
    let doctor_id = parse_id(&DOCTOR, &raw_id)?;
    let conn = ctx.core.open_db()?;
    Ok(Json(db::get_doctor(&conn, doctor_id)?))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let fields = validate_create(&DOCTOR, &parse_body(&body))?;

    let conn = ctx.core.open_db()?;
    let doctor_id = db::insert_doctor(&conn, &fields)?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(&DOCTOR, doctor_id)),
    ))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let doctor_id = parse_id(&DOCTOR, &raw_id)?;
    let fields = validate_update(&DOCTOR, &parse_body(&body))?;

    let conn = ctx.core.open_db()?;
    db::update_doctor(&conn, doctor_id, &fields)?;

    Ok(Json(MessageResponse::updated(&DOCTOR)))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let doctor_id = parse_id(&DOCTOR, &raw_id)?;

    let conn = ctx.core.open_db()?;
    db::delete_doctor(&conn, doctor_id)?;

    Ok(Json(MessageResponse::deleted(&DOCTOR)))
}
