//! Appointment record handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use vetdesk_entity::appointment::Appointment;
use vetdesk_service::appointment::AppointmentInput;

use crate::dto::request::AppointmentRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

impl From<AppointmentRequest> for AppointmentInput {
    fn from(req: AppointmentRequest) -> Self {
        Self {
            date: req.date,
            time: req.time,
            vet_id: req.vet_id,
            pet_id: req.pet_id,
            owner_id: req.owner_id,
        }
    }
}

/// GET /api/appointments
pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Appointment>>>, ApiError> {
    Ok(Json(ApiResponse::ok(
        state.appointment_service.list().await?,
    )))
}

/// GET /api/appointments/{id}
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Appointment>>, ApiError> {
    Ok(Json(ApiResponse::ok(
        state.appointment_service.get(id).await?,
    )))
}

/// POST /api/appointments
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(req): Json<AppointmentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Appointment>>), ApiError> {
    let appointment = state.appointment_service.create(req.into()).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(appointment))))
}

/// PUT /api/appointments/{id}
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AppointmentRequest>,
) -> Result<Json<ApiResponse<Appointment>>, ApiError> {
    Ok(Json(ApiResponse::ok(
        state.appointment_service.update(id, req.into()).await?,
    )))
}

/// DELETE /api/appointments/{id}
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Appointment>>, ApiError> {
    Ok(Json(ApiResponse::ok(
        state.appointment_service.delete(id).await?,
    )))
}
