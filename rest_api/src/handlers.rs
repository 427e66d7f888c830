// rest_api/src/handlers.rs
//
// Every appointment handler runs the same sequence: resolve the asserted
// role, authorize the operation, validate parameters, then call the store.

use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use models::{Appointment, AppointmentId, Doctor};
use security::Operation;
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::RestApiError;
use crate::requests::{CreateAppointmentParams, UpdateAppointmentParams};
use crate::AppState;

type PathId = Result<Path<AppointmentId>, PathRejection>;

fn resource_hint(path: &PathId) -> Option<AppointmentId> {
    path.as_ref().ok().map(|Path(id)| *id)
}

// POST /appointments
pub async fn create_appointment_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Result<Query<CreateAppointmentParams>, QueryRejection>,
) -> Result<(StatusCode, Json<Value>), RestApiError> {
    state.authorize(&headers, Operation::CreateAppointment, None)?;
    let Query(params) = params?;
    let new = params.into_new_appointment()?;

    let appointment = state.storage.create(new).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Appointment created",
            "appointment": appointment,
        })),
    ))
}

// GET /appointments
pub async fn list_appointments_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Appointment>>, RestApiError> {
    state.authorize(&headers, Operation::ListAppointments, None)?;
    let appointments = state.storage.list().await;
    debug!(count = appointments.len(), "listing appointments");
    Ok(Json(appointments))
}

// GET /appointments/:id
pub async fn get_appointment_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: PathId,
) -> Result<Json<Appointment>, RestApiError> {
    state.authorize(&headers, Operation::GetAppointment, resource_hint(&path))?;
    let Path(id) = path?;
    Ok(Json(state.storage.get(id).await?))
}

// PUT /appointments/:id
pub async fn update_appointment_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: PathId,
    params: Result<Query<UpdateAppointmentParams>, QueryRejection>,
) -> Result<Json<Value>, RestApiError> {
    state.authorize(&headers, Operation::UpdateAppointment, resource_hint(&path))?;
    let Path(id) = path?;
    let Query(params) = params?;
    let changes = params.into_changes()?;

    let appointment = state.storage.update(id, changes).await?;
    Ok(Json(json!({
        "message": "Appointment updated",
        "appointment": appointment,
    })))
}

// DELETE /appointments/:id
pub async fn delete_appointment_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: PathId,
) -> Result<Json<Value>, RestApiError> {
    state.authorize(&headers, Operation::DeleteAppointment, resource_hint(&path))?;
    let Path(id) = path?;
    state.storage.delete(id).await?;
    Ok(Json(json!({
        "message": "Appointment deleted",
        "id": id,
    })))
}

// GET /doctors, diagnostic roster dump with no role requirement.
pub async fn list_doctors_handler(State(state): State<AppState>) -> Json<Vec<Doctor>> {
    Json(state.registry.all().to_vec())
}

// Handler for the /health endpoint
pub async fn health_check_handler(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "message": "Booking API is healthy",
            "storage": state.storage.get_type(),
            "appointments": state.storage.len().await,
        })),
    )
}

// Handler for the /version endpoint
pub async fn version_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "version": env!("CARGO_PKG_VERSION"), "api_level": 1 })),
    )
}
