//! # Appointment Handlers
//!
//! Booking for clients and the per-day overview for administrators.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use salonbook_core::models::appointment::{
    Appointment, BookAppointmentRequest, DayAppointmentsResponse,
};
use std::sync::Arc;
use uuid::Uuid;

use super::slots::DateQuery;
use crate::{
    middleware::{
        error_handling::AppError,
        extract::{ApiJson, ApiPath, ApiQuery},
        identity::Client,
    },
    ApiState,
};

/// Books a slot for the calling client.
///
/// ```text
/// POST /api/appointments
/// X-Client-Id: ...
/// X-Client-Name: ...
/// {"date": "2026-03-02", "start_minute": 540}
/// ```
///
/// The slot may also be given by label: `{"date": "...", "time": "9:00 AM"}`.
///
/// # Errors
///
/// * `401` - identity headers missing
/// * `400` - no slot given, or it is not one of the day's slots
/// * `409` - the slot is fully booked
#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<ApiState>>,
    Client(client): Client,
    ApiJson(payload): ApiJson<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let start_minute = payload.slot_minute()?;
    let appointment = state
        .bookings
        .book(payload.date, start_minute, &client)
        .await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Appointments of a day grouped by slot.
#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    ApiQuery(query): ApiQuery<DateQuery>,
) -> Result<Json<DayAppointmentsResponse>, AppError> {
    let response = state.bookings.appointments_by_time(query.date).await?;
    Ok(Json(response))
}

/// Cancels an appointment, freeing its spot.
#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    state.bookings.cancel(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
