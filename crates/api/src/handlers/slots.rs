use axum::{
    extract::State,
    Json,
};
use chrono::NaiveDate;
use salonbook_core::models::time_slot::DaySchedule;
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    middleware::{error_handling::AppError, extract::ApiQuery},
    ApiState,
};

/// `?date=YYYY-MM-DD`
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: NaiveDate,
}

/// Slots of a day with the remaining spots and who holds them.
///
/// ```text
/// GET /api/slots?date=2026-03-02
/// ```
#[axum::debug_handler]
pub async fn get_slots(
    State(state): State<Arc<ApiState>>,
    ApiQuery(query): ApiQuery<DateQuery>,
) -> Result<Json<DaySchedule>, AppError> {
    let schedule = state.bookings.day_view(query.date).await?;
    Ok(Json(schedule))
}
