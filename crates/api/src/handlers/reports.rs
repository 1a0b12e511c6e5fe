use axum::{
    extract::State,
    Json,
};
use chrono::Local;
use salonbook_core::{models::report::ReportSummary, reports::DEFAULT_REPORT_DAYS};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    middleware::{error_handling::AppError, extract::ApiQuery},
    ApiState,
};

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// Length of the trailing window in days (default: 7)
    pub days: Option<u32>,
}

/// Appointment counts and revenue per day, ending today in the salon's
/// local time.
///
/// ```text
/// GET /api/reports/daily?days=7
/// ```
#[axum::debug_handler]
pub async fn daily_report(
    State(state): State<Arc<ApiState>>,
    ApiQuery(query): ApiQuery<ReportQuery>,
) -> Result<Json<ReportSummary>, AppError> {
    let today = Local::now().date_naive();
    let days = query.days.unwrap_or(DEFAULT_REPORT_DAYS);

    let summary = state.reports.trailing_summary(today, days).await?;
    Ok(Json(summary))
}
