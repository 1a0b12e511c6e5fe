use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub appointments: u32,
    pub revenue_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub days: Vec<DailyStats>,
    pub total_appointments: u32,
    pub total_revenue_cents: i64,
    /// Total revenue divided by the window length, including days
    /// without any bookings.
    pub average_daily_revenue_cents: i64,
}
