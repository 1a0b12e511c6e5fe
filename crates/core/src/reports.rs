//! # Revenue Reports
//!
//! Daily appointment counts and revenue over a trailing window. Every
//! appointment is valued at one fixed price.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use tracing::error;

use crate::errors::{BookingError, BookingResult};
use crate::models::appointment::Appointment;
use crate::models::report::{DailyStats, ReportSummary};
use crate::store::AppointmentStore;

pub const DEFAULT_PRICE_PER_APPOINTMENT_CENTS: i64 = 5000;
pub const DEFAULT_REPORT_DAYS: u32 = 7;
pub const MAX_REPORT_DAYS: u32 = 366;

/// Aggregates `appointments` per date. Days without appointments are not
/// listed, but the average is taken over `window_days`.
pub fn summarize(
    appointments: &[Appointment],
    window_start: NaiveDate,
    window_end: NaiveDate,
    window_days: u32,
    price_cents: i64,
) -> ReportSummary {
    let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for appointment in appointments {
        *per_day.entry(appointment.date).or_default() += 1;
    }

    let days: Vec<DailyStats> = per_day
        .into_iter()
        .map(|(date, appointments)| DailyStats {
            date,
            appointments,
            revenue_cents: i64::from(appointments) * price_cents,
        })
        .collect();

    let total_appointments = days.iter().map(|d| d.appointments).sum();
    let total_revenue_cents = days.iter().map(|d| d.revenue_cents).sum();
    let average_daily_revenue_cents = if window_days == 0 {
        0
    } else {
        total_revenue_cents / i64::from(window_days)
    };

    ReportSummary {
        window_start,
        window_end,
        days,
        total_appointments,
        total_revenue_cents,
        average_daily_revenue_cents,
    }
}

#[derive(Clone)]
pub struct ReportService {
    store: Arc<dyn AppointmentStore>,
    price_cents: i64,
}

impl ReportService {
    pub fn new(store: Arc<dyn AppointmentStore>, price_cents: i64) -> Self {
        Self { store, price_cents }
    }

    /// Summary of `today - days ..= today`.
    pub async fn trailing_summary(&self, today: NaiveDate, days: u32) -> BookingResult<ReportSummary> {
        if days == 0 || days > MAX_REPORT_DAYS {
            return Err(BookingError::Validation(format!(
                "Report window must be between 1 and {} days",
                MAX_REPORT_DAYS
            )));
        }

        let start = today - Duration::days(i64::from(days));
        let appointments = self
            .store
            .appointments_between(start, today)
            .await
            .map_err(|e| {
                error!("Error fetching report data: {:?}", e);
                BookingError::Database(e)
            })?;

        Ok(summarize(&appointments, start, today, days, self.price_cents))
    }
}
