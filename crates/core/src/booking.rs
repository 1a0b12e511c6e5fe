//! # Booking Service
//!
//! Ties slot generation, availability resolution and the appointment store
//! together.
//!
//! ## Booking modes
//!
//! - [`BookingMode::Guarded`] pushes the capacity check into the store's
//!   conditional insert, so two concurrent requests for the last spot in a
//!   slot cannot both succeed.
//! - [`BookingMode::BestEffort`] reads availability and then inserts in a
//!   separate call. Requests racing between the read and the insert can
//!   overbook a slot.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::availability::{group_by_slot, resolve_availability};
use crate::errors::{BookingError, BookingResult};
use crate::models::appointment::{
    Appointment, AppointmentStatus, ClientIdentity, DayAppointmentsResponse, NewAppointment,
};
use crate::models::time_slot::DaySchedule;
use crate::slots::{format_label, generate_day, slot_start, SalonHours};
use crate::store::AppointmentStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingMode {
    #[default]
    Guarded,
    BestEffort,
}

impl fmt::Display for BookingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingMode::Guarded => f.write_str("guarded"),
            BookingMode::BestEffort => f.write_str("best_effort"),
        }
    }
}

impl FromStr for BookingMode {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guarded" => Ok(BookingMode::Guarded),
            "best_effort" | "best-effort" => Ok(BookingMode::BestEffort),
            other => Err(BookingError::Validation(format!(
                "Unknown booking mode: {}",
                other
            ))),
        }
    }
}

#[derive(Clone)]
pub struct BookingService {
    store: Arc<dyn AppointmentStore>,
    hours: SalonHours,
    mode: BookingMode,
}

impl BookingService {
    pub fn new(store: Arc<dyn AppointmentStore>, hours: SalonHours, mode: BookingMode) -> Self {
        Self { store, hours, mode }
    }

    pub fn hours(&self) -> &SalonHours {
        &self.hours
    }

    pub fn mode(&self) -> BookingMode {
        self.mode
    }

    /// Slots of `date` with live availability.
    pub async fn day_view(&self, date: NaiveDate) -> BookingResult<DaySchedule> {
        let appointments = self.appointments_on(date).await?;
        let mut schedule = generate_day(date, &self.hours);
        schedule.slots = resolve_availability(date, schedule.slots, &appointments);
        Ok(schedule)
    }

    /// Appointments of `date` grouped by slot, for the admin view.
    pub async fn appointments_by_time(
        &self,
        date: NaiveDate,
    ) -> BookingResult<DayAppointmentsResponse> {
        let appointments = self.appointments_on(date).await?;
        Ok(DayAppointmentsResponse {
            date,
            groups: group_by_slot(appointments),
        })
    }

    /// Books the slot starting at `start_minute` on `date` for `client`.
    ///
    /// # Errors
    ///
    /// * `BookingError::Validation` - `start_minute` is not a generated slot
    /// * `BookingError::CapacityExceeded` - the slot has no spot left
    /// * `BookingError::Database` - the store failed; nothing is retried
    pub async fn book(
        &self,
        date: NaiveDate,
        start_minute: u16,
        client: &ClientIdentity,
    ) -> BookingResult<Appointment> {
        let time = format_label(start_minute);
        if !self.hours.is_slot_start(start_minute) {
            return Err(BookingError::Validation(format!(
                "{} is not a bookable slot",
                time
            )));
        }
        let starts_at = slot_start(date, start_minute).ok_or_else(|| {
            BookingError::Validation(format!("{} is not a valid time of day", start_minute))
        })?;

        let appointment = NewAppointment {
            date,
            start_minute,
            time: time.clone(),
            starts_at,
            client_id: client.client_id.clone(),
            client_name: client.client_name.clone(),
            status: AppointmentStatus::Booked,
        };

        let created = match self.mode {
            BookingMode::Guarded => self
                .store
                .create_appointment_within_capacity(appointment, self.hours.capacity())
                .await
                .map_err(|e| {
                    error!("Error booking appointment at {} on {}: {:?}", time, date, e);
                    BookingError::Database(e)
                })?,
            BookingMode::BestEffort => {
                let schedule = self.day_view(date).await?;
                let has_room = schedule
                    .slots
                    .iter()
                    .any(|slot| slot.start_minute == start_minute && slot.available > 0);

                if has_room {
                    let created = self.store.create_appointment(appointment).await.map_err(|e| {
                        error!("Error booking appointment at {} on {}: {:?}", time, date, e);
                        BookingError::Database(e)
                    })?;
                    Some(created)
                } else {
                    None
                }
            }
        };

        match created {
            Some(appointment) => {
                info!(
                    "Booked {} on {} for client {} ({})",
                    appointment.time, appointment.date, appointment.client_id, self.mode
                );
                Ok(appointment)
            }
            None => {
                warn!("Slot {} on {} is fully booked", time, date);
                Err(BookingError::CapacityExceeded { date, time })
            }
        }
    }

    /// Cancels an appointment so its spot can be booked again.
    pub async fn cancel(&self, id: Uuid) -> BookingResult<()> {
        let deleted = self.store.delete_appointment(id).await.map_err(|e| {
            error!("Error cancelling appointment {}: {:?}", id, e);
            BookingError::Database(e)
        })?;

        if !deleted {
            return Err(BookingError::NotFound(format!(
                "Appointment with ID {} not found",
                id
            )));
        }

        info!("Cancelled appointment {}", id);
        Ok(())
    }

    async fn appointments_on(&self, date: NaiveDate) -> BookingResult<Vec<Appointment>> {
        debug!("Fetching appointments for {}", date);
        self.store
            .appointments_between(date, date)
            .await
            .map_err(|e| {
                error!("Error fetching appointments for {}: {:?}", date, e);
                BookingError::Database(e)
            })
    }
}
