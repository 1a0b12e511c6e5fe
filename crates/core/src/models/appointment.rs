use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::slots::parse_label;

/// Lifecycle tag of an appointment. Only `booked` exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Booked,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Booked => "booked",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "booked" => Ok(AppointmentStatus::Booked),
            other => Err(BookingError::Validation(format!(
                "Unknown appointment status: {}",
                other
            ))),
        }
    }
}

/// A persisted booking tying a client to a slot on a given day.
///
/// `start_minute` (minutes since midnight) is the key used to match an
/// appointment against generated slots; `time` is only the display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start_minute: u16,
    pub time: String,
    pub starts_at: NaiveDateTime,
    pub client_id: String,
    pub client_name: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

/// An appointment that has not been written yet. The store assigns `id`
/// and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub date: NaiveDate,
    pub start_minute: u16,
    pub time: String,
    pub starts_at: NaiveDateTime,
    pub client_id: String,
    pub client_name: String,
    pub status: AppointmentStatus,
}

impl NewAppointment {
    pub fn into_appointment(self, id: Uuid, created_at: DateTime<Utc>) -> Appointment {
        Appointment {
            id,
            date: self.date,
            start_minute: self.start_minute,
            time: self.time,
            starts_at: self.starts_at,
            client_id: self.client_id,
            client_name: self.client_name,
            status: self.status,
            created_at,
        }
    }
}

/// The booking client, as supplied by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientIdentity {
    pub client_id: String,
    pub client_name: String,
}

impl ClientIdentity {
    pub fn new(client_id: impl Into<String>, client_name: impl Into<String>) -> BookingResult<Self> {
        let client_id = client_id.into().trim().to_string();
        let client_name = client_name.into().trim().to_string();

        if client_id.is_empty() {
            return Err(BookingError::Authentication(
                "Client identifier is missing".to_string(),
            ));
        }
        if client_name.is_empty() {
            return Err(BookingError::Authentication(
                "Client name is missing".to_string(),
            ));
        }

        Ok(Self {
            client_id,
            client_name,
        })
    }
}

/// Selects a slot either by `start_minute` or by its display label
/// (`"time": "9:00 AM"`), as older clients send it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_minute: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl BookAppointmentRequest {
    /// The selected slot start. `start_minute` wins when both are given.
    pub fn slot_minute(&self) -> BookingResult<u16> {
        if let Some(minute) = self.start_minute {
            return Ok(minute);
        }

        match &self.time {
            Some(label) => parse_label(label).ok_or_else(|| {
                BookingError::Validation(format!("Unrecognized slot time: {}", label))
            }),
            None => Err(BookingError::Validation(
                "No slot selected: provide start_minute or time".to_string(),
            )),
        }
    }
}

/// Appointments sharing one slot, as shown on the admin day view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentGroup {
    pub start_minute: u16,
    pub time: String,
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAppointmentsResponse {
    pub date: NaiveDate,
    pub groups: Vec<AppointmentGroup>,
}
