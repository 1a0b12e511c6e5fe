//! # Slot Generation
//!
//! Turns the salon's operating hours into the ordered list of bookable slots
//! for a day. Slots are identified by their start time in minutes since
//! midnight; the "9:00 AM" style label is produced only for display.
//!
//! A slot is emitted while its start lies before closing time, so when the
//! slot length does not divide the opening window the last slot may run past
//! closing.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};
use crate::models::time_slot::{DaySchedule, TimeSlot};

pub const DEFAULT_OPENING_HOUR: u32 = 9;
pub const DEFAULT_CLOSING_HOUR: u32 = 18;
pub const DEFAULT_SLOT_CAPACITY: u32 = 2;
pub const DEFAULT_SLOT_MINUTES: u32 = 60;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Operating hours and slot layout of the salon.
///
/// Deserialization goes through [`SalonHours::new`], so an invalid layout is
/// rejected instead of producing an unusable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSalonHours")]
pub struct SalonHours {
    opening_hour: u32,
    closing_hour: u32,
    capacity: u32,
    slot_minutes: u32,
}

impl SalonHours {
    /// Builds a validated configuration.
    ///
    /// # Errors
    ///
    /// * `BookingError::Validation` - opening is not before closing, closing
    ///   is past midnight, or capacity/slot length is zero
    pub fn new(
        opening_hour: u32,
        closing_hour: u32,
        capacity: u32,
        slot_minutes: u32,
    ) -> BookingResult<Self> {
        if closing_hour > 24 {
            return Err(BookingError::Validation(format!(
                "Closing hour {} is past midnight",
                closing_hour
            )));
        }
        if opening_hour >= closing_hour {
            return Err(BookingError::Validation(format!(
                "Opening hour {} must be before closing hour {}",
                opening_hour, closing_hour
            )));
        }
        if capacity == 0 {
            return Err(BookingError::Validation(
                "Slot capacity must be at least 1".to_string(),
            ));
        }
        if slot_minutes == 0 {
            return Err(BookingError::Validation(
                "Slot duration must be at least one minute".to_string(),
            ));
        }

        Ok(Self {
            opening_hour,
            closing_hour,
            capacity,
            slot_minutes,
        })
    }

    pub fn opening_hour(&self) -> u32 {
        self.opening_hour
    }

    pub fn closing_hour(&self) -> u32 {
        self.closing_hour
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn slot_minutes(&self) -> u32 {
        self.slot_minutes
    }

    /// Start minutes of every slot of a day, in chronological order.
    pub fn slot_starts(&self) -> impl Iterator<Item = u16> + '_ {
        let closing = self.closing_hour * 60;
        (self.opening_hour * 60..closing)
            .step_by(self.slot_minutes as usize)
            .map(|minute| minute as u16)
    }

    pub fn is_slot_start(&self, minute: u16) -> bool {
        let minute = u32::from(minute);
        let opening = self.opening_hour * 60;
        minute >= opening
            && minute < self.closing_hour * 60
            && (minute - opening) % self.slot_minutes == 0
    }
}

#[derive(Deserialize)]
struct RawSalonHours {
    opening_hour: u32,
    closing_hour: u32,
    capacity: u32,
    slot_minutes: u32,
}

impl TryFrom<RawSalonHours> for SalonHours {
    type Error = BookingError;

    fn try_from(raw: RawSalonHours) -> BookingResult<Self> {
        SalonHours::new(
            raw.opening_hour,
            raw.closing_hour,
            raw.capacity,
            raw.slot_minutes,
        )
    }
}

impl Default for SalonHours {
    fn default() -> Self {
        Self {
            opening_hour: DEFAULT_OPENING_HOUR,
            closing_hour: DEFAULT_CLOSING_HOUR,
            capacity: DEFAULT_SLOT_CAPACITY,
            slot_minutes: DEFAULT_SLOT_MINUTES,
        }
    }
}

/// Produces the empty slots of a day, each with full capacity.
pub fn generate_slots(hours: &SalonHours) -> Vec<TimeSlot> {
    hours
        .slot_starts()
        .map(|start_minute| TimeSlot {
            start_minute,
            time: format_label(start_minute),
            available: hours.capacity(),
            booked_by: Vec::new(),
        })
        .collect()
}

pub fn generate_day(date: NaiveDate, hours: &SalonHours) -> DaySchedule {
    DaySchedule {
        date,
        capacity: hours.capacity(),
        slots: generate_slots(hours),
    }
}

/// Formats minutes since midnight as a 12-hour label, e.g. `9:00 AM`.
pub fn format_label(minute: u16) -> String {
    let minute = u32::from(minute) % MINUTES_PER_DAY;
    let hour = minute / 60;
    let (display_hour, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{}:{:02} {}", display_hour, minute % 60, suffix)
}

/// Parses a label produced by [`format_label`] (or a 24-hour `HH:MM`) back
/// into minutes since midnight.
pub fn parse_label(label: &str) -> Option<u16> {
    let label = label.trim();
    let (clock, suffix) = match label.rsplit_once(' ') {
        Some((clock, suffix)) => (clock.trim(), Some(suffix.to_ascii_uppercase())),
        None => (label, None),
    };

    let (hour, minute) = clock.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if minute >= 60 {
        return None;
    }

    let hour = match suffix.as_deref() {
        Some("AM") if (1..=12).contains(&hour) => hour % 12,
        Some("PM") if (1..=12).contains(&hour) => hour % 12 + 12,
        None if hour < 24 => hour,
        _ => return None,
    };

    Some((hour * 60 + minute) as u16)
}

/// Combines a calendar date with a slot start.
pub fn slot_start(date: NaiveDate, minute: u16) -> Option<NaiveDateTime> {
    let minute = u32::from(minute);
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).map(|time| date.and_time(time))
}
