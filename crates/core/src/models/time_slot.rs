use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One bookable interval of a day. Derived on every request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_minute: u16,
    pub time: String,
    pub available: u32,
    pub booked_by: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub capacity: u32,
    pub slots: Vec<TimeSlot>,
}
