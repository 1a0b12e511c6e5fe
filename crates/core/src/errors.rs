use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Slot {time} on {date} is fully booked")]
    CapacityExceeded { date: NaiveDate, time: String },

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

pub type BookingResult<T> = Result<T, BookingError>;
