//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the SalonBook API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `SALON_OPENING_HOUR` / `SALON_CLOSING_HOUR`: Operating hours (default: 9 / 18)
//! - `SALON_SLOT_CAPACITY`: Appointments per slot (default: 2)
//! - `SALON_SLOT_MINUTES`: Slot length (default: 60)
//! - `BOOKING_MODE`: `guarded` or `best_effort` (default: guarded)
//! - `APPOINTMENT_PRICE_CENTS`: Revenue counted per appointment (default: 5000)

use std::env;
use std::str::FromStr;

use eyre::{eyre, Result, WrapErr};
use salonbook_core::{
    booking::BookingMode,
    reports::DEFAULT_PRICE_PER_APPOINTMENT_CENTS,
    slots::{
        SalonHours, DEFAULT_CLOSING_HOUR, DEFAULT_OPENING_HOUR, DEFAULT_SLOT_CAPACITY,
        DEFAULT_SLOT_MINUTES,
    },
};
use tracing::Level;

/// Configuration for the SalonBook API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Operating hours and slot layout
    pub salon_hours: SalonHours,

    pub booking_mode: BookingMode,

    pub price_per_appointment_cents: i64,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - A numeric variable cannot be parsed
    /// - The salon hours are inconsistent (e.g. opening after closing)
    /// - BOOKING_MODE is not a known mode
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("API_PORT", 3000u16)?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = parse_var("API_REQUEST_TIMEOUT_SECONDS", 30u64)?;

        // Salon settings
        let salon_hours = SalonHours::new(
            parse_var("SALON_OPENING_HOUR", DEFAULT_OPENING_HOUR)?,
            parse_var("SALON_CLOSING_HOUR", DEFAULT_CLOSING_HOUR)?,
            parse_var("SALON_SLOT_CAPACITY", DEFAULT_SLOT_CAPACITY)?,
            parse_var("SALON_SLOT_MINUTES", DEFAULT_SLOT_MINUTES)?,
        )
        .map_err(|e| eyre!("Invalid salon hours: {}", e))?;

        let booking_mode = match env::var("BOOKING_MODE") {
            Ok(mode) => mode.parse().map_err(|e| eyre!("Invalid BOOKING_MODE: {}", e))?,
            Err(_) => BookingMode::default(),
        };

        let price_per_appointment_cents =
            parse_var("APPOINTMENT_PRICE_CENTS", DEFAULT_PRICE_PER_APPOINTMENT_CENTS)?;

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            salon_hours,
            booking_mode,
            price_per_appointment_cents,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid {} value", key)),
        Err(_) => Ok(default),
    }
}

pub fn parse_log_level(value: &str) -> Level {
    match value {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
