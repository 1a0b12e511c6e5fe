//! # SalonBook Core
//!
//! Domain types and services for the salon booking backend: slot generation,
//! availability resolution, the booking write path, inventory management and
//! revenue reports.
//!
//! Persistence is reached only through the traits in [`store`], so every
//! service is constructed with the store it talks to.

pub mod availability;
pub mod booking;
pub mod errors;
pub mod inventory;
pub mod models;
pub mod reports;
pub mod slots;
pub mod store;
