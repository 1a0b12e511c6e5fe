pub mod appointment;
pub mod inventory;
