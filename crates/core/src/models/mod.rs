pub mod appointment;
pub mod inventory;
pub mod report;
pub mod time_slot;
