pub mod appointments;
pub mod inventory;
pub mod reports;
pub mod slots;
