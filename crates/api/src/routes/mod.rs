pub mod appointments;
pub mod health;
pub mod inventory;
pub mod reports;
pub mod slots;
