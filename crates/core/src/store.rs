//! Persistence contracts consumed by the services.
//!
//! Implementations report failures as `eyre` reports; services convert them
//! into `BookingError::Database`.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::appointment::{Appointment, NewAppointment};
use crate::models::inventory::{InventoryDraft, InventoryItem};

#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Inserts the appointment unconditionally.
    async fn create_appointment(&self, appointment: NewAppointment) -> eyre::Result<Appointment>;

    /// Inserts the appointment only while fewer than `capacity` appointments
    /// hold the same date and start minute. The count and the insert must be
    /// atomic with respect to other calls for the same slot. Returns `None`
    /// when the slot is full.
    async fn create_appointment_within_capacity(
        &self,
        appointment: NewAppointment,
        capacity: u32,
    ) -> eyre::Result<Option<Appointment>>;

    /// Appointments whose date lies in `start..=end`, ordered by date and
    /// start minute.
    async fn appointments_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> eyre::Result<Vec<Appointment>>;

    /// Removes an appointment, freeing its spot. `false` when it does not
    /// exist.
    async fn delete_appointment(&self, id: Uuid) -> eyre::Result<bool>;
}

#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn create_item(&self, draft: &InventoryDraft) -> eyre::Result<InventoryItem>;

    /// All items ordered by name.
    async fn list_items(&self) -> eyre::Result<Vec<InventoryItem>>;

    async fn get_item(&self, id: Uuid) -> eyre::Result<Option<InventoryItem>>;

    /// Replaces every editable field. `None` when the item does not exist.
    async fn update_item(
        &self,
        id: Uuid,
        draft: &InventoryDraft,
    ) -> eyre::Result<Option<InventoryItem>>;

    /// `false` when the item does not exist.
    async fn delete_item(&self, id: Uuid) -> eyre::Result<bool>;
}
