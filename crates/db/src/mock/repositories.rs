use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use salonbook_core::{
    models::{
        appointment::{Appointment, NewAppointment},
        inventory::{InventoryDraft, InventoryItem},
    },
    store::{AppointmentStore, InventoryStore},
};
use uuid::Uuid;

// Mock stores for testing failure paths
mock! {
    pub AppointmentRepo {}

    #[async_trait]
    impl AppointmentStore for AppointmentRepo {
        async fn create_appointment(
            &self,
            appointment: NewAppointment,
        ) -> eyre::Result<Appointment>;

        async fn create_appointment_within_capacity(
            &self,
            appointment: NewAppointment,
            capacity: u32,
        ) -> eyre::Result<Option<Appointment>>;

        async fn appointments_between(
            &self,
            start: NaiveDate,
            end: NaiveDate,
        ) -> eyre::Result<Vec<Appointment>>;

        async fn delete_appointment(&self, id: Uuid) -> eyre::Result<bool>;
    }
}

mock! {
    pub InventoryRepo {}

    #[async_trait]
    impl InventoryStore for InventoryRepo {
        async fn create_item(&self, draft: &InventoryDraft) -> eyre::Result<InventoryItem>;

        async fn list_items(&self) -> eyre::Result<Vec<InventoryItem>>;

        async fn get_item(&self, id: Uuid) -> eyre::Result<Option<InventoryItem>>;

        async fn update_item(
            &self,
            id: Uuid,
            draft: &InventoryDraft,
        ) -> eyre::Result<Option<InventoryItem>>;

        async fn delete_item(&self, id: Uuid) -> eyre::Result<bool>;
    }
}
