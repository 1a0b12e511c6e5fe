//! PostgreSQL implementations of the core store traits, delegating to the
//! repository functions.

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use salonbook_core::{
    models::{
        appointment::{Appointment, NewAppointment},
        inventory::{InventoryDraft, InventoryItem},
    },
    store::{AppointmentStore, InventoryStore},
};
use uuid::Uuid;

use crate::repositories::{appointment, inventory};
use crate::DbPool;

#[derive(Clone)]
pub struct PgAppointmentStore {
    pool: DbPool,
}

impl PgAppointmentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentStore for PgAppointmentStore {
    async fn create_appointment(&self, new: NewAppointment) -> Result<Appointment> {
        appointment::create_appointment(&self.pool, &new)
            .await?
            .try_into()
    }

    async fn create_appointment_within_capacity(
        &self,
        new: NewAppointment,
        capacity: u32,
    ) -> Result<Option<Appointment>> {
        appointment::create_appointment_within_capacity(&self.pool, &new, capacity)
            .await?
            .map(Appointment::try_from)
            .transpose()
    }

    async fn appointments_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Appointment>> {
        appointment::get_appointments_between(&self.pool, start, end)
            .await?
            .into_iter()
            .map(Appointment::try_from)
            .collect()
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<bool> {
        appointment::delete_appointment(&self.pool, id).await
    }
}

#[derive(Clone)]
pub struct PgInventoryStore {
    pool: DbPool,
}

impl PgInventoryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryStore for PgInventoryStore {
    async fn create_item(&self, draft: &InventoryDraft) -> Result<InventoryItem> {
        Ok(inventory::create_item(&self.pool, draft).await?.into())
    }

    async fn list_items(&self) -> Result<Vec<InventoryItem>> {
        let rows = inventory::list_items(&self.pool).await?;
        Ok(rows.into_iter().map(InventoryItem::from).collect())
    }

    async fn get_item(&self, id: Uuid) -> Result<Option<InventoryItem>> {
        Ok(inventory::get_item_by_id(&self.pool, id)
            .await?
            .map(InventoryItem::from))
    }

    async fn update_item(&self, id: Uuid, draft: &InventoryDraft) -> Result<Option<InventoryItem>> {
        Ok(inventory::update_item(&self.pool, id, draft)
            .await?
            .map(InventoryItem::from))
    }

    async fn delete_item(&self, id: Uuid) -> Result<bool> {
        inventory::delete_item(&self.pool, id).await
    }
}
