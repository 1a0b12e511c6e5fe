//! In-process stores backed by `tokio::sync::Mutex`.
//!
//! Used for tests and local runs without PostgreSQL. The capacity-checked
//! insert counts and writes while holding the lock, so it is atomic with
//! respect to other writers.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use salonbook_core::{
    availability::count_for_slot,
    models::{
        appointment::{Appointment, NewAppointment},
        inventory::{InventoryDraft, InventoryItem},
    },
    store::{AppointmentStore, InventoryStore},
};
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryAppointmentStore {
    appointments: Mutex<Vec<Appointment>>,
}

impl MemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments: Mutex::new(appointments),
        }
    }

    /// Every stored appointment in insertion order.
    pub async fn all(&self) -> Vec<Appointment> {
        self.appointments.lock().await.clone()
    }
}

#[async_trait]
impl AppointmentStore for MemoryAppointmentStore {
    async fn create_appointment(&self, new: NewAppointment) -> Result<Appointment> {
        let appointment = new.into_appointment(Uuid::new_v4(), Utc::now());
        self.appointments.lock().await.push(appointment.clone());
        Ok(appointment)
    }

    async fn create_appointment_within_capacity(
        &self,
        new: NewAppointment,
        capacity: u32,
    ) -> Result<Option<Appointment>> {
        let mut appointments = self.appointments.lock().await;
        let booked = count_for_slot(&appointments, new.date, new.start_minute);
        if booked >= capacity as usize {
            return Ok(None);
        }

        let appointment = new.into_appointment(Uuid::new_v4(), Utc::now());
        appointments.push(appointment.clone());
        Ok(Some(appointment))
    }

    async fn appointments_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Appointment>> {
        let mut found: Vec<Appointment> = self
            .appointments
            .lock()
            .await
            .iter()
            .filter(|a| a.date >= start && a.date <= end)
            .cloned()
            .collect();
        // Stable sort keeps insertion order inside a slot
        found.sort_by_key(|a| (a.date, a.start_minute));
        Ok(found)
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<bool> {
        let mut appointments = self.appointments.lock().await;
        let before = appointments.len();
        appointments.retain(|a| a.id != id);
        Ok(appointments.len() < before)
    }
}

#[derive(Default)]
pub struct MemoryInventoryStore {
    items: Mutex<HashMap<Uuid, InventoryItem>>,
}

impl MemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InventoryStore for MemoryInventoryStore {
    async fn create_item(&self, draft: &InventoryDraft) -> Result<InventoryItem> {
        let now = Utc::now();
        let item = InventoryItem {
            id: Uuid::new_v4(),
            name: draft.name.clone(),
            quantity: draft.quantity,
            price_cents: draft.price_cents,
            threshold: draft.threshold,
            created_at: now,
            updated_at: now,
        };
        self.items.lock().await.insert(item.id, item.clone());
        Ok(item)
    }

    async fn list_items(&self) -> Result<Vec<InventoryItem>> {
        let mut items: Vec<InventoryItem> = self.items.lock().await.values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn get_item(&self, id: Uuid) -> Result<Option<InventoryItem>> {
        Ok(self.items.lock().await.get(&id).cloned())
    }

    async fn update_item(&self, id: Uuid, draft: &InventoryDraft) -> Result<Option<InventoryItem>> {
        let mut items = self.items.lock().await;
        let Some(item) = items.get_mut(&id) else {
            return Ok(None);
        };

        item.name = draft.name.clone();
        item.quantity = draft.quantity;
        item.price_cents = draft.price_cents;
        item.threshold = draft.threshold;
        item.updated_at = Utc::now();
        Ok(Some(item.clone()))
    }

    async fn delete_item(&self, id: Uuid) -> Result<bool> {
        Ok(self.items.lock().await.remove(&id).is_some())
    }
}
