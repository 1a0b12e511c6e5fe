use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use eyre::{eyre, Report};
use salonbook_core::models::{
    appointment::{Appointment, AppointmentStatus},
    inventory::InventoryItem,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub appointment_date: NaiveDate,
    pub start_minute: i32,
    pub time_label: String,
    pub starts_at: NaiveDateTime,
    pub client_id: String,
    pub client_name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = Report;

    fn try_from(row: DbAppointment) -> Result<Self, Self::Error> {
        let start_minute = u16::try_from(row.start_minute)
            .map_err(|_| eyre!("Appointment {} has invalid start minute {}", row.id, row.start_minute))?;
        let status: AppointmentStatus = row
            .status
            .parse()
            .map_err(|e| eyre!("Appointment {}: {}", row.id, e))?;

        Ok(Appointment {
            id: row.id,
            date: row.appointment_date,
            start_minute,
            time: row.time_label,
            starts_at: row.starts_at,
            client_id: row.client_id,
            client_name: row.client_name,
            status,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbInventoryItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub price_cents: i64,
    pub threshold: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbInventoryItem> for InventoryItem {
    fn from(row: DbInventoryItem) -> Self {
        InventoryItem {
            id: row.id,
            name: row.name,
            quantity: row.quantity,
            price_cents: row.price_cents,
            threshold: row.threshold,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
