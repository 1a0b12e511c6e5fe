use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub price_cents: i64,
    pub threshold: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Stock is low once the quantity drops to the threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.threshold
    }
}

/// Field values for creating or replacing an inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryDraft {
    pub name: String,
    pub quantity: i32,
    pub price_cents: i64,
    pub threshold: i32,
}

impl InventoryDraft {
    pub fn validate(&self) -> BookingResult<()> {
        if self.name.trim().is_empty() {
            return Err(BookingError::Validation(
                "Item name must not be empty".to_string(),
            ));
        }
        if self.quantity < 0 {
            return Err(BookingError::Validation(
                "Quantity must not be negative".to_string(),
            ));
        }
        if self.price_cents < 0 {
            return Err(BookingError::Validation(
                "Price must not be negative".to_string(),
            ));
        }
        if self.threshold < 0 {
            return Err(BookingError::Validation(
                "Threshold must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItemResponse {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub price_cents: i64,
    pub threshold: i32,
    pub low_stock: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<InventoryItem> for InventoryItemResponse {
    fn from(item: InventoryItem) -> Self {
        let low_stock = item.is_low_stock();
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
            price_cents: item.price_cents,
            threshold: item.threshold,
            low_stock,
            updated_at: item.updated_at,
        }
    }
}
