use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::models::inventory::{InventoryDraft, InventoryItem};
use crate::store::InventoryStore;

#[derive(Clone)]
pub struct InventoryService {
    store: Arc<dyn InventoryStore>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    pub async fn create_item(&self, draft: InventoryDraft) -> BookingResult<InventoryItem> {
        draft.validate()?;
        let item = self.store.create_item(&draft).await.map_err(db_error)?;
        info!("Created inventory item {} ({})", item.id, item.name);
        Ok(item)
    }

    pub async fn list_items(&self) -> BookingResult<Vec<InventoryItem>> {
        self.store.list_items().await.map_err(db_error)
    }

    pub async fn low_stock_items(&self) -> BookingResult<Vec<InventoryItem>> {
        let items = self.list_items().await?;
        Ok(items.into_iter().filter(InventoryItem::is_low_stock).collect())
    }

    pub async fn get_item(&self, id: Uuid) -> BookingResult<InventoryItem> {
        self.store
            .get_item(id)
            .await
            .map_err(db_error)?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update_item(&self, id: Uuid, draft: InventoryDraft) -> BookingResult<InventoryItem> {
        draft.validate()?;
        let item = self
            .store
            .update_item(id, &draft)
            .await
            .map_err(db_error)?
            .ok_or_else(|| not_found(id))?;
        info!("Updated inventory item {}", id);
        Ok(item)
    }

    pub async fn delete_item(&self, id: Uuid) -> BookingResult<()> {
        if !self.store.delete_item(id).await.map_err(db_error)? {
            return Err(not_found(id));
        }
        info!("Deleted inventory item {}", id);
        Ok(())
    }
}

fn not_found(id: Uuid) -> BookingError {
    BookingError::NotFound(format!("Inventory item with ID {} not found", id))
}

fn db_error(e: eyre::Report) -> BookingError {
    error!("Inventory store error: {:?}", e);
    BookingError::Database(e)
}
