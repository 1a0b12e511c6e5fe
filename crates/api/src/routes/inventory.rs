use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/inventory",
            get(handlers::inventory::list_items).post(handlers::inventory::create_item),
        )
        // Must not be captured as an item id
        .route(
            "/api/inventory/low-stock",
            get(handlers::inventory::list_low_stock),
        )
        .route(
            "/api/inventory/:id",
            get(handlers::inventory::get_item)
                .put(handlers::inventory::update_item)
                .delete(handlers::inventory::delete_item),
        )
}
