use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use salonbook_core::models::inventory::{InventoryDraft, InventoryItemResponse};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{error_handling::AppError, extract::{ApiJson, ApiPath}},
    ApiState,
};

#[axum::debug_handler]
pub async fn list_items(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<InventoryItemResponse>>, AppError> {
    let items = state.inventory.list_items().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[axum::debug_handler]
pub async fn list_low_stock(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<InventoryItemResponse>>, AppError> {
    let items = state.inventory.low_stock_items().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[axum::debug_handler]
pub async fn create_item(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<InventoryDraft>,
) -> Result<(StatusCode, Json<InventoryItemResponse>), AppError> {
    let item = state.inventory.create_item(payload).await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

#[axum::debug_handler]
pub async fn get_item(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<InventoryItemResponse>, AppError> {
    let item = state.inventory.get_item(id).await?;
    Ok(Json(item.into()))
}

#[axum::debug_handler]
pub async fn update_item(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<InventoryDraft>,
) -> Result<Json<InventoryItemResponse>, AppError> {
    let item = state.inventory.update_item(id, payload).await?;
    Ok(Json(item.into()))
}

#[axum::debug_handler]
pub async fn delete_item(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    state.inventory.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
