use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use salonbook_core::models::inventory::InventoryItemResponse;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::TestContext;

async fn create(ctx: &TestContext, name: &str, quantity: i32, threshold: i32) -> InventoryItemResponse {
    let response = ctx
        .server
        .post("/api/inventory")
        .json(&json!({
            "name": name,
            "quantity": quantity,
            "price_cents": 1299,
            "threshold": threshold,
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn test_create_and_get_item() {
    let ctx = TestContext::new();

    let created = create(&ctx, "Argan oil shampoo", 12, 3).await;
    assert_eq!(created.name, "Argan oil shampoo");
    assert!(!created.low_stock);

    let response = ctx.server.get(&format!("/api/inventory/{}", created.id)).await;

    response.assert_status_ok();
    let fetched: InventoryItemResponse = response.json();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.quantity, 12);
    assert_eq!(fetched.price_cents, 1299);
}

#[tokio::test]
async fn test_create_item_validation() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/inventory")
        .json(&json!({ "name": "  ", "quantity": 1, "price_cents": 100, "threshold": 0 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let response = ctx
        .server
        .post("/api/inventory")
        .json(&json!({ "name": "Gel", "quantity": -1, "price_cents": 100, "threshold": 0 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_and_low_stock() {
    let ctx = TestContext::new();

    create(&ctx, "Hair spray", 2, 5).await;
    create(&ctx, "Conditioner", 40, 5).await;
    create(&ctx, "Bleach", 5, 5).await;

    let all: Vec<InventoryItemResponse> = ctx.server.get("/api/inventory").await.json();
    let names: Vec<&str> = all.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Bleach", "Conditioner", "Hair spray"]);

    let response = ctx.server.get("/api/inventory/low-stock").await;
    response.assert_status_ok();
    let low: Vec<InventoryItemResponse> = response.json();
    let names: Vec<&str> = low.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Bleach", "Hair spray"]);
    assert!(low.iter().all(|item| item.low_stock));
}

#[tokio::test]
async fn test_update_item() {
    let ctx = TestContext::new();
    let created = create(&ctx, "Hair spray", 20, 5).await;

    let response = ctx
        .server
        .put(&format!("/api/inventory/{}", created.id))
        .json(&json!({ "name": "Hair spray", "quantity": 4, "price_cents": 1499, "threshold": 5 }))
        .await;

    response.assert_status_ok();
    let updated: InventoryItemResponse = response.json();
    assert_eq!(updated.quantity, 4);
    assert_eq!(updated.price_cents, 1499);
    assert!(updated.low_stock);
}

#[tokio::test]
async fn test_delete_item() {
    let ctx = TestContext::new();
    let created = create(&ctx, "Foils", 100, 10).await;

    ctx.server
        .delete(&format!("/api/inventory/{}", created.id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    ctx.server
        .get(&format!("/api/inventory/{}", created.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_item_not_found() {
    let ctx = TestContext::new();
    let id = Uuid::new_v4();

    let response = ctx.server.get(&format!("/api/inventory/{}", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        format!("Resource not found: Inventory item with ID {} not found", id)
    );

    ctx.server
        .put(&format!("/api/inventory/{}", id))
        .json(&json!({ "name": "Gel", "quantity": 1, "price_cents": 100, "threshold": 0 }))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    ctx.server
        .delete(&format!("/api/inventory/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_requests_get_json_errors() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/inventory/not-a-uuid").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());

    // quantity is missing
    let response = ctx
        .server
        .post("/api/inventory")
        .json(&json!({ "name": "Gel", "price_cents": 100, "threshold": 0 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Validation error:"));
}
