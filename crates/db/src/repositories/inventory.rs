use crate::models::DbInventoryItem;
use eyre::Result;
use salonbook_core::models::inventory::InventoryDraft;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_item(pool: &Pool<Postgres>, draft: &InventoryDraft) -> Result<DbInventoryItem> {
    let id = Uuid::new_v4();

    let item = sqlx::query_as::<_, DbInventoryItem>(
        r#"
        INSERT INTO inventory_items (id, name, quantity, price_cents, threshold, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
        RETURNING id, name, quantity, price_cents, threshold, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&draft.name)
    .bind(draft.quantity)
    .bind(draft.price_cents)
    .bind(draft.threshold)
    .fetch_one(pool)
    .await?;

    Ok(item)
}

pub async fn list_items(pool: &Pool<Postgres>) -> Result<Vec<DbInventoryItem>> {
    let items = sqlx::query_as::<_, DbInventoryItem>(
        r#"
        SELECT id, name, quantity, price_cents, threshold, created_at, updated_at
        FROM inventory_items
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(items)
}

pub async fn get_item_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbInventoryItem>> {
    let item = sqlx::query_as::<_, DbInventoryItem>(
        r#"
        SELECT id, name, quantity, price_cents, threshold, created_at, updated_at
        FROM inventory_items
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}

pub async fn update_item(
    pool: &Pool<Postgres>,
    id: Uuid,
    draft: &InventoryDraft,
) -> Result<Option<DbInventoryItem>> {
    let item = sqlx::query_as::<_, DbInventoryItem>(
        r#"
        UPDATE inventory_items
        SET name = $2, quantity = $3, price_cents = $4, threshold = $5, updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, quantity, price_cents, threshold, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&draft.name)
    .bind(draft.quantity)
    .bind(draft.price_cents)
    .bind(draft.threshold)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}

pub async fn delete_item(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM inventory_items
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
