use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_appointments_date_minute ON appointments(appointment_date, start_minute)",
    "CREATE INDEX IF NOT EXISTS idx_appointments_client_id ON appointments(client_id)",
    "CREATE INDEX IF NOT EXISTS idx_inventory_items_name ON inventory_items(name)",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create appointments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            appointment_date DATE NOT NULL,
            start_minute INTEGER NOT NULL,
            time_label VARCHAR(16) NOT NULL,
            starts_at TIMESTAMP NOT NULL,
            client_id VARCHAR(255) NOT NULL,
            client_name VARCHAR(255) NOT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'booked',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_start_minute CHECK (start_minute >= 0 AND start_minute < 1440)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create inventory_items table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS inventory_items (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            quantity INTEGER NOT NULL,
            price_cents BIGINT NOT NULL,
            threshold INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT non_negative_stock CHECK (quantity >= 0 AND price_cents >= 0 AND threshold >= 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Prepared statements take one command each
    for index in INDEXES {
        sqlx::query(index).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
