pub mod repositories;

use eyre::{Result, WrapErr};

/// Pool on the database named by `TEST_DATABASE_URL`, with the schema
/// initialized. Tests that need it are `#[ignore]`d and run explicitly
/// against a disposable database.
pub async fn create_test_pool() -> Result<crate::DbPool> {
    let database_url = std::env::var("TEST_DATABASE_URL")
        .wrap_err("TEST_DATABASE_URL must point at a disposable PostgreSQL database")?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .wrap_err("Failed to connect to test database")?;

    crate::schema::initialize_database(&pool)
        .await
        .wrap_err("Failed to initialize test database schema")?;

    Ok(pool)
}
