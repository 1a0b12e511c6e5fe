use crate::models::DbAppointment;
use chrono::{Datelike, NaiveDate};
use eyre::Result;
use salonbook_core::models::appointment::NewAppointment;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

const INSERT_APPOINTMENT: &str = r#"
    INSERT INTO appointments (
        id, appointment_date, start_minute, time_label, starts_at,
        client_id, client_name, status, created_at
    )
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
    RETURNING id, appointment_date, start_minute, time_label, starts_at,
              client_id, client_name, status, created_at
"#;

async fn insert_appointment<'e, E>(executor: E, appointment: &NewAppointment) -> Result<DbAppointment>
where
    E: Executor<'e, Database = Postgres>,
{
    let row = sqlx::query_as::<_, DbAppointment>(INSERT_APPOINTMENT)
        .bind(Uuid::new_v4())
        .bind(appointment.date)
        .bind(i32::from(appointment.start_minute))
        .bind(&appointment.time)
        .bind(appointment.starts_at)
        .bind(&appointment.client_id)
        .bind(&appointment.client_name)
        .bind(appointment.status.as_str())
        .fetch_one(executor)
        .await?;

    Ok(row)
}

/// Advisory lock key serializing writers of one slot.
pub fn slot_lock_key(date: NaiveDate, start_minute: u16) -> i64 {
    i64::from(date.num_days_from_ce()) * 1440 + i64::from(start_minute)
}

pub async fn create_appointment(
    pool: &Pool<Postgres>,
    appointment: &NewAppointment,
) -> Result<DbAppointment> {
    tracing::debug!(
        "Creating appointment: date={}, start_minute={}, client_id={}",
        appointment.date, appointment.start_minute, appointment.client_id
    );

    insert_appointment(pool, appointment).await
}

pub async fn create_appointment_within_capacity(
    pool: &Pool<Postgres>,
    appointment: &NewAppointment,
    capacity: u32,
) -> Result<Option<DbAppointment>> {
    let mut tx = pool.begin().await?;

    // Held until commit or rollback
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(slot_lock_key(appointment.date, appointment.start_minute))
        .execute(&mut *tx)
        .await?;

    let booked = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM appointments
        WHERE appointment_date = $1 AND start_minute = $2
        "#,
    )
    .bind(appointment.date)
    .bind(i32::from(appointment.start_minute))
    .fetch_one(&mut *tx)
    .await?;

    if booked >= i64::from(capacity) {
        tracing::debug!(
            "Slot full: date={}, start_minute={}, booked={}",
            appointment.date, appointment.start_minute, booked
        );
        tx.rollback().await?;
        return Ok(None);
    }

    let row = insert_appointment(&mut *tx, appointment).await?;
    tx.commit().await?;

    Ok(Some(row))
}

pub async fn get_appointments_between(
    pool: &Pool<Postgres>,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, appointment_date, start_minute, time_label, starts_at,
               client_id, client_name, status, created_at
        FROM appointments
        WHERE appointment_date >= $1 AND appointment_date <= $2
        ORDER BY appointment_date ASC, start_minute ASC, created_at ASC
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn delete_appointment(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
