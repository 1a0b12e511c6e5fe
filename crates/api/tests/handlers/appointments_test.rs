use axum::http::{HeaderName, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use salonbook_api::middleware::identity::{CLIENT_ID_HEADER, CLIENT_NAME_HEADER};
use salonbook_core::models::appointment::{Appointment, AppointmentStatus, DayAppointmentsResponse};
use serde_json::{json, Value};

use crate::test_utils::{client_headers, test_date, TestContext};

async fn book(ctx: &TestContext, client_id: &str, client_name: &str, start_minute: u16) -> axum_test::TestResponse {
    let [(id_name, id_value), (name_name, name_value)] = client_headers(client_id, client_name);

    ctx.server
        .post("/api/appointments")
        .add_header(id_name, id_value)
        .add_header(name_name, name_value)
        .json(&json!({ "date": test_date(), "start_minute": start_minute }))
        .await
}

#[test_log::test(tokio::test)]
async fn test_book_appointment_success() {
    let ctx = TestContext::new();

    let response = book(&ctx, "c-1", "Ada", 540).await;

    response.assert_status(StatusCode::CREATED);
    let appointment: Appointment = response.json();
    assert_eq!(appointment.date, test_date());
    assert_eq!(appointment.start_minute, 540);
    assert_eq!(appointment.time, "9:00 AM");
    assert_eq!(appointment.client_id, "c-1");
    assert_eq!(appointment.client_name, "Ada");
    assert_eq!(appointment.status, AppointmentStatus::Booked);

    assert_eq!(ctx.appointments.all().await.len(), 1);
}

#[tokio::test]
async fn test_book_appointment_requires_identity() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/appointments")
        .json(&json!({ "date": test_date(), "start_minute": 540 }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains(CLIENT_ID_HEADER));
    assert!(ctx.appointments.all().await.is_empty());
}

#[tokio::test]
async fn test_book_appointment_with_accented_name() {
    let ctx = TestContext::new();

    let response = book(&ctx, "c-7", "Zoë Núñez", 600).await;

    response.assert_status(StatusCode::CREATED);
    let appointment: Appointment = response.json();
    assert_eq!(appointment.client_name, "Zoë Núñez");

    let day: DayAppointmentsResponse = ctx
        .server
        .get("/api/appointments")
        .add_query_param("date", test_date())
        .await
        .json();
    assert_eq!(day.groups[0].appointments[0].client_name, "Zoë Núñez");
}

#[tokio::test]
async fn test_book_appointment_rejects_invalid_utf8_name() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/appointments")
        .add_header(
            HeaderName::from_static(CLIENT_ID_HEADER),
            HeaderValue::from_static("c-1"),
        )
        .add_header(
            HeaderName::from_static(CLIENT_NAME_HEADER),
            HeaderValue::from_bytes(&[0x5a, 0xff, 0x65]).unwrap(),
        )
        .json(&json!({ "date": test_date(), "start_minute": 540 }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(ctx.appointments.all().await.is_empty());
}

#[tokio::test]
async fn test_book_appointment_rejects_blank_identity() {
    let ctx = TestContext::new();

    let response = book(&ctx, "c-1", "   ", 540).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_book_appointment_full_slot_conflicts() {
    let ctx = TestContext::new();

    book(&ctx, "c-1", "Ada", 540).await.assert_status(StatusCode::CREATED);
    book(&ctx, "c-2", "Grace", 540).await.assert_status(StatusCode::CREATED);

    let response = book(&ctx, "c-3", "Linus", 540).await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "Slot 9:00 AM on 2026-03-02 is fully booked");
    assert_eq!(ctx.appointments.all().await.len(), 2);
}

#[tokio::test]
async fn test_book_appointment_by_label() {
    let ctx = TestContext::new();
    let [(id_name, id_value), (name_name, name_value)] = client_headers("c-1", "Ada");

    let response = ctx
        .server
        .post("/api/appointments")
        .add_header(id_name, id_value)
        .add_header(name_name, name_value)
        .json(&json!({ "date": test_date(), "time": "2:00 PM" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let appointment: Appointment = response.json();
    assert_eq!(appointment.start_minute, 840);
    assert_eq!(appointment.time, "2:00 PM");
}

#[tokio::test]
async fn test_book_appointment_unknown_slot() {
    let ctx = TestContext::new();

    // 9:30 is not a slot start with hourly slots, 18:00 is closing time
    book(&ctx, "c-1", "Ada", 570).await.assert_status(StatusCode::BAD_REQUEST);
    book(&ctx, "c-1", "Ada", 1080).await.assert_status(StatusCode::BAD_REQUEST);

    assert!(ctx.appointments.all().await.is_empty());
}

#[tokio::test]
async fn test_list_appointments_grouped_by_slot() {
    let ctx = TestContext::new();

    book(&ctx, "c-1", "Ada", 780).await.assert_status(StatusCode::CREATED);
    book(&ctx, "c-2", "Grace", 540).await.assert_status(StatusCode::CREATED);
    book(&ctx, "c-3", "Linus", 780).await.assert_status(StatusCode::CREATED);

    let response = ctx
        .server
        .get("/api/appointments")
        .add_query_param("date", test_date())
        .await;

    response.assert_status_ok();
    let day: DayAppointmentsResponse = response.json();
    assert_eq!(day.date, test_date());

    let groups: Vec<(&str, Vec<&str>)> = day
        .groups
        .iter()
        .map(|group| {
            (
                group.time.as_str(),
                group
                    .appointments
                    .iter()
                    .map(|a| a.client_name.as_str())
                    .collect(),
            )
        })
        .collect();
    assert_eq!(
        groups,
        vec![("9:00 AM", vec!["Grace"]), ("1:00 PM", vec!["Ada", "Linus"])]
    );
}

#[tokio::test]
async fn test_list_appointments_empty_day() {
    let ctx = TestContext::new();

    let day: DayAppointmentsResponse = ctx
        .server
        .get("/api/appointments")
        .add_query_param("date", test_date())
        .await
        .json();

    assert!(day.groups.is_empty());
}

#[tokio::test]
async fn test_cancel_appointment_frees_spot() {
    let ctx = TestContext::new();

    let first: Appointment = book(&ctx, "c-1", "Ada", 540).await.json();
    book(&ctx, "c-2", "Grace", 540).await.assert_status(StatusCode::CREATED);
    book(&ctx, "c-3", "Linus", 540).await.assert_status(StatusCode::CONFLICT);

    ctx.server
        .delete(&format!("/api/appointments/{}", first.id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    book(&ctx, "c-3", "Linus", 540).await.assert_status(StatusCode::CREATED);

    // Already gone
    ctx.server
        .delete(&format!("/api/appointments/{}", first.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
