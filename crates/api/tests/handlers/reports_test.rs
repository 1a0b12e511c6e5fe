use axum::http::StatusCode;
use chrono::{Duration, Local, NaiveDate};
use pretty_assertions::assert_eq;
use salonbook_core::models::report::ReportSummary;
use serde_json::json;

use crate::test_utils::{client_headers, TestContext, PRICE_CENTS};

async fn book_on(ctx: &TestContext, client_id: &str, date: NaiveDate, start_minute: u16) {
    let [(id_name, id_value), (name_name, name_value)] = client_headers(client_id, "Client");

    ctx.server
        .post("/api/appointments")
        .add_header(id_name, id_value)
        .add_header(name_name, name_value)
        .json(&json!({ "date": date, "start_minute": start_minute }))
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_daily_report_default_window() {
    let ctx = TestContext::new();
    let today = Local::now().date_naive();
    let two_days_ago = today - Duration::days(2);

    book_on(&ctx, "c-1", today, 540).await;
    book_on(&ctx, "c-2", today, 600).await;
    book_on(&ctx, "c-3", two_days_ago, 540).await;
    // Outside the trailing week
    book_on(&ctx, "c-4", today - Duration::days(30), 540).await;

    let response = ctx.server.get("/api/reports/daily").await;

    response.assert_status_ok();
    let summary: ReportSummary = response.json();
    assert_eq!(summary.window_end, today);
    assert_eq!(summary.window_start, today - Duration::days(7));
    assert_eq!(summary.total_appointments, 3);
    assert_eq!(summary.total_revenue_cents, 3 * PRICE_CENTS);
    assert_eq!(summary.average_daily_revenue_cents, 3 * PRICE_CENTS / 7);

    let per_day: Vec<(NaiveDate, u32)> = summary
        .days
        .iter()
        .map(|day| (day.date, day.appointments))
        .collect();
    assert_eq!(per_day, vec![(two_days_ago, 1), (today, 2)]);
}

#[tokio::test]
async fn test_daily_report_custom_window() {
    let ctx = TestContext::new();
    let today = Local::now().date_naive();

    book_on(&ctx, "c-1", today - Duration::days(20), 540).await;

    let summary: ReportSummary = ctx
        .server
        .get("/api/reports/daily")
        .add_query_param("days", 30)
        .await
        .json();

    assert_eq!(summary.total_appointments, 1);
    assert_eq!(summary.average_daily_revenue_cents, PRICE_CENTS / 30);
}

#[tokio::test]
async fn test_daily_report_rejects_bad_window() {
    let ctx = TestContext::new();

    ctx.server
        .get("/api/reports/daily")
        .add_query_param("days", 0)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    ctx.server
        .get("/api/reports/daily")
        .add_query_param("days", 367)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
