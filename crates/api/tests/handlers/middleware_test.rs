use axum::{http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use rstest::rstest;
use salonbook_api::middleware::error_handling::AppError;
use salonbook_core::errors::BookingError;

#[rstest]
#[case(BookingError::NotFound("missing".to_string()), StatusCode::NOT_FOUND)]
#[case(BookingError::Validation("bad input".to_string()), StatusCode::BAD_REQUEST)]
#[case(BookingError::Authentication("who are you".to_string()), StatusCode::UNAUTHORIZED)]
#[case(
    BookingError::CapacityExceeded {
        date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        time: "9:00 AM".to_string(),
    },
    StatusCode::CONFLICT
)]
#[case(BookingError::Database(eyre::eyre!("connection reset")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: BookingError, #[case] expected: StatusCode) {
    let response = AppError(error).into_response();

    assert_eq!(response.status(), expected);
}

#[test]
fn test_store_error_converts_to_database_error() {
    let error: AppError = eyre::eyre!("pool timed out").into();

    assert!(matches!(error.0, BookingError::Database(_)));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
