use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use chrono::NaiveDate;
use salonbook_api::{
    build_router,
    middleware::identity::{CLIENT_ID_HEADER, CLIENT_NAME_HEADER},
    ApiState,
};
use salonbook_core::{
    booking::{BookingMode, BookingService},
    inventory::InventoryService,
    reports::ReportService,
    slots::SalonHours,
};
use salonbook_db::{MemoryAppointmentStore, MemoryInventoryStore};

pub const PRICE_CENTS: i64 = 5000;

/// A server wired to in-memory stores so handlers run end to end without
/// PostgreSQL.
pub struct TestContext {
    pub appointments: Arc<MemoryAppointmentStore>,
    pub inventory: Arc<MemoryInventoryStore>,
    pub server: TestServer,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_hours(SalonHours::default())
    }

    pub fn with_hours(hours: SalonHours) -> Self {
        let appointments = Arc::new(MemoryAppointmentStore::new());
        let inventory = Arc::new(MemoryInventoryStore::new());

        let state = Arc::new(ApiState::new(
            BookingService::new(appointments.clone(), hours, BookingMode::Guarded),
            InventoryService::new(inventory.clone()),
            ReportService::new(appointments.clone(), PRICE_CENTS),
        ));

        let server = TestServer::new(build_router(state)).expect("test server should start");

        Self {
            appointments,
            inventory,
            server,
        }
    }
}

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

pub fn client_headers(id: &str, name: &str) -> [(HeaderName, HeaderValue); 2] {
    [
        (
            HeaderName::from_static(CLIENT_ID_HEADER),
            HeaderValue::from_bytes(id.as_bytes()).unwrap(),
        ),
        (
            HeaderName::from_static(CLIENT_NAME_HEADER),
            HeaderValue::from_bytes(name.as_bytes()).unwrap(),
        ),
    ]
}
