//! # SalonBook API
//!
//! The API crate provides the web server for the SalonBook booking service.
//! It exposes slot availability, appointment booking, the administrator's
//! day overview, inventory management and revenue reports.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate HTTP requests into calls on the core services
//! - **Middleware**: Client identity extraction and error mapping
//! - **Config**: Handle environment and application configuration
//!
//! Business rules live in `salonbook-core`; storage in `salonbook-db`.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Identity extraction and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    Router,
};
use eyre::Result;
use salonbook_core::{
    booking::BookingService,
    inventory::InventoryService,
    reports::ReportService,
    store::{AppointmentStore, InventoryStore},
};
use salonbook_db::{DbPool, PgAppointmentStore, PgInventoryStore};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use middleware::identity::{CLIENT_ID_HEADER, CLIENT_NAME_HEADER};

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```rust,ignore
/// let state = Arc::new(ApiState::with_postgres(db_pool, &config));
/// let app = build_router(state);
/// ```
pub struct ApiState {
    pub bookings: BookingService,
    pub inventory: InventoryService,
    pub reports: ReportService,
}

impl ApiState {
    pub fn new(bookings: BookingService, inventory: InventoryService, reports: ReportService) -> Self {
        Self {
            bookings,
            inventory,
            reports,
        }
    }

    /// Wires the services to PostgreSQL-backed stores.
    pub fn with_postgres(db_pool: DbPool, config: &config::ApiConfig) -> Self {
        let appointments: Arc<dyn AppointmentStore> =
            Arc::new(PgAppointmentStore::new(db_pool.clone()));
        let inventory: Arc<dyn InventoryStore> = Arc::new(PgInventoryStore::new(db_pool));

        Self::new(
            BookingService::new(
                appointments.clone(),
                config.salon_hours,
                config.booking_mode,
            ),
            InventoryService::new(inventory),
            ReportService::new(appointments, config.price_per_appointment_cents),
        )
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot availability
        .merge(routes::slots::routes())
        // Booking and the administrator's day view
        .merge(routes::appointments::routes())
        // Product inventory
        .merge(routes::inventory::routes())
        // Revenue reports
        .merge(routes::reports::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and database connection
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and salon settings
/// * `db_pool` - PostgreSQL connection pool for database operations
///
/// # Example
///
/// ```rust,ignore
/// let config = ApiConfig::from_env()?;
/// let db_pool = salonbook_db::create_pool(&config.database_url).await?;
/// start_server(config, db_pool).await?;
/// ```
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(
        opening_hour = config.salon_hours.opening_hour(),
        closing_hour = config.salon_hours.closing_hour(),
        capacity = config.salon_hours.capacity(),
        mode = %config.booking_mode,
        "Salon configuration loaded"
    );

    let state = Arc::new(ApiState::with_postgres(db_pool, &config));
    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(CLIENT_ID_HEADER),
            HeaderName::from_static(CLIENT_NAME_HEADER),
        ])
        .allow_origin(allowed)
        .allow_credentials(true)
}
