//! # Client Identity
//!
//! Authentication happens upstream: the identity proxy in front of the API
//! forwards the signed-in client's identifier and display name as request
//! headers. This extractor turns them into a [`ClientIdentity`] and rejects
//! requests where either is missing. There is no fallback identity.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use salonbook_core::{errors::BookingError, models::appointment::ClientIdentity};

use super::error_handling::AppError;

pub const CLIENT_ID_HEADER: &str = "x-client-id";
pub const CLIENT_NAME_HEADER: &str = "x-client-name";

/// The calling client, extracted from identity headers.
#[derive(Debug, Clone)]
pub struct Client(pub ClientIdentity);

#[async_trait]
impl<S> FromRequestParts<S> for Client
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let client_id = header_value(&parts.headers, CLIENT_ID_HEADER)?;
        let client_name = header_value(&parts.headers, CLIENT_NAME_HEADER)?;

        Ok(Client(ClientIdentity::new(client_id, client_name)?))
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Result<String, AppError> {
    let value = headers.get(name).ok_or_else(|| {
        AppError(BookingError::Authentication(format!("Missing {} header", name)))
    })?;

    // Display names may carry non-ASCII characters, sent as raw UTF-8
    std::str::from_utf8(value.as_bytes())
        .map(str::to_string)
        .map_err(|_| {
            AppError(BookingError::Authentication(format!(
                "{} header is not valid UTF-8",
                name
            )))
        })
}
