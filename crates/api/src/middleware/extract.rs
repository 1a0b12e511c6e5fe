//! Extractor wrappers whose rejections are reported as [`AppError`], so a
//! malformed query string, path or body gets the same `{"error": ...}` JSON
//! response as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use super::error_handling::AppError;

/// [`axum::extract::Query`] rejecting with a 400 JSON body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// [`axum::extract::Path`] rejecting with a 400 JSON body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// [`axum::Json`] rejecting with a 400 JSON body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
