/// Extractors reporting rejections as `AppError`
pub mod extract;
/// Maps domain errors to HTTP responses
pub mod error_handling;
/// Client identity forwarded by the upstream identity proxy
pub mod identity;
