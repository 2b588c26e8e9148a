use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::core::AppError;

/// Largest request body the calculator accepts
const MAX_PAYLOAD_BYTES: usize = 16 * 1024;

/// JSON extractor configuration with the calculator's error envelope
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_PAYLOAD_BYTES)
        .error_handler(json_error_handler)
}

/// Map body parsing failures to `InvalidInput` so they share the 400 response shape
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let error = AppError::invalid_input(err.to_string());
    log_error(req, &error);
    error.into()
}

pub fn log_error(req: &HttpRequest, error: &AppError) {
    tracing::warn!(
        method = %req.method(),
        path = %req.path(),
        error = %error,
        "Rejected request body"
    );
}
