use actix_web::{error::JsonPayloadError, HttpRequest};

use crate::core::error::AppError;

/// Maps malformed JSON bodies onto the standard error envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected request body");
    AppError::validation(err.to_string()).into()
}
