use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::error::AppError;
use crate::models::object_id::ObjectId;

/// JSON extractor configuration: malformed or mistyped bodies become a 400
/// carrying the usual error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected JSON body for {}: {}", req.path(), err);
    AppError::BadRequest(format!("Invalid request body: {}", err)).into()
}

/// Parses an identifier taken from a path segment or body field and returns
/// its canonical string form, the form references are stored in.
pub fn canonical_id(raw: &str) -> Result<String, AppError> {
    Ok(ObjectId::parse(raw.trim())?.to_hex())
}
