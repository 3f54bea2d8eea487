//! HTTP mapping for domain errors.

use actix_web::{error::ResponseError, http::StatusCode, web, HttpResponse};
use pb_core::error::AppError;
use thiserror::Error;

/// Message returned when an id path segment is not an integer.
pub const NUMERIC_ID_EXPECTED: &str = "Validation failed (numeric string is expected)";

/// Body message for every 5xx response.
pub const INTERNAL_ERROR: &str = "internal server error";

#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed transport input, rejected before reaching the service
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    App(#[from] AppError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::App(AppError::NotFound(..)) => StatusCode::NOT_FOUND,
            ApiError::App(AppError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            ApiError::App(AppError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // Backend details stay in the log.
        let message = if status.is_server_error() {
            log::error!("{}", self);
            INTERNAL_ERROR.to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status).json(serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        }))
    }
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        log::debug!("rejected path {}: {}", req.path(), err);
        ApiError::BadRequest(NUMERIC_ID_EXPECTED.to_string()).into()
    })
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(err.to_string()).into()
    })
}
