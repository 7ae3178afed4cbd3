//! Typed error handling for DTO validation
//!
//! # Error Categories
//!
//! - [`ValidationError`]: a record failed its rule set, or a payload could not be parsed
//! - [`RequestError`]: the request body never reached decoding (wrong media type, too large)
//! - [`ConfigError`]: validation settings could not be loaded
//!
//! [`DtoError`] wraps all three and knows how to render itself as an HTTP response,
//! so a handler can return it directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use trade_dtos::prelude::*;
//!
//! match supplier.validate() {
//!     Ok(()) => save(supplier),
//!     Err(ValidationError::ValidationFailed { message, .. }) => {
//!         eprintln!("rejected: {}", message);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// The main error type of the crate
#[derive(Debug, thiserror::Error)]
pub enum DtoError {
    /// A record or payload was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body was refused before it could be decoded
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Validation settings could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl DtoError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DtoError::Validation(_) => StatusCode::BAD_REQUEST,
            DtoError::Request(e) => e.status_code(),
            DtoError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DtoError::Validation(e) => e.error_code(),
            DtoError::Request(e) => e.error_code(),
            DtoError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            DtoError::Validation(ValidationError::ValidationFailed {
                record, failures, ..
            }) => Some(serde_json::json!({
                "record": record,
                "fields": failures,
            })),
            _ => None,
        }
    }
}

impl IntoResponse for DtoError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// One or more rules rejected the record.
    ///
    /// `message` is every failing rule's message, in declaration order,
    /// joined with the context's connective.
    #[error("{message}")]
    ValidationFailed {
        record: &'static str,
        message: String,
        failures: Vec<FieldValidationError>,
    },

    /// The payload could not be decoded into a record
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },
}

impl ValidationError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::ValidationFailed { .. } => "VALIDATION_ERROR",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
        }
    }

    /// Individual rule failures, empty for decoding errors
    pub fn failures(&self) -> &[FieldValidationError] {
        match self {
            ValidationError::ValidationFailed { failures, .. } => failures,
            ValidationError::InvalidJson { .. } => &[],
        }
    }
}

/// A single failing rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        ValidationError::InvalidJson {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors raised while reading the request body, before any JSON is parsed
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The body was not sent as `application/json`
    #[error("Unsupported media type: {message}")]
    UnsupportedMediaType { message: String },

    /// The body exceeds the configured size limit
    #[error("Payload too large: {message}")]
    PayloadTooLarge { message: String },

    /// Any other failure to read the body
    #[error("Invalid request body: {message}")]
    InvalidBody { status: StatusCode, message: String },
}

impl RequestError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RequestError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            RequestError::InvalidBody { status, .. } => *status,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::UnsupportedMediaType { .. } => "UNSUPPORTED_MEDIA_TYPE",
            RequestError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            RequestError::InvalidBody { .. } => "INVALID_BODY",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to loading validation settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Settings file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Settings could not be parsed
    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    /// A setting holds an unsupported value
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            message: err.to_string(),
        }
    }
}
