//! Typed error handling for the promotrack service
//!
//! This module provides an error type hierarchy that enables clients to
//! handle errors specifically rather than dealing with generic
//! `anyhow::Error` types.
//!
//! # Error Categories
//!
//! - [`OrderError`]: Errors related to order operations
//! - [`ValidationError`]: Errors related to input validation
//! - [`ConfigError`]: Errors related to configuration parsing and validation
//! - [`StorageError`]: Errors related to the storage backend
//! - [`RequestError`]: Errors related to HTTP requests

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

use crate::core::order::OrderId;

/// The main error type for the promotrack service
///
/// This enum encompasses all possible errors that can occur within the
/// service. Each variant contains a more specific error type for that
/// category.
#[derive(Debug)]
pub enum TrackerError {
    /// Order-related errors (lookup, stage mutation)
    Order(OrderError),

    /// Validation errors
    Validation(ValidationError),

    /// Configuration errors
    Config(ConfigError),

    /// Storage backend errors
    Storage(StorageError),

    /// HTTP/Request errors
    Request(RequestError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerError::Order(e) => write!(f, "{}", e),
            TrackerError::Validation(e) => write!(f, "{}", e),
            TrackerError::Config(e) => write!(f, "{}", e),
            TrackerError::Storage(e) => write!(f, "{}", e),
            TrackerError::Request(e) => write!(f, "{}", e),
            TrackerError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for TrackerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrackerError::Order(e) => Some(e),
            TrackerError::Validation(e) => Some(e),
            TrackerError::Config(e) => Some(e),
            TrackerError::Storage(e) => Some(e),
            TrackerError::Request(e) => Some(e),
            TrackerError::Internal(_) => None,
        }
    }
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

impl TrackerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TrackerError::Order(e) => e.status_code(),
            TrackerError::Validation(_) => StatusCode::BAD_REQUEST,
            TrackerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TrackerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TrackerError::Request(e) => e.status_code(),
            TrackerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            TrackerError::Order(e) => e.error_code(),
            TrackerError::Validation(_) => "VALIDATION_ERROR",
            TrackerError::Config(_) => "CONFIG_ERROR",
            TrackerError::Storage(_) => "STORAGE_ERROR",
            TrackerError::Request(e) => e.error_code(),
            TrackerError::Internal(_) => "INTERNAL_ERROR",
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

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            TrackerError::Order(OrderError::NotFound { id }) => Some(serde_json::json!({
                "id": id.to_string()
            })),
            TrackerError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Order Errors
// =============================================================================

/// Errors related to order operations
#[derive(Debug)]
pub enum OrderError {
    /// Order was not found
    NotFound { id: OrderId },

    /// Stage index outside the fixed pipeline
    StageOutOfRange { index: usize },

    /// Staff member is not part of the roster
    UnknownStaff { id: u32 },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::NotFound { id } => {
                write!(f, "Order '{}' not found", id)
            }
            OrderError::StageOutOfRange { index } => {
                write!(f, "Stage index {} is outside the pipeline (0..5)", index)
            }
            OrderError::UnknownStaff { id } => {
                write!(f, "Staff member with id {} is not in the roster", id)
            }
        }
    }
}

impl std::error::Error for OrderError {}

impl OrderError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::NotFound { .. } => StatusCode::NOT_FOUND,
            OrderError::StageOutOfRange { .. } => StatusCode::BAD_REQUEST,
            OrderError::UnknownStaff { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::NotFound { .. } => "ORDER_NOT_FOUND",
            OrderError::StageOutOfRange { .. } => "STAGE_OUT_OF_RANGE",
            OrderError::UnknownStaff { .. } => "UNKNOWN_STAFF",
        }
    }
}

impl From<OrderError> for TrackerError {
    fn from(err: OrderError) -> Self {
        TrackerError::Order(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// Single field validation error
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    FieldErrors(Vec<FieldValidationError>),

    /// Invalid JSON format
    InvalidJson { message: String },
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for TrackerError {
    fn from(err: ValidationError) -> Self {
        TrackerError::Validation(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Missing required field in configuration
    MissingField { field: String, context: String },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::MissingField { field, context } => {
                write!(f, "Missing required field '{}' in {}", field, context)
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for TrackerError {
    fn from(err: ConfigError) -> Self {
        TrackerError::Config(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the storage backend
#[derive(Debug)]
pub enum StorageError {
    /// Failed to acquire a lock on the shared state
    LockPoisoned { message: String },

    /// Data integrity error
    IntegrityError { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned { message } => {
                write!(f, "Failed to acquire lock: {}", message)
            }
            StorageError::IntegrityError { message } => {
                write!(f, "Data integrity error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for TrackerError {
    fn from(err: StorageError) -> Self {
        TrackerError::Storage(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug)]
pub enum RequestError {
    /// Invalid path format
    InvalidPath { path: String, message: String },

    /// Invalid request body
    InvalidBody { message: String },

    /// Feature exists as an endpoint but has no implementation
    NotImplemented { feature: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidPath { path, message } => {
                write!(f, "Invalid path '{}': {}", path, message)
            }
            RequestError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
            RequestError::NotImplemented { feature } => {
                write!(f, "{} is not implemented", feature)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidPath { .. } => StatusCode::BAD_REQUEST,
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            RequestError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidPath { .. } => "INVALID_PATH",
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::NotImplemented { .. } => "NOT_IMPLEMENTED",
        }
    }
}

impl From<RequestError> for TrackerError {
    fn from(err: RequestError) -> Self {
        TrackerError::Request(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for TrackerError {
    fn from(err: serde_yaml::Error) -> Self {
        TrackerError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

/// Convert from anyhow::Error for backwards compatibility
impl From<anyhow::Error> for TrackerError {
    fn from(err: anyhow::Error) -> Self {
        TrackerError::Internal(err.to_string())
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for promotrack operations
pub type TrackerResult<T> = Result<T, TrackerError>;

// =============================================================================
// Tests
// =============================================================================
