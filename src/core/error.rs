//! Typed error handling for campus-hub
//!
//! Every fallible operation in the crate returns [`CampusResult`]. The error
//! enum maps each failure class onto an HTTP status and a stable error code,
//! and renders the shared error envelope:
//!
//! ```json
//! { "status": "error", "code": "RECORD_NOT_FOUND", "message": "news with id '...' not found" }
//! ```
//!
//! # Error Categories
//!
//! - [`ValidationError`]: missing/malformed fields, bounds, unknown categories (400)
//! - [`RecordError`]: record or comment ids that do not resolve (404)
//! - [`RegistrationError`]: capacity ceiling reached (400, distinct code)
//! - [`RequestError`]: transport-level problems such as bad ids or bodies
//! - [`StorageError`]: backend failures, logged and reported generically (500)
//! - [`ConfigError`]: configuration loading problems

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for campus-hub
#[derive(Debug, Error)]
pub enum CampusError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error envelope returned to HTTP clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always `"error"`
    pub status: &'static str,
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CampusError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CampusError::Validation(_) => StatusCode::BAD_REQUEST,
            CampusError::Record(_) => StatusCode::NOT_FOUND,
            CampusError::Registration(_) => StatusCode::BAD_REQUEST,
            CampusError::Request(e) => e.status_code(),
            CampusError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CampusError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CampusError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CampusError::Validation(_) => "VALIDATION_ERROR",
            CampusError::Record(e) => e.error_code(),
            CampusError::Registration(e) => e.error_code(),
            CampusError::Request(e) => e.error_code(),
            CampusError::Storage(_) => "STORAGE_ERROR",
            CampusError::Config(_) => "CONFIG_ERROR",
            CampusError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the message may be shown to the caller verbatim
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Convert to an error response
    ///
    /// Server-side failures never leak their internal detail.
    pub fn to_response(&self) -> ErrorResponse {
        let message = if self.is_client_error() {
            self.to_string()
        } else {
            "An internal error occurred, please try again later".to_string()
        };

        ErrorResponse {
            status: "error",
            code: self.error_code().to_string(),
            message,
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            CampusError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            CampusError::Registration(RegistrationError::CapacityExceeded {
                capacity, ..
            }) => Some(serde_json::json!({ "capacity": capacity })),
            _ => None,
        }
    }
}

impl IntoResponse for CampusError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Single field validation error
    #[error("{field}: {message}")]
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    #[error("Validation failed: {}", join_fields(.0))]
    FieldErrors(Vec<FieldValidationError>),

    /// Invalid JSON body
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

fn join_fields(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::FieldError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Names of the offending fields, in report order
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::FieldError { field, .. } => vec![field.as_str()],
            ValidationError::FieldErrors(errors) => {
                errors.iter().map(|e| e.field.as_str()).collect()
            }
            ValidationError::InvalidJson { .. } => vec![],
        }
    }
}

// =============================================================================
// Record Errors
// =============================================================================

/// Ids that do not resolve
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("{collection} with id '{id}' not found")]
    NotFound { collection: String, id: Uuid },

    #[error("Comment '{comment_id}' not found on {collection} '{parent_id}'")]
    CommentNotFound {
        collection: String,
        parent_id: Uuid,
        comment_id: Uuid,
    },
}

impl RecordError {
    pub fn not_found(collection: &str, id: Uuid) -> Self {
        RecordError::NotFound {
            collection: collection.to_string(),
            id,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RecordError::NotFound { .. } => "RECORD_NOT_FOUND",
            RecordError::CommentNotFound { .. } => "COMMENT_NOT_FOUND",
        }
    }
}

// =============================================================================
// Registration Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Registration failed: activity '{activity_id}' is full ({capacity} places)")]
    CapacityExceeded { activity_id: Uuid, capacity: u32 },
}

impl RegistrationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RegistrationError::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid id format: '{id}'")]
    InvalidId { id: String },

    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    #[error("Missing required parameter: {parameter}")]
    MissingParameter { parameter: String },

    #[error("Unknown action: '{action}'")]
    UnknownAction { action: String },

    #[error("Method {method} not allowed for action '{action}'")]
    MethodNotAllowed { method: String, action: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            RequestError::MissingParameter { .. } => StatusCode::BAD_REQUEST,
            RequestError::UnknownAction { .. } => StatusCode::NOT_FOUND,
            RequestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidId { .. } => "INVALID_ID",
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::MissingParameter { .. } => "MISSING_PARAMETER",
            RequestError::UnknownAction { .. } => "UNKNOWN_ACTION",
            RequestError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to connect to {backend}: {message}")]
    ConnectionError { backend: String, message: String },

    #[error("{backend} query error: {message}")]
    QueryError { backend: String, message: String },

    #[error("Transaction error: {message}")]
    TransactionError { message: String },

    #[error("Data integrity error: {message}")]
    IntegrityError { message: String },

    #[error("Storage lock poisoned: {message}")]
    LockPoisoned { message: String },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_deref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for CampusError {
    fn from(err: serde_json::Error) -> Self {
        CampusError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for CampusError {
    fn from(err: serde_yaml::Error) -> Self {
        CampusError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

#[cfg(feature = "mysql")]
impl From<sqlx::Error> for CampusError {
    fn from(err: sqlx::Error) -> Self {
        CampusError::Storage(StorageError::QueryError {
            backend: "MySQL".to_string(),
            message: err.to_string(),
        })
    }
}

impl From<anyhow::Error> for CampusError {
    fn from(err: anyhow::Error) -> Self {
        CampusError::Internal(err.to_string())
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for campus-hub operations
pub type CampusResult<T> = Result<T, CampusError>;
