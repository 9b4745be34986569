//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                Error Flow in the Dashboard                     │
//! │                                                                │
//! │  Frontend                  Rust Backend                        │
//! │  ────────                  ────────────                        │
//! │                                                                │
//! │  invoke('add_order')                                           │
//! │         │                                                      │
//! │         ▼                                                      │
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │  Command Function: Result<T, ApiError>                   │  │
//! │  │         │                                                │  │
//! │  │  Validation Error? ── ValidationError ──► ApiError ─────►│  │
//! │  │         │                                                │  │
//! │  │  Book Error? ──────── CoreError ────────► ApiError ─────►│  │
//! │  │         │                                                │  │
//! │  │  Success ───────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! │                                                                │
//! │  try { await invoke('add_order', ...) }                        │
//! │  catch (e) {                                                   │
//! │    // e.message = "customerName is required"                   │
//! │    // e.code = "VALIDATION_ERROR"  → shown as a toast          │
//! │  }                                                             │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;
use flora_core::{CoreError, ValidationError};

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Order not found: 042"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Form input validation failed
    ValidationError,

    /// Status pipeline rule violated
    BusinessLogic,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::OrderNotFound(id) => ApiError::not_found("Order", &id),
            CoreError::OrderDelivered { order_id } => ApiError::new(
                ErrorCode::BusinessLogic,
                format!("Order {} is already delivered", order_id),
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors straight to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
