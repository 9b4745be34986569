//! # Error Types
//!
//! Domain-specific error types for flora-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                        Error Types                             │
//! │                                                                │
//! │  flora-core errors (this file)                                 │
//! │  ├── CoreError        - Order book operation failures          │
//! │  └── ValidationError  - Form input validation failures         │
//! │                                                                │
//! │  Tauri API errors (in app)                                     │
//! │  └── ApiError         - What the frontend sees (serialized)    │
//! │                                                                │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend       │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Order book operation errors.
///
/// These represent business rule violations. They are caught at the command
/// layer and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No order with the given id exists in the book.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// The order is already delivered; the pipeline has no further stage.
    #[error("Order {order_id} is already delivered")]
    OrderDelivered { order_id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before anything reaches the order book.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., unparsable date or amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Monetary value must not be negative.
    #[error("{field} must not be negative")]
    NegativeAmount { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OrderNotFound("042".to_string());
        assert_eq!(err.to_string(), "Order not found: 042");

        let err = CoreError::OrderDelivered {
            order_id: "003".to_string(),
        };
        assert_eq!(err.to_string(), "Order 003 is already delivered");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "customerName".to_string(),
        };
        assert_eq!(err.to_string(), "customerName is required");

        let err = ValidationError::TooLong {
            field: "arrangement".to_string(),
            max: 500,
        };
        assert_eq!(err.to_string(), "arrangement must be at most 500 characters");

        let err = ValidationError::InvalidFormat {
            field: "deliveryDate".to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "deliveryDate has invalid format: expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "phone".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
