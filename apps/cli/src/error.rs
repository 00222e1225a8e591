//! # API Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Mini-Store                             │
//! │                                                                         │
//! │  Typed text ──► input::parse_* ──► InputError ─────────┐               │
//! │                        │                               │               │
//! │                        ▼                               ▼               │
//! │                 commands::* ──► CoreError ──────────► ApiError         │
//! │                        │                               │               │
//! │                        ▼                               ▼               │
//! │                     Success                 text: message              │
//! │                                             json: {"code", "message"}  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is shown to the user; the session decides whether to ask
//! again.

use serde::Serialize;
use std::fmt;

use ministore_core::{CoreError, ValidationError};

use crate::input::InputError;

/// Error returned from commands.
///
/// ## Serialization
/// What JSON output mode prints when a command fails:
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Insufficient stock. Available stock: 3",
///   "available": 3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message for display
    pub message: String,

    /// Stock on hand, for insufficient-stock errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<i64>,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No product with that name
    NotFound,

    /// Malformed or out-of-range input
    ValidationError,

    /// Product name already taken
    Duplicate,

    /// Not enough units on hand
    InsufficientStock,

    /// A result that could not be rendered
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            available: None,
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error (rendering failures).
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts ledger errors to the messages the clerk sees.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(name) => ApiError::new(
                ErrorCode::NotFound,
                format!("The product '{}' does not exist.", name),
            ),
            CoreError::DuplicateName(name) => ApiError::new(
                ErrorCode::Duplicate,
                format!("The product '{}' already exists in the inventory.", name),
            ),
            CoreError::InsufficientStock { available, .. } => ApiError {
                code: ErrorCode::InsufficientStock,
                message: format!("Insufficient stock. Available stock: {}", available),
                available: Some(available),
            },
            CoreError::InvalidQuantity { .. } => {
                ApiError::validation("The quantity must be a positive number.")
            }
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        let message = match &err {
            ValidationError::Required { field } if field == "name" => {
                "Name cannot be empty.".to_string()
            }
            ValidationError::MustBePositive { field } => {
                format!("The {} must be a positive number.", field)
            }
            ValidationError::MustBeNonNegative { field } => format!(
                "The {} cannot be negative. Please enter a non-negative integer.",
                field
            ),
            _ => format!("Invalid input: {}.", err),
        };
        ApiError::validation(message)
    }
}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_stock_carries_available() {
        let err = ApiError::from(CoreError::InsufficientStock {
            name: "Bread".into(),
            available: 3,
            requested: 5,
        });
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(err.available, Some(3));
        assert_eq!(err.message, "Insufficient stock. Available stock: 3");
    }

    #[test]
    fn test_core_error_codes() {
        assert_eq!(
            ApiError::from(CoreError::ProductNotFound("Milk".into())).code,
            ErrorCode::NotFound
        );
        assert_eq!(
            ApiError::from(CoreError::DuplicateName("Milk".into())).code,
            ErrorCode::Duplicate
        );
        assert_eq!(
            ApiError::from(CoreError::InvalidQuantity { requested: 0 }).code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn test_validation_messages() {
        let err = ApiError::from(ValidationError::MustBePositive {
            field: "price".into(),
        });
        assert_eq!(err.message, "The price must be a positive number.");

        let err = ApiError::from(ValidationError::Required {
            field: "name".into(),
        });
        assert_eq!(err.message, "Name cannot be empty.");
    }

    #[test]
    fn test_serialization() {
        let err = ApiError::from(CoreError::InsufficientStock {
            name: "Bread".into(),
            available: 3,
            requested: 5,
        });
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INSUFFICIENT_STOCK");
        assert_eq!(json["available"], 3);

        let json = serde_json::to_value(ApiError::internal("boom")).unwrap();
        assert_eq!(json["code"], "INTERNAL");
        assert!(json.get("available").is_none());
    }
}
