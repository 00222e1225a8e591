//! # Error Types
//!
//! Domain-specific error types for ministore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ministore-core errors (this file)                                     │
//! │  ├── CoreError        - Ledger operation failures                      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  ├── InputError       - Text that could not be parsed                  │
//! │  └── ApiError         - What the terminal renders                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every ledger operation either succeeds or fails with exactly one
//! [`CoreError`]. None of them is fatal; the caller decides whether to ask
//! the user again.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Ledger operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No product matches the name (case-insensitive).
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A product with the same name (case-insensitive) already exists.
    ///
    /// Carries the name as it is stored, not as it was typed.
    #[error("Product '{0}' already exists in the inventory")]
    DuplicateName(String),

    /// Purchase quantity exceeds the stock on hand.
    ///
    /// ## User Workflow
    /// ```text
    /// Buy "bread" (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Bread", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Insufficient stock. Available stock: 3"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Purchase quantity is zero or negative.
    #[error("Quantity must be positive, got {requested}")]
    InvalidQuantity { requested: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Coarse classification of a [`CoreError`].
///
/// Callers that only care about the category (retry the prompt, show a
/// "not found" message, ...) match on this instead of the full variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    DuplicateName,
    ProductNotFound,
    InsufficientStock,
}

impl CoreError {
    /// Returns the category of this error.
    ///
    /// `InvalidQuantity` is an invalid-input error like any other bad value.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::ProductNotFound(_) => ErrorKind::ProductNotFound,
            CoreError::DuplicateName(_) => ErrorKind::DuplicateName,
            CoreError::InsufficientStock { .. } => ErrorKind::InsufficientStock,
            CoreError::InvalidQuantity { .. } | CoreError::Validation(_) => {
                ErrorKind::InvalidInput
            }
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any ledger state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: String },

    /// Arithmetic on the value would not fit in the money range.
    #[error("{field} is too large")]
    Overflow { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
