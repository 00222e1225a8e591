//! # ministore-core: Pure Inventory Logic for Mini-Store
//!
//! This crate holds every rule of the store: products, prices, stock and the
//! sales total. It has no I/O; the terminal front end lives in `apps/cli`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mini-Store Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    ministore-cli (apps/cli)                     │   │
//! │  │    menu ──► prompts ──► parse text ──► render results           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ typed values / CoreError              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ministore-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  ledger   │  │   money   │  │   types   │  │ validation│  │   │
//! │  │   │ Inventory │  │   Money   │  │  Product  │  │   rules   │  │   │
//! │  │   │  Ledger   │  │  (cents)  │  │  Receipt  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`ledger`] - The inventory ledger and its operations
//! - [`types`] - Product, statistics, quotes, sale records, receipts
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules
//!
//! ## Example Usage
//!
//! ```rust
//! use ministore_core::{CoreError, InventoryLedger, Money};
//!
//! let mut ledger = InventoryLedger::new();
//! ledger.add_product("Milk", Money::from_cents(250), 10).unwrap();
//!
//! // Names are unique regardless of case
//! let err = ledger.add_product("milk", Money::from_cents(300), 5).unwrap_err();
//! assert!(matches!(err, CoreError::DuplicateName(_)));
//!
//! let stats = ledger.statistics().unwrap();
//! assert_eq!(stats.cheapest.name(), "Milk");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use ledger::InventoryLedger;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest accepted product name, in characters, after trimming.
pub const MAX_NAME_LENGTH: usize = 200;
