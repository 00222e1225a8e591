//! # Commands
//!
//! Typed operations over [`LedgerState`](crate::state::LedgerState).
//!
//! Each command takes already-parsed values, runs one ledger operation under
//! the lock, logs it, and returns a DTO or an [`ApiError`](crate::error::ApiError).
//! The session renders whatever comes back.
//!
//! - [`product`] - add, list, find, search, statistics
//! - [`sale`] - quote, purchase, receipt

pub mod product;
pub mod sale;

pub use product::{ProductDto, StatisticsDto};
pub use sale::{PurchaseDto, QuoteDto, ReceiptDto};
