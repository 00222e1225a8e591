//! # Sale Commands
//!
//! Quoting, committing purchases, and the end-of-session receipt.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quote_purchase(name, qty)                                              │
//! │       │  read lock, nothing changes                                     │
//! │       ▼                                                                 │
//! │  QuoteDto { subtotal, remainingStock } ──► "Confirm the purchase?"     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  purchase(name, qty)                                                    │
//! │       │  write lock, checks run again against current stock            │
//! │       ▼                                                                 │
//! │  PurchaseDto { subtotal, totalSales }                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The quote is advisory. Only `purchase` changes stock, and it re-checks
//! everything under the write lock.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use ministore_core::{CoreError, Money, PurchaseQuote, Receipt};

use crate::error::ApiError;
use crate::state::LedgerState;

/// What a purchase would cost, before committing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDto {
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub subtotal_cents: i64,
    pub remaining_stock: i64,
}

impl From<PurchaseQuote> for QuoteDto {
    fn from(quote: PurchaseQuote) -> Self {
        QuoteDto {
            product_name: quote.product_name,
            quantity: quote.quantity,
            unit_price_cents: quote.unit_price.cents(),
            subtotal_cents: quote.subtotal.cents(),
            remaining_stock: quote.remaining_stock,
        }
    }
}

/// A committed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDto {
    pub product_name: String,
    pub quantity: i64,
    pub subtotal_cents: i64,
    pub remaining_stock: i64,
    pub total_sales_cents: i64,
}

impl PurchaseDto {
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }
}

/// End-of-session summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDto {
    pub total_sales_cents: i64,
    pub purchase_count: usize,
    pub units_sold: i64,
    pub opened_at: DateTime<Utc>,
    pub issued_at: DateTime<Utc>,
}

impl ReceiptDto {
    pub fn total_sales(&self) -> Money {
        Money::from_cents(self.total_sales_cents)
    }
}

impl From<Receipt> for ReceiptDto {
    fn from(receipt: Receipt) -> Self {
        ReceiptDto {
            total_sales_cents: receipt.total_sales.cents(),
            purchase_count: receipt.purchase_count,
            units_sold: receipt.units_sold,
            opened_at: receipt.opened_at,
            issued_at: receipt.issued_at,
        }
    }
}

/// Checks a purchase without committing it.
pub fn quote_purchase(state: &LedgerState, name: &str, quantity: i64) -> Result<QuoteDto, ApiError> {
    state
        .with_ledger(|ledger| ledger.quote(name, quantity))
        .map(QuoteDto::from)
        .map_err(|e| {
            debug!(name, quantity, error = %e, "Quote rejected");
            ApiError::from(e)
        })
}

/// Sells `quantity` units of the named product.
///
/// ## Errors
/// - `NOT_FOUND` when no product has that name
/// - `VALIDATION_ERROR` for a quantity of zero or less
/// - `INSUFFICIENT_STOCK` with the available stock
pub fn purchase(state: &LedgerState, name: &str, quantity: i64) -> Result<PurchaseDto, ApiError> {
    let result = state.with_ledger_mut(|ledger| {
        let subtotal = ledger.purchase(name, quantity)?;
        let product = ledger
            .get(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.trim().to_string()))?;

        Ok::<_, CoreError>(PurchaseDto {
            product_name: product.name().to_string(),
            quantity,
            subtotal_cents: subtotal.cents(),
            remaining_stock: product.stock(),
            total_sales_cents: ledger.total_sales().cents(),
        })
    });

    match result {
        Ok(sale) => {
            info!(
                product = %sale.product_name,
                quantity,
                subtotal = %sale.subtotal(),
                remaining = sale.remaining_stock,
                "Purchase committed"
            );
            Ok(sale)
        }
        Err(e) => {
            debug!(name, quantity, error = %e, "Purchase rejected");
            Err(e.into())
        }
    }
}

/// Summary of everything sold so far.
pub fn get_receipt(state: &LedgerState) -> ReceiptDto {
    state.with_ledger(|ledger| ReceiptDto::from(ledger.receipt()))
}

/// Accumulated sales of the session.
pub fn total_sales(state: &LedgerState) -> Money {
    state.with_ledger(|ledger| ledger.total_sales())
}
