//! # Domain Types
//!
//! Records produced and stored by the inventory ledger.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   SaleRecord    │   │    Receipt      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  product_name   │   │  total_sales    │       │
//! │  │  price (Money)  │   │  quantity       │   │  purchase_count │       │
//! │  │  stock          │   │  subtotal       │   │  units_sold     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  PriceStats     │   │ PurchaseQuote   │                             │
//! │  │  cheapest       │   │  checked, not   │                             │
//! │  │  most_expensive │   │  yet committed  │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A product is identified by its name, compared case-insensitively.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::money::Money;

/// Case-folds a product name for lookups.
///
/// Surrounding whitespace is ignored, so `" Milk "` and `"milk"` share a key.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

// =============================================================================
// Product
// =============================================================================

/// A product tracked by the ledger.
///
/// Price is fixed at creation; stock only changes through purchases, which
/// is why the fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub(crate) name: String,
    pub(crate) price: Money,
    pub(crate) stock: i64,
}

impl Product {
    /// Display name, casing preserved as entered.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Units on hand.
    #[inline]
    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Checks whether `quantity` units can be sold.
    pub fn can_sell(&self, quantity: i64) -> bool {
        quantity > 0 && quantity <= self.stock
    }

    /// Case-insensitive substring match.
    ///
    /// The query is used as-is (no trimming); an empty query matches
    /// every product.
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }
}

// =============================================================================
// Price Statistics
// =============================================================================

/// Cheapest and most expensive product.
///
/// On equal prices the product added first wins, for both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceStats {
    pub cheapest: Product,
    pub most_expensive: Product,
}

// =============================================================================
// Purchases
// =============================================================================

/// A purchase that passed every check but has not been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseQuote {
    /// Stored product name (may differ in casing from what was typed).
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub subtotal: Money,
    /// Stock that will remain after the purchase.
    pub remaining_stock: i64,
}

/// One committed purchase in the sales journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub subtotal: Money,
    pub sold_at: DateTime<Utc>,
}

// =============================================================================
// Receipt
// =============================================================================

/// End-of-session summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub total_sales: Money,
    pub purchase_count: usize,
    pub units_sold: i64,
    pub opened_at: DateTime<Utc>,
    pub issued_at: DateTime<Utc>,
}
