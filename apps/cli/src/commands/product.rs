//! # Product Commands
//!
//! Adding products and every read over the catalogue.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Clerk types "re"                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InventoryLedger::search_by_name ──► lowercase substring test,         │
//! │                                      query used as typed (no trim)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<ProductDto> in insertion order (empty = "no matches")             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

use ministore_core::{Money, PriceStats, Product};

use crate::error::ApiError;
use crate::state::LedgerState;

/// Product as shown to the clerk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    pub price_cents: i64,
    pub stock: i64,
}

impl ProductDto {
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            name: p.name().to_string(),
            price_cents: p.price().cents(),
            stock: p.stock(),
        }
    }
}

/// Cheapest and most expensive product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsDto {
    pub cheapest: ProductDto,
    pub most_expensive: ProductDto,
}

impl From<PriceStats> for StatisticsDto {
    fn from(stats: PriceStats) -> Self {
        StatisticsDto {
            cheapest: ProductDto::from(&stats.cheapest),
            most_expensive: ProductDto::from(&stats.most_expensive),
        }
    }
}

/// Adds a product to the inventory.
///
/// ## Errors
/// - `VALIDATION_ERROR` for a blank name, non-positive price, negative stock
/// - `DUPLICATE` when the name exists in any casing
pub fn add_product(
    state: &LedgerState,
    name: &str,
    price: Money,
    stock: i64,
) -> Result<ProductDto, ApiError> {
    let result = state.with_ledger_mut(|ledger| {
        ledger
            .add_product(name, price, stock)
            .map(ProductDto::from)
    });

    match result {
        Ok(product) => {
            info!(name = %product.name, price = %price, stock, "Product added");
            Ok(product)
        }
        Err(e) => {
            debug!(name, error = %e, "Add product rejected");
            Err(e.into())
        }
    }
}

/// Looks a product up by exact name, ignoring case.
pub fn find_product(state: &LedgerState, name: &str) -> Option<ProductDto> {
    let found = state.with_ledger(|ledger| ledger.get(name).map(ProductDto::from));
    debug!(query = name, found = found.is_some(), "Product lookup");
    found
}

/// Lists the whole inventory in insertion order.
pub fn list_inventory(state: &LedgerState) -> Vec<ProductDto> {
    let products: Vec<ProductDto> = state.with_ledger(|ledger| {
        ledger
            .list_inventory()
            .iter()
            .map(ProductDto::from)
            .collect()
    });
    debug!(count = products.len(), "Inventory listed");
    products
}

/// Finds products whose name contains `query`, ignoring case.
///
/// Never fails: no match is an empty list. Surrounding spaces in `query`
/// are part of the fragment.
pub fn search_products(state: &LedgerState, query: &str) -> Vec<ProductDto> {
    let start = Instant::now();

    let products: Vec<ProductDto> = state.with_ledger(|ledger| {
        ledger
            .search_by_name(query)
            .into_iter()
            .map(ProductDto::from)
            .collect()
    });

    debug!(
        query,
        results = products.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "Search completed"
    );
    products
}

/// Cheapest and most expensive product, `None` on an empty inventory.
pub fn get_statistics(state: &LedgerState) -> Option<StatisticsDto> {
    state.with_ledger(|ledger| ledger.statistics().map(StatisticsDto::from))
}
