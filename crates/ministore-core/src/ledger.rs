//! # Inventory Ledger
//!
//! Owns every product and the running sales total for one session.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        InventoryLedger                                  │
//! │                                                                         │
//! │  products: Vec<Product>        insertion order (listing, tie-breaks)   │
//! │     [0] Egg   $1.00  5                                                  │
//! │     [1] Milk  $2.50  5                                                  │
//! │     [2] Bread $1.20  5                                                  │
//! │                                                                         │
//! │  index: HashMap<String, usize> lowercased name → position              │
//! │     "egg" → 0, "milk" → 1, "bread" → 2                                  │
//! │                                                                         │
//! │  total_sales: Money            sum of every committed subtotal         │
//! │  sales: Vec<SaleRecord>        journal behind total_sales              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Check-then-write
//! `add_product` (duplicate check, then append) and `purchase` (stock check,
//! then decrement) read and write in two steps. Both run every check before
//! the first write, so a rejected call leaves the ledger untouched. Callers
//! sharing a ledger between threads must serialize these calls (the CLI keeps
//! it behind a mutex).
//!
//! ## Example
//! ```rust
//! use ministore_core::{InventoryLedger, Money};
//!
//! let mut ledger = InventoryLedger::new();
//! ledger.add_product("Bread", Money::from_cents(120), 3).unwrap();
//!
//! let subtotal = ledger.purchase("bread", 2).unwrap();
//! assert_eq!(subtotal.cents(), 240);
//! assert_eq!(ledger.get("BREAD").unwrap().stock(), 1);
//! assert_eq!(ledger.total_sales().cents(), 240);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{name_key, PriceStats, Product, PurchaseQuote, Receipt, SaleRecord};
use crate::validation::{validate_price, validate_product_name, validate_quantity, validate_stock};

/// In-memory product catalogue with stock counts and accumulated sales.
#[derive(Debug, Clone)]
pub struct InventoryLedger {
    products: Vec<Product>,
    index: HashMap<String, usize>,
    total_sales: Money,
    sales: Vec<SaleRecord>,
    opened_at: DateTime<Utc>,
}

impl InventoryLedger {
    /// Creates an empty ledger with zero sales.
    pub fn new() -> Self {
        InventoryLedger {
            products: Vec::new(),
            index: HashMap::new(),
            total_sales: Money::zero(),
            sales: Vec::new(),
            opened_at: Utc::now(),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds a product.
    ///
    /// The name is stored trimmed, with its casing untouched. Checks run in
    /// this order: name, price, stock, uniqueness.
    ///
    /// ## Errors
    /// - `CoreError::Validation` for a blank name, `price <= 0` or `stock < 0`
    /// - `CoreError::DuplicateName` when the name exists in any casing
    pub fn add_product(&mut self, name: &str, price: Money, stock: i64) -> CoreResult<&Product> {
        validate_product_name(name)?;
        validate_price(price)?;
        validate_stock(stock)?;

        let name = name.trim();
        let key = name_key(name);
        if let Some(&existing) = self.index.get(&key) {
            return Err(CoreError::DuplicateName(self.products[existing].name.clone()));
        }

        let position = self.products.len();
        self.products.push(Product {
            name: name.to_string(),
            price,
            stock,
        });
        self.index.insert(key, position);

        Ok(&self.products[position])
    }

    /// Sells `quantity` units of the named product and returns the subtotal.
    ///
    /// Stock, total sales and the sales journal change together or not at
    /// all.
    ///
    /// ## Errors
    /// - `CoreError::ProductNotFound` when no name matches
    /// - `CoreError::InvalidQuantity` when `quantity <= 0`
    /// - `CoreError::InsufficientStock` when `quantity` exceeds the stock
    /// - `CoreError::Validation` when the amounts would overflow
    pub fn purchase(&mut self, name: &str, quantity: i64) -> CoreResult<Money> {
        let (position, quote) = self.check_purchase(name, quantity)?;

        let product = &mut self.products[position];
        product.stock = quote.remaining_stock;
        self.total_sales += quote.subtotal;
        self.sales.push(SaleRecord {
            product_name: quote.product_name,
            quantity: quote.quantity,
            unit_price: quote.unit_price,
            subtotal: quote.subtotal,
            sold_at: Utc::now(),
        });

        Ok(quote.subtotal)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Runs every purchase check without selling anything.
    ///
    /// Fails exactly when [`InventoryLedger::purchase`] would fail with the
    /// same arguments against the current state.
    pub fn quote(&self, name: &str, quantity: i64) -> CoreResult<PurchaseQuote> {
        self.check_purchase(name, quantity).map(|(_, quote)| quote)
    }

    /// All products in insertion order.
    pub fn list_inventory(&self) -> &[Product] {
        &self.products
    }

    /// Position of the product whose name matches `query` ignoring case.
    pub fn find_by_name(&self, query: &str) -> Option<usize> {
        self.index.get(&name_key(query)).copied()
    }

    /// The product whose name matches `query` ignoring case.
    pub fn get(&self, query: &str) -> Option<&Product> {
        self.find_by_name(query).map(|position| &self.products[position])
    }

    /// Checks whether a product with this name exists in any casing.
    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Products whose name contains `fragment`, ignoring case, in insertion
    /// order.
    pub fn search_by_name(&self, fragment: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.name_contains(fragment))
            .collect()
    }

    /// Cheapest and most expensive product, or `None` when empty.
    ///
    /// Single pass; only a strictly lower or higher price replaces the
    /// current extreme, so the earliest product wins ties.
    pub fn statistics(&self) -> Option<PriceStats> {
        let (first, rest) = self.products.split_first()?;

        let mut cheapest = first;
        let mut most_expensive = first;
        for product in rest {
            if product.price < cheapest.price {
                cheapest = product;
            }
            if product.price > most_expensive.price {
                most_expensive = product;
            }
        }

        Some(PriceStats {
            cheapest: cheapest.clone(),
            most_expensive: most_expensive.clone(),
        })
    }

    /// Sum of every committed purchase subtotal.
    pub fn total_sales(&self) -> Money {
        self.total_sales
    }

    /// Committed purchases, oldest first.
    pub fn sales(&self) -> &[SaleRecord] {
        &self.sales
    }

    /// Summary of the session so far.
    pub fn receipt(&self) -> Receipt {
        Receipt {
            total_sales: self.total_sales,
            purchase_count: self.sales.len(),
            units_sold: self.sales.iter().map(|sale| sale.quantity).sum(),
            opened_at: self.opened_at,
            issued_at: Utc::now(),
        }
    }

    /// When the ledger was created.
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn check_purchase(&self, name: &str, quantity: i64) -> CoreResult<(usize, PurchaseQuote)> {
        let position = self
            .find_by_name(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.trim().to_string()))?;

        validate_quantity(quantity).map_err(|_| CoreError::InvalidQuantity {
            requested: quantity,
        })?;

        let product = &self.products[position];
        if !product.can_sell(quantity) {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested: quantity,
            });
        }

        let subtotal = product
            .price
            .checked_multiply_quantity(quantity)
            .ok_or_else(|| ValidationError::Overflow {
                field: "subtotal".to_string(),
            })?;
        if self.total_sales.checked_add(subtotal).is_none() {
            return Err(ValidationError::Overflow {
                field: "total sales".to_string(),
            }
            .into());
        }

        Ok((
            position,
            PurchaseQuote {
                product_name: product.name.clone(),
                quantity,
                unit_price: product.price,
                subtotal,
                remaining_stock: product.stock - quantity,
            },
        ))
    }
}

impl Default for InventoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn cents(value: i64) -> Money {
        Money::from_cents(value)
    }

    fn stocked_ledger() -> InventoryLedger {
        let mut ledger = InventoryLedger::new();
        ledger.add_product("Egg", cents(100), 5).unwrap();
        ledger.add_product("Milk", cents(250), 5).unwrap();
        ledger.add_product("Bread", cents(120), 5).unwrap();
        ledger
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = InventoryLedger::new();
        assert!(ledger.is_empty());
        assert!(ledger.list_inventory().is_empty());
        assert!(ledger.statistics().is_none());
        assert_eq!(ledger.total_sales(), Money::zero());
    }

    #[test]
    fn test_add_product_keeps_casing_and_trims() {
        let mut ledger = InventoryLedger::new();
        let product = ledger.add_product("  Whole Milk ", cents(250), 10).unwrap();
        assert_eq!(product.name(), "Whole Milk");
        assert_eq!(product.price(), cents(250));
        assert_eq!(product.stock(), 10);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_duplicate_name_rejected_case_insensitively() {
        let mut ledger = InventoryLedger::new();
        ledger.add_product("Milk", cents(250), 10).unwrap();

        let err = ledger.add_product("milk", cents(300), 5).unwrap_err();
        assert_eq!(err, CoreError::DuplicateName("Milk".to_string()));
        assert_eq!(err.kind(), ErrorKind::DuplicateName);

        let inventory = ledger.list_inventory();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory[0].name(), "Milk");
        assert_eq!(inventory[0].price(), cents(250));
        assert_eq!(inventory[0].stock(), 10);
    }

    #[test]
    fn test_add_product_rejects_invalid_input() {
        let mut ledger = InventoryLedger::new();

        for (name, price, stock) in [("", 100, 1), ("   ", 100, 1), ("Tea", 0, 1), ("Tea", -5, 1), ("Tea", 100, -1)] {
            let err = ledger.add_product(name, cents(price), stock).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "{name:?} {price} {stock}");
        }
        assert!(ledger.is_empty());

        // Zero stock is fine
        assert!(ledger.add_product("Tea", cents(100), 0).is_ok());
    }

    #[test]
    fn test_find_by_name() {
        let ledger = stocked_ledger();
        assert_eq!(ledger.find_by_name("egg"), Some(0));
        assert_eq!(ledger.find_by_name("BREAD"), Some(2));
        assert_eq!(ledger.find_by_name("bre"), None);
        assert_eq!(ledger.get("milk").map(Product::name), Some("Milk"));
        assert!(ledger.contains_name(" MILK "));
    }

    #[test]
    fn test_purchase_unknown_product() {
        let mut ledger = InventoryLedger::new();
        let err = ledger.purchase("Milk", 1).unwrap_err();
        assert_eq!(err, CoreError::ProductNotFound("Milk".to_string()));
    }

    #[test]
    fn test_purchase_insufficient_stock_leaves_state() {
        let mut ledger = InventoryLedger::new();
        ledger.add_product("Bread", cents(120), 3).unwrap();

        let err = ledger.purchase("bread", 5).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientStock {
                name: "Bread".to_string(),
                available: 3,
                requested: 5,
            }
        );
        assert_eq!(ledger.get("Bread").unwrap().stock(), 3);
        assert_eq!(ledger.total_sales(), Money::zero());
        assert!(ledger.sales().is_empty());
    }

    #[test]
    fn test_purchase_success() {
        let mut ledger = InventoryLedger::new();
        ledger.add_product("Bread", cents(120), 3).unwrap();

        let subtotal = ledger.purchase("Bread", 2).unwrap();
        assert_eq!(subtotal, cents(240));
        assert_eq!(ledger.get("Bread").unwrap().stock(), 1);
        assert_eq!(ledger.total_sales(), cents(240));

        let sale = &ledger.sales()[0];
        assert_eq!(sale.product_name, "Bread");
        assert_eq!(sale.quantity, 2);
        assert_eq!(sale.subtotal, cents(240));
    }

    #[test]
    fn test_purchase_whole_stock() {
        let mut ledger = InventoryLedger::new();
        ledger.add_product("Bread", cents(120), 3).unwrap();
        ledger.purchase("bread", 3).unwrap();
        assert_eq!(ledger.get("Bread").unwrap().stock(), 0);
        assert!(matches!(
            ledger.purchase("bread", 1),
            Err(CoreError::InsufficientStock { available: 0, .. })
        ));
    }

    #[test]
    fn test_purchase_rejects_non_positive_quantity() {
        let mut ledger = stocked_ledger();
        for quantity in [0, -1] {
            let err = ledger.purchase("Egg", quantity).unwrap_err();
            assert_eq!(err, CoreError::InvalidQuantity { requested: quantity });
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
        assert_eq!(ledger.get("Egg").unwrap().stock(), 5);
    }

    #[test]
    fn test_purchase_overflow_is_rejected() {
        let mut ledger = InventoryLedger::new();
        ledger.add_product("Gold", cents(i64::MAX / 2), 3).unwrap();
        let err = ledger.purchase("Gold", 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(ledger.get("Gold").unwrap().stock(), 3);
        assert_eq!(ledger.total_sales(), Money::zero());
    }

    #[test]
    fn test_purchase_leaves_other_products_alone() {
        let mut ledger = stocked_ledger();
        ledger.purchase("milk", 4).unwrap();

        let stocks: Vec<i64> = ledger.list_inventory().iter().map(Product::stock).collect();
        assert_eq!(stocks, vec![5, 1, 5]);
    }

    #[test]
    fn test_quote_does_not_mutate() {
        let ledger = stocked_ledger();
        let quote = ledger.quote("MILK", 2).unwrap();
        assert_eq!(quote.product_name, "Milk");
        assert_eq!(quote.unit_price, cents(250));
        assert_eq!(quote.subtotal, cents(500));
        assert_eq!(quote.remaining_stock, 3);

        assert_eq!(ledger.get("Milk").unwrap().stock(), 5);
        assert_eq!(ledger.total_sales(), Money::zero());
        assert!(ledger.quote("Milk", 6).is_err());
        assert!(ledger.quote("Juice", 1).is_err());
    }

    #[test]
    fn test_not_found_checked_before_quantity() {
        let ledger = InventoryLedger::new();
        assert!(matches!(
            ledger.quote("Milk", 0),
            Err(CoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_statistics() {
        let ledger = stocked_ledger();
        let stats = ledger.statistics().unwrap();
        assert_eq!(stats.cheapest.name(), "Egg");
        assert_eq!(stats.cheapest.price(), cents(100));
        assert_eq!(stats.most_expensive.name(), "Milk");
        assert_eq!(stats.most_expensive.price(), cents(250));
    }

    #[test]
    fn test_statistics_ties_keep_first() {
        let mut ledger = InventoryLedger::new();
        ledger.add_product("A", cents(100), 1).unwrap();
        ledger.add_product("B", cents(100), 1).unwrap();
        ledger.add_product("C", cents(300), 1).unwrap();
        ledger.add_product("D", cents(300), 1).unwrap();
        ledger.add_product("E", cents(100), 1).unwrap();

        let stats = ledger.statistics().unwrap();
        assert_eq!(stats.cheapest.name(), "A");
        assert_eq!(stats.most_expensive.name(), "C");
    }

    #[test]
    fn test_statistics_single_product() {
        let mut ledger = InventoryLedger::new();
        ledger.add_product("Solo", cents(100), 1).unwrap();
        let stats = ledger.statistics().unwrap();
        assert_eq!(stats.cheapest, stats.most_expensive);
    }

    #[test]
    fn test_search_by_name() {
        let ledger = stocked_ledger();
        let names: Vec<&str> = ledger.search_by_name("re").iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Bread"]);

        let names: Vec<&str> = ledger.search_by_name("E").iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Egg", "Bread"]);

        assert!(ledger.search_by_name("juice").is_empty());
        assert_eq!(ledger.search_by_name("").len(), 3);
    }

    #[test]
    fn test_receipt_summarizes_sales() {
        let mut ledger = stocked_ledger();
        ledger.purchase("Egg", 2).unwrap();
        ledger.purchase("Bread", 1).unwrap();

        let receipt = ledger.receipt();
        assert_eq!(receipt.total_sales, cents(320));
        assert_eq!(receipt.purchase_count, 2);
        assert_eq!(receipt.units_sold, 3);
        assert_eq!(receipt.opened_at, ledger.opened_at());
        assert!(receipt.issued_at >= receipt.opened_at);
    }
}
