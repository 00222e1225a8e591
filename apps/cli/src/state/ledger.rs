//! # Ledger State
//!
//! The one inventory ledger of the session, shared behind a mutex.
//!
//! ## Thread Safety
//! The ledger is wrapped in `Arc<Mutex<T>>` because:
//! 1. The session thread mutates it (add, purchase)
//! 2. The Ctrl-C handler reads the receipt from another task
//! 3. `add_product` and `purchase` check and then write; holding the lock
//!    for the whole call keeps another caller from slipping in between
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu Action         Command                    Ledger Access           │
//! │  ───────────         ───────                    ─────────────           │
//! │                                                                         │
//! │  1. Add ───────────► product::add_product() ──► with_ledger_mut        │
//! │  2. List ──────────► product::list_inventory()► with_ledger            │
//! │  3. Buy ───────────► sale::quote_purchase() ──► with_ledger            │
//! │                      sale::purchase() ────────► with_ledger_mut        │
//! │  4. Statistics ────► product::get_statistics()► with_ledger            │
//! │  5. Search ────────► product::search_products()► with_ledger           │
//! │  0. Exit ──────────► sale::get_receipt() ─────► with_ledger            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ministore_core::InventoryLedger;

/// Shared handle to the session's ledger.
///
/// Cloning is cheap and every clone sees the same ledger.
#[derive(Debug, Clone, Default)]
pub struct LedgerState {
    ledger: Arc<Mutex<InventoryLedger>>,
}

impl LedgerState {
    /// Creates state around a fresh, empty ledger.
    pub fn new() -> Self {
        Self::from_ledger(InventoryLedger::new())
    }

    /// Creates state around an existing ledger.
    pub fn from_ledger(ledger: InventoryLedger) -> Self {
        LedgerState {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Executes a function with read access to the ledger.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = ledger_state.with_ledger(|ledger| ledger.len());
    /// ```
    pub fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InventoryLedger) -> R,
    {
        let ledger = self.lock();
        f(&ledger)
    }

    /// Executes a function with write access to the ledger.
    pub fn with_ledger_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InventoryLedger) -> R,
    {
        let mut ledger = self.lock();
        f(&mut ledger)
    }

    // Ledger methods validate before writing, so a panic elsewhere cannot
    // leave it half-updated; keep serving it after a poisoned lock.
    fn lock(&self) -> MutexGuard<'_, InventoryLedger> {
        self.ledger.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Ledger mutex was poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }
}
