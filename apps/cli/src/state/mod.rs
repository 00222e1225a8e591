//! # State Module
//!
//! Session state for the terminal front end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │      LedgerState         │        │      ConfigState         │      │
//! │  │                          │        │                          │      │
//! │  │  Arc<Mutex<              │        │  store_name              │      │
//! │  │    InventoryLedger       │        │  currency symbol/decimals│      │
//! │  │  >>                      │        │  parsing + output flags  │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • LedgerState: one writer at a time (session thread, Ctrl-C reader)   │
//! │  • ConfigState: read-only after startup, cloned where needed           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod ledger;

pub use config::{ConfigError, ConfigState, OutputFormat};
pub use ledger::LedgerState;
