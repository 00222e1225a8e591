//! # Mini-Store Terminal Library
//!
//! The interaction layer around `ministore-core`: menu, prompts, text
//! parsing and rendering. All inventory rules live in the core crate.
//!
//! ## Module Organization
//! ```text
//! ministore_cli/
//! ├── lib.rs          ◄─── You are here (tracing setup & run)
//! ├── repl.rs         ◄─── Menu loop, prompts, retry-until-valid loops
//! ├── input.rs        ◄─── Text → typed values (prices, counts, menu)
//! ├── render.rs       ◄─── Typed values → text or JSON
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── ledger.rs   ◄─── Shared ledger (Arc<Mutex<InventoryLedger>>)
//! │   └── config.rs   ◄─── Configuration from MINISTORE_* variables
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Add, list, find, search, statistics
//! │   └── sale.rs     ◄─── Quote, purchase, receipt
//! └── error.rs        ◄─── ApiError rendered for failed commands
//! ```
//!
//! ## Session Lifetime
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  run()                                                                  │
//! │   ├── spawn_blocking ──► Session::run(stdin, stdout)                    │
//! │   │                        menu loop until 0 / quit / end of input     │
//! │   │                                                                     │
//! │   └── ctrl_c() ────────► print receipt, SessionEnd::Interrupted         │
//! │                                                                         │
//! │  Both sides share one LedgerState, so the receipt printed on Ctrl-C    │
//! │  includes every purchase committed before the signal.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod input;
pub mod render;
pub mod repl;
pub mod state;

use std::io::{self, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use repl::{Session, SessionEnd};
use state::{ConfigState, LedgerState};

/// Runs one interactive session on stdin/stdout.
///
/// Returns how the session ended. On Ctrl-C the receipt is printed here,
/// since the blocking stdin reader cannot be interrupted.
pub async fn run(config: ConfigState) -> io::Result<SessionEnd> {
    info!(store = %config.store_name, output = ?config.output, "Starting session");

    let ledger = LedgerState::new();
    let session_ledger = ledger.clone();
    let session_config = config.clone();

    let mut session = tokio::task::spawn_blocking(move || {
        // Stdout (not StdoutLock) so the Ctrl-C path can still write.
        Session::new(io::stdin().lock(), io::stdout(), session_ledger, session_config).run()
    });

    tokio::select! {
        joined = &mut session => {
            let end = joined.map_err(io::Error::other)??;
            info!(?end, "Session finished");
            Ok(end)
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Interrupted, closing session");

            let receipt = commands::sale::get_receipt(&ledger);
            let mut stdout = io::stdout();
            writeln!(stdout)?;
            render::emit(&mut stdout, &config, &receipt, render::receipt)?;
            stdout.flush()?;
            Ok(SessionEnd::Interrupted)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: `warn` (the terminal stays quiet)
/// - `RUST_LOG=ministore_cli=debug` - every command with timings
/// - `RUST_LOG=info` - one line per mutation
///
/// Logs go to stderr; stdout belongs to the conversation.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
