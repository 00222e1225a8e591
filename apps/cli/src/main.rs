//! # Mini-Store Terminal Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration from `MINISTORE_*` environment variables
//! 3. Run the interactive session until quit, end of input or Ctrl-C
//! 4. The final receipt is printed by the session; exit code 0

use anyhow::Context;
use ministore_cli::{state::ConfigState, SessionEnd};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ministore_cli::init_tracing();

    let config = ConfigState::load().context("invalid MINISTORE_* configuration")?;
    let end = ministore_cli::run(config).await.context("terminal I/O failed")?;

    if end == SessionEnd::Interrupted {
        // The stdin reader may still be parked in a blocking read; do not
        // wait for it on runtime shutdown.
        std::process::exit(0);
    }

    Ok(())
}
