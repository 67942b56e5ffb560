//! Expense Ledger - interactive terminal expense tracker
//!
//! Records cash expenses for a single session, lists and filters them by
//! category, totals them, removes entries and prints a per-category summary.
//! Everything lives in memory and is discarded when the session ends.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Display settings
//! - `error`: Custom error types
//! - `models`: Money, categories, ids and the expense record
//! - `storage`: The in-memory ledger
//! - `services`: Input validation and ledger operations
//! - `reports`: Per-category summary report
//! - `display`: Console formatting
//! - `cli`: Menu loop and prompts
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use expense_ledger::cli::Session;
//!
//! let mut session = Session::new(Cursor::new("1\n12.50\nfood\nlunch\n7\n"), Vec::new());
//! session.run()?;
//! assert_eq!(session.ledger().len(), 1);
//! # Ok::<(), expense_ledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Install the global tracing subscriber
///
/// Logs go to stderr so they never mix with the console protocol on stdout.
/// The filter defaults to `warn` and can be changed with `RUST_LOG`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
