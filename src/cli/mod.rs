//! Interactive console front end
//!
//! The menu, line prompts and the session state machine that ties them to
//! the expense service.

pub mod menu;
pub mod prompt;
pub mod session;

pub use menu::{render_menu, MenuChoice};
pub use prompt::Console;
pub use session::{local_today, LoopControl, Session};

use std::io;

use crate::error::LedgerResult;

/// Run a session on the process's stdin and stdout
pub fn run_interactive() -> LedgerResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run()
}
