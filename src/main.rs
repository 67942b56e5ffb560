use anyhow::Result;
use clap::Parser;

use expense_ledger::{cli, init_tracing};

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Interactive terminal expense tracker",
    long_about = "Records cash expenses for the current session, lists and filters them \
                  by category, totals them and prints a monthly summary. Nothing is \
                  saved when the session ends."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    init_tracing();

    cli::run_interactive()?;
    Ok(())
}
