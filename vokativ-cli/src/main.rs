//! vokativ command-line entry point

use anyhow::Result;
use clap::Parser;
use vokativ_cli::{commands::Commands, init_logging};

/// Czech vocative case for personal names
#[derive(Debug, Parser)]
#[command(name = "vokativ", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet)?;

    log::debug!("Arguments: {:?}", cli);

    cli.command.execute()
}
