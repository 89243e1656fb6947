//! ikanban CLI - kanban boards in a JSON snapshot file.
//!
//! Commands:
//! - `ikanban exec <json|->`: Run an operation or batch given as JSON
//! - `ikanban board [id]`: Show a board (defaults to the current board)
//! - `ikanban boards`: List boards that are not archived
//! - `ikanban feed`: Show the task feed
//! - `ikanban archived boards|cards`: List archived boards or cards
//! - `ikanban activity [--limit N]`: Show recent activity
//! - `ikanban ops`: Print the operation schema
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

mod cli;
mod run;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&cli))
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run_cli(&cli) {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// The binary and the library share the `ikanban` target prefix
fn log_filter(cli: &Cli) -> EnvFilter {
    if cli.debug {
        EnvFilter::new("ikanban=debug")
    } else if cli.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn run_cli(cli: &Cli) -> anyhow::Result<String> {
    let value = match cli.command {
        // needs no store
        Commands::Ops => ikanban::schema::generate_board_schema(),
        _ => {
            let (mut store, processor) = run::open_store(cli)?;
            run::execute(&cli.command, &mut store, &processor)?
        }
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
