//! CLI definition for the ikanban command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// ikanban - a single-user kanban board store.
///
/// Boards, columns and cards live in one JSON snapshot file. Every command
/// prints its result as JSON on stdout; diagnostics go to stderr.
#[derive(Parser, Debug)]
#[command(name = "ikanban")]
#[command(version)]
#[command(about = "Single-user kanban boards from the command line")]
#[command(
    long_about = "ikanban keeps boards, columns and cards in a single JSON snapshot.\n\n\
    Operations are JSON objects such as {\"op\": \"create card\", \"column_id\": \"...\", \
    \"title\": \"...\"}; run `ikanban ops` for the full list.\n\n\
    Environment variables:\n  \
    IKANBAN_STATE_PATH   Snapshot file (default ~/.ikanban/state.json)\n  \
    IKANBAN_ACTOR        Name recorded in the activity log\n  \
    IKANBAN_DARK_MODE    Use the dark default background for new boards"
)]
pub struct Cli {
    /// Snapshot file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Name recorded on activity log entries
    #[arg(long, global = true, value_name = "NAME")]
    pub actor: Option<String>,

    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Only report errors on stderr
    #[arg(short, long, global = true, conflicts_with = "debug")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one operation or a batch, given as JSON (use - for stdin)
    Exec {
        /// JSON object or array, or - to read it from stdin
        input: String,
    },

    /// Show a board with its visible cards (defaults to the current board)
    Board {
        /// Board id
        id: Option<String>,
    },

    /// List boards that are not archived
    Boards,

    /// Show the task feed across all boards
    Feed,

    /// List archived boards or cards
    Archived {
        #[arg(value_enum)]
        kind: ArchivedKind,
    },

    /// Show recent activity, newest first
    Activity {
        /// Maximum number of entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the schema of every operation
    Ops,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchivedKind {
    Boards,
    Cards,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["ikanban", "boards", "--state", "/tmp/b.json", "-d"]).unwrap();
        assert_eq!(cli.state, Some(PathBuf::from("/tmp/b.json")));
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Boards));
    }

    #[test]
    fn test_archived_kind() {
        let cli = Cli::try_parse_from(["ikanban", "archived", "cards"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Archived {
                kind: ArchivedKind::Cards
            }
        ));
        assert!(Cli::try_parse_from(["ikanban", "archived", "columns"]).is_err());
    }

    #[test]
    fn test_debug_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["ikanban", "-d", "-q", "feed"]).is_err());
    }
}
