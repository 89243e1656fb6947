//! Command execution: open the store, run one command, return its JSON

use std::io::Read;

use anyhow::{Context, Result};
use ikanban::{
    activity::ListActivity,
    board::{GetBoard, ListArchivedBoards, ListBoards},
    card::ListArchivedCards,
    dispatch::execute_json,
    schema::generate_board_schema,
    storage::JsonFileStorage,
    task::GetTaskFeed,
    BoardConfig, BoardOperationProcessor, BoardStore, OperationProcessor,
};
use serde_json::Value;
use tracing::debug;

use crate::cli::{ArchivedKind, Cli, Commands};

/// Load configuration, apply command-line overrides and open the store
pub fn open_store(cli: &Cli) -> Result<(BoardStore, BoardOperationProcessor)> {
    let mut config = BoardConfig::load().context("failed to load configuration")?;
    if let Some(state) = &cli.state {
        config.state_path = state.clone();
    }

    let mut storage = JsonFileStorage::open(&config.state_path)
        .with_context(|| format!("failed to open {}", config.state_path.display()))?;
    if let Some(quota) = config.quota() {
        storage = storage.with_quota(quota);
    }

    let processor = match cli.actor.as_ref().or(config.actor.as_ref()) {
        Some(actor) => BoardOperationProcessor::with_actor(actor.as_str()),
        None => BoardOperationProcessor::new(),
    };
    let store = BoardStore::open(Box::new(storage), config)?;
    Ok((store, processor))
}

/// Run `command` against an open store
pub fn execute(
    command: &Commands,
    store: &mut BoardStore,
    processor: &BoardOperationProcessor,
) -> Result<Value> {
    let value = match command {
        Commands::Exec { input } => {
            let input = read_input(input)?;
            execute_json(input, store, processor)?
        }
        Commands::Board { id } => match id {
            Some(id) => processor.process(&GetBoard::new(id.as_str()), store)?,
            None => processor.process(&GetBoard::current(), store)?,
        },
        Commands::Boards => processor.process(&ListBoards::default(), store)?,
        Commands::Feed => processor.process(&GetTaskFeed::default(), store)?,
        Commands::Archived { kind } => match kind {
            ArchivedKind::Boards => processor.process(&ListArchivedBoards::default(), store)?,
            ArchivedKind::Cards => processor.process(&ListArchivedCards::default(), store)?,
        },
        Commands::Activity { limit } => {
            let list = match limit {
                Some(limit) => ListActivity::new().with_limit(*limit),
                None => ListActivity::new(),
            };
            processor.process(&list, store)?
        }
        Commands::Ops => generate_board_schema(),
    };
    Ok(value)
}

fn read_input(input: &str) -> Result<Value> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        input.to_string()
    };
    debug!(bytes = text.len(), "parsing operation input");
    serde_json::from_str(&text).context("input is not valid JSON")
}
