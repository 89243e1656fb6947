//! Run JSON requests against a store
//!
//! [`execute_json`] parses forgiving input (see [`crate::parse`]), decodes each
//! request into its command struct and runs it through the processor so the
//! activity log sees it.

use crate::activity::ListActivity;
use crate::board::{
    ArchiveBoard, CreateBoard, DeleteBoard, GetBoard, ListArchivedBoards, ListBoards,
    SelectBoard, SetBoardBackground, UnarchiveBoard,
};
use crate::card::{
    ArchiveCard, CreateCard, DeleteArchivedCard, DeleteCard, ListArchivedCards, MoveCard,
    UnarchiveCard, UpdateCard,
};
use crate::column::{CreateColumn, DeleteColumn, ReorderColumns};
use crate::error::{BoardError, Result};
use crate::logging::Pretty;
use crate::parse::parse_input;
use crate::processor::BoardOperationProcessor;
use crate::store::BoardStore;
use crate::task::{GetTaskFeed, ToggleTask};
use crate::types::{Noun, OpRequest, Verb};
use ikanban_operations::{Execute, OperationMeta, OperationProcessor, ParamMeta};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

/// Execute one request object, or an array of them in order.
///
/// A batch stops at the first failing request and returns its error; the
/// requests before it stay applied.
pub fn execute_json(
    input: Value,
    store: &mut BoardStore,
    processor: &BoardOperationProcessor,
) -> Result<Value> {
    let batch = input.is_array();
    let requests = parse_input(input)?;

    let mut results = Vec::with_capacity(requests.len());
    for request in requests {
        results.push(execute_request(request, store, processor)?);
    }

    if batch {
        Ok(Value::Array(results))
    } else {
        Ok(results.pop().unwrap_or_default())
    }
}

/// Execute one parsed request
pub fn execute_request(
    request: OpRequest,
    store: &mut BoardStore,
    processor: &BoardOperationProcessor,
) -> Result<Value> {
    let processor = match &request.actor {
        Some(actor) => BoardOperationProcessor::with_actor(actor.as_str()),
        None => processor.clone(),
    };
    debug!("dispatching {}: {}", request.op_string(), Pretty(&request.params));

    match (request.verb, request.noun) {
        (Verb::Create, Noun::Board) => run::<CreateBoard>(request, store, &processor),
        (Verb::Archive, Noun::Board) => run::<ArchiveBoard>(request, store, &processor),
        (Verb::Unarchive, Noun::Board) => run::<UnarchiveBoard>(request, store, &processor),
        (Verb::Delete, Noun::Board) => run::<DeleteBoard>(request, store, &processor),
        (Verb::Select, Noun::Board) => run::<SelectBoard>(request, store, &processor),
        (Verb::Get, Noun::Board) => run::<GetBoard>(request, store, &processor),
        (Verb::List, Noun::Board) => run::<ListBoards>(request, store, &processor),
        (Verb::Set | Verb::Update, Noun::Background) => {
            run::<SetBoardBackground>(request, store, &processor)
        }
        (Verb::List, Noun::ArchivedBoard) => run::<ListArchivedBoards>(request, store, &processor),

        (Verb::Create, Noun::Column) => run::<CreateColumn>(request, store, &processor),
        (Verb::Delete, Noun::Column) => run::<DeleteColumn>(request, store, &processor),
        (Verb::Reorder | Verb::Move, Noun::Column) => {
            run::<ReorderColumns>(request, store, &processor)
        }

        (Verb::Create, Noun::Card) => run::<CreateCard>(request, store, &processor),
        (Verb::Update, Noun::Card) => run::<UpdateCard>(request, store, &processor),
        (Verb::Delete, Noun::Card) => run::<DeleteCard>(request, store, &processor),
        (Verb::Archive, Noun::Card) => run::<ArchiveCard>(request, store, &processor),
        (Verb::Unarchive, Noun::Card) => run::<UnarchiveCard>(request, store, &processor),
        (Verb::Move, Noun::Card) => run::<MoveCard>(request, store, &processor),
        (Verb::List, Noun::ArchivedCard) => run::<ListArchivedCards>(request, store, &processor),
        (Verb::Delete, Noun::ArchivedCard) => run::<DeleteArchivedCard>(request, store, &processor),

        (Verb::Get | Verb::List, Noun::Task) => run::<GetTaskFeed>(request, store, &processor),
        (Verb::Toggle, Noun::Task) => run::<ToggleTask>(request, store, &processor),
        (Verb::Get | Verb::List, Noun::Activity) => run::<ListActivity>(request, store, &processor),

        _ => Err(BoardError::UnknownOperation {
            op: request.op_string(),
        }),
    }
}

fn run<T>(
    request: OpRequest,
    store: &mut BoardStore,
    processor: &BoardOperationProcessor,
) -> Result<Value>
where
    T: Execute<BoardStore, BoardError> + OperationMeta + DeserializeOwned,
{
    let params = resolve_aliases(T::params(), request.params);
    let command: T = serde_json::from_value(Value::Object(params)).map_err(|e| {
        BoardError::parse(format!("invalid parameters for {} {}: {e}", T::VERB, T::NOUN))
    })?;
    processor.process(&command, store)
}

/// Rename alias keys to the parameter they stand for. An explicit
/// parameter wins over its aliases.
fn resolve_aliases(meta: &[ParamMeta], params: Map<String, Value>) -> Map<String, Value> {
    let mut resolved = Map::with_capacity(params.len());
    let mut aliased = Vec::new();

    for (key, value) in params {
        match meta.iter().find(|p| p.name != key && p.matches(&key)) {
            Some(param) => aliased.push((param.name.to_string(), value)),
            None => {
                resolved.insert(key, value);
            }
        }
    }
    for (name, value) in aliased {
        resolved.entry(name).or_insert(value);
    }
    resolved
}
