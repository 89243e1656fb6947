//! ListBoards and ListArchivedBoards commands

use crate::error::BoardError;
use crate::store::BoardStore;
use ikanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The board selector: active boards in store order
#[operation(
    verb = "list",
    noun = "boards",
    description = "List boards that are not archived"
)]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListBoards {}

impl Execute<BoardStore, BoardError> for ListBoards {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let current = ctx.current_board_id();
        let boards: Vec<Value> = ctx
            .active_boards()
            .into_iter()
            .map(|board| {
                json!({
                    "id": board.id,
                    "name": board.name,
                    "columns": board.columns.len(),
                    "current": current == Some(&board.id),
                })
            })
            .collect();

        ExecutionResult::Unlogged {
            value: json!({
                "count": boards.len(),
                "current_board_id": current,
                "boards": boards,
            }),
        }
    }
}

/// Archived boards in store order
#[operation(
    verb = "list",
    noun = "archived-boards",
    description = "List archived boards"
)]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListArchivedBoards {}

impl Execute<BoardStore, BoardError> for ListArchivedBoards {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let boards = ctx.archived_boards();
        let count = boards.len();
        ExecutionResult::unlogged(
            serde_json::to_value(&boards)
                .map(|boards| json!({ "count": count, "boards": boards }))
                .map_err(BoardError::from),
        )
    }
}
