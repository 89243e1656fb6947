//! ListArchivedCards and DeleteArchivedCard commands

use super::delete::remove_card;
use crate::command_input;
use crate::error::BoardError;
use crate::store::BoardStore;
use crate::types::{BoardId, CardId, ColumnId};
use ikanban_operations::{operation, Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Archived cards across all active boards
#[operation(
    verb = "list",
    noun = "archived-cards",
    description = "List archived cards on every non-archived board"
)]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListArchivedCards {}

impl Execute<BoardStore, BoardError> for ListArchivedCards {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let cards = ctx.archived_cards();
        let count = cards.len();
        ExecutionResult::unlogged(
            serde_json::to_value(&cards)
                .map(|cards| json!({ "count": count, "cards": cards }))
                .map_err(BoardError::from),
        )
    }
}

/// Permanently delete a card from the archive view
#[operation(
    verb = "delete",
    noun = "archived-card",
    description = "Permanently delete a card on any board"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteArchivedCard {
    #[param(alias = "board")]
    pub board_id: BoardId,
    #[param(alias = "column")]
    pub column_id: ColumnId,
    #[param(alias = "id")]
    pub card_id: CardId,
}

impl DeleteArchivedCard {
    pub fn new(
        board_id: impl Into<BoardId>,
        column_id: impl Into<ColumnId>,
        card_id: impl Into<CardId>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            column_id: column_id.into(),
            card_id: card_id.into(),
        }
    }
}

impl Execute<BoardStore, BoardError> for DeleteArchivedCard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let result = remove_card(ctx, Some(&self.board_id), &self.column_id, &self.card_id);
        ExecutionResult::logged(self.op_string(), command_input(self), started, result)
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.card_id.to_string()]
    }
}
