//! DeleteCard command

use crate::command_input;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{BoardId, CardId, ColumnId};
use ikanban_operations::{operation, Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Remove a card from its column permanently
pub(crate) fn remove_card(
    ctx: &mut BoardStore,
    board_id: Option<&BoardId>,
    column_id: &ColumnId,
    card_id: &CardId,
) -> Result<Value> {
    let (index, card) = ctx
        .column_mut(board_id, column_id)?
        .take_card(card_id)
        .ok_or_else(|| BoardError::card_not_found(card_id))?;

    ctx.commit()?;
    Ok(json!({
        "deleted": true,
        "id": card.id,
        "column_id": column_id,
        "index": index,
    }))
}

/// Delete a card permanently
#[operation(verb = "delete", noun = "card", description = "Delete a card permanently")]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteCard {
    /// The card to delete
    #[param(alias = "id")]
    pub card_id: CardId,
    /// Column holding the card
    #[param(alias = "column")]
    pub column_id: ColumnId,
    /// Board the column is on (defaults to the current board)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[param(alias = "board")]
    pub board_id: Option<BoardId>,
}

impl DeleteCard {
    pub fn new(column_id: impl Into<ColumnId>, card_id: impl Into<CardId>) -> Self {
        Self {
            card_id: card_id.into(),
            column_id: column_id.into(),
            board_id: None,
        }
    }

    pub fn with_board(mut self, board_id: impl Into<BoardId>) -> Self {
        self.board_id = Some(board_id.into());
        self
    }
}

impl Execute<BoardStore, BoardError> for DeleteCard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let result = remove_card(ctx, self.board_id.as_ref(), &self.column_id, &self.card_id);
        ExecutionResult::logged(self.op_string(), command_input(self), started, result)
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.card_id.to_string()]
    }
}
