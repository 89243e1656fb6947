//! MoveCard command

use crate::command_input;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{order, BoardId, CardId, ColumnId};
use ikanban_operations::{operation, Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;
use tracing::debug;

/// Drag a card within a column or onto another column
#[operation(
    verb = "move",
    noun = "card",
    description = "Move a card to a position in the same or another column"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveCard {
    /// The card to move
    #[param(alias = "id")]
    pub card_id: CardId,
    /// Column the card is in now
    #[param(alias = "from")]
    pub from_column_id: ColumnId,
    /// Column to drop the card into
    #[param(alias = "to")]
    pub to_column_id: ColumnId,
    /// Drop position in the destination; omitted or past the end appends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[param(alias = "index")]
    pub target_index: Option<usize>,
    /// Board holding both columns (defaults to the current board)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[param(alias = "board")]
    pub board_id: Option<BoardId>,
}

impl MoveCard {
    pub fn new(
        card_id: impl Into<CardId>,
        from_column_id: impl Into<ColumnId>,
        to_column_id: impl Into<ColumnId>,
    ) -> Self {
        Self {
            card_id: card_id.into(),
            from_column_id: from_column_id.into(),
            to_column_id: to_column_id.into(),
            target_index: None,
            board_id: None,
        }
    }

    /// Move within a single column
    pub fn within(
        column_id: impl Into<ColumnId>,
        card_id: impl Into<CardId>,
        target_index: usize,
    ) -> Self {
        let column_id = column_id.into();
        Self::new(card_id, column_id.clone(), column_id).to_index(target_index)
    }

    pub fn to_index(mut self, target_index: usize) -> Self {
        self.target_index = Some(target_index);
        self
    }

    pub fn with_board(mut self, board_id: impl Into<BoardId>) -> Self {
        self.board_id = Some(board_id.into());
        self
    }

    fn run(&self, ctx: &mut BoardStore) -> Result<Value> {
        let board = ctx.target_board_mut(self.board_id.as_ref())?;
        let board_id = board.id.clone();
        let to = board
            .column_index(&self.to_column_id)
            .ok_or_else(|| BoardError::column_not_found(&self.to_column_id))?;
        let (original, card) = board
            .column_mut(&self.from_column_id)
            .ok_or_else(|| BoardError::column_not_found(&self.from_column_id))?
            .take_card(&self.card_id)
            .ok_or_else(|| BoardError::card_not_found(&self.card_id))?;

        // Indices address the sequence before removal; shift for the gap.
        let target = match self.target_index {
            Some(i) if self.from_column_id == self.to_column_id && i > original => Some(i - 1),
            other => other,
        };
        let landed = order::insert_at(&mut board.columns[to].cards, card, target);
        debug!(card = %self.card_id, from = %self.from_column_id, to = %self.to_column_id, index = landed, "moved card");

        ctx.commit()?;
        Ok(json!({
            "id": self.card_id,
            "board_id": board_id,
            "from_column_id": self.from_column_id,
            "to_column_id": self.to_column_id,
            "index": landed,
        }))
    }
}

impl Execute<BoardStore, BoardError> for MoveCard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let result = self.run(ctx);
        ExecutionResult::logged(self.op_string(), command_input(self), started, result)
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![
            self.card_id.to_string(),
            self.from_column_id.to_string(),
            self.to_column_id.to_string(),
        ]
    }
}
