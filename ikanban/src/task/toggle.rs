//! ToggleTask command

use crate::command_input;
use crate::error::BoardError;
use crate::store::BoardStore;
use crate::types::{BoardId, CardId, ChecklistItem, ChecklistItemId, ColumnId};
use ikanban_operations::{operation, Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;
use tracing::debug;

/// Check or uncheck a checklist item from the task feed.
///
/// The feed may be stale by the time the user clicks, so a board, column,
/// card or index that no longer exists makes this a no-op instead of an error.
#[operation(
    verb = "toggle",
    noun = "task",
    description = "Set the checked state of a checklist item; stale targets are ignored"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct ToggleTask {
    #[param(alias = "board")]
    pub board_id: BoardId,
    #[param(alias = "column")]
    pub column_id: ColumnId,
    #[param(alias = "card")]
    pub card_id: CardId,
    /// Position of the item in the card's checklist
    #[param(alias = "index")]
    pub item_index: usize,
    /// The new checked state
    pub checked: bool,
    /// Item id seen in the feed; a mismatch at `item_index` is ignored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<ChecklistItemId>,
}

impl ToggleTask {
    pub fn new(
        board_id: impl Into<BoardId>,
        column_id: impl Into<ColumnId>,
        card_id: impl Into<CardId>,
        item_index: usize,
        checked: bool,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            column_id: column_id.into(),
            card_id: card_id.into(),
            item_index,
            checked,
            item_id: None,
        }
    }

    pub fn with_item_id(mut self, item_id: impl Into<ChecklistItemId>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    fn locate<'a>(&self, ctx: &'a mut BoardStore) -> Option<&'a mut ChecklistItem> {
        let item = ctx
            .card_mut(Some(&self.board_id), &self.column_id, &self.card_id)
            .ok()?
            .checklist
            .get_mut(self.item_index)?;
        match &self.item_id {
            Some(id) if &item.id != id => None,
            _ => Some(item),
        }
    }
}

impl Execute<BoardStore, BoardError> for ToggleTask {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let Some(item) = self.locate(ctx) else {
            debug!(card = %self.card_id, index = self.item_index, "toggle target gone, ignoring");
            return ExecutionResult::Unlogged {
                value: json!({ "updated": false }),
            };
        };
        item.checked = self.checked;
        let value = json!({
            "updated": true,
            "board_id": self.board_id,
            "card_id": self.card_id,
            "index": self.item_index,
            "id": item.id,
            "checked": self.checked,
        });

        let result = ctx.commit().map(|()| value);
        ExecutionResult::logged(self.op_string(), command_input(self), started, result)
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.card_id.to_string()]
    }
}
