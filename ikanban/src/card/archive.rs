//! ArchiveCard and UnarchiveCard commands

use crate::command_input;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{BoardId, CardId, ColumnId};
use ikanban_operations::{operation, Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

fn set_archived(
    ctx: &mut BoardStore,
    board_id: Option<&BoardId>,
    column_id: &ColumnId,
    card_id: &CardId,
    archived: bool,
) -> Result<Value> {
    ctx.card_mut(board_id, column_id, card_id)?.archived = archived;
    ctx.commit()?;
    Ok(json!({ "id": card_id, "column_id": column_id, "archived": archived }))
}

/// Hide a card from the board; it stays in its column until deleted
#[operation(
    verb = "archive",
    noun = "card",
    description = "Archive a card, hiding it from the board view"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct ArchiveCard {
    /// The card to archive
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

impl ArchiveCard {
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

impl Execute<BoardStore, BoardError> for ArchiveCard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let result = set_archived(
            ctx,
            self.board_id.as_ref(),
            &self.column_id,
            &self.card_id,
            true,
        );
        ExecutionResult::logged(self.op_string(), command_input(self), started, result)
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.card_id.to_string()]
    }
}

/// Bring an archived card back onto its board
#[operation(
    verb = "unarchive",
    noun = "card",
    description = "Restore an archived card on any board"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct UnarchiveCard {
    /// Board holding the card
    #[param(alias = "board")]
    pub board_id: BoardId,
    /// Column holding the card
    #[param(alias = "column")]
    pub column_id: ColumnId,
    /// The card to restore
    #[param(alias = "id")]
    pub card_id: CardId,
}

impl UnarchiveCard {
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

impl Execute<BoardStore, BoardError> for UnarchiveCard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let result = set_archived(
            ctx,
            Some(&self.board_id),
            &self.column_id,
            &self.card_id,
            false,
        );
        ExecutionResult::logged(self.op_string(), command_input(self), started, result)
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.card_id.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{board_view, SelectBoard};
    use crate::card::ListArchivedCards;
    use crate::test_support::{board, card, column, store};

    fn visible_titles(store: &BoardStore) -> Vec<String> {
        let view = board_view(store.current_board().unwrap(), true, store.today(), false);
        view["columns"][0]["cards"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["title"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_archive_hides_and_lists() {
        let mut store = store();
        board(&mut store, "Home");
        let todo = column(&mut store, "Todo");
        let id = card(&mut store, &todo, "old");
        card(&mut store, &todo, "new");

        ArchiveCard::new(todo.clone(), id.clone())
            .execute(&mut store)
            .into_result()
            .unwrap();

        assert_eq!(visible_titles(&store), vec!["new"]);
        let archived = ListArchivedCards::default()
            .execute(&mut store)
            .into_result()
            .unwrap();
        assert_eq!(archived["cards"][0]["card"]["id"], id.as_str());
        // still present under its column
        assert_eq!(store.current_board().unwrap().card_count(), 2);
    }

    #[test]
    fn test_archive_is_idempotent() {
        let mut store = store();
        board(&mut store, "Home");
        let todo = column(&mut store, "Todo");
        let id = card(&mut store, &todo, "x");

        for _ in 0..2 {
            let result = ArchiveCard::new(todo.clone(), id.clone())
                .execute(&mut store)
                .into_result()
                .unwrap();
            assert_eq!(result["archived"], true);
        }
        assert_eq!(store.archived_cards().len(), 1);
    }

    #[test]
    fn test_unarchive_on_other_board() {
        let mut store = store();
        let home = board(&mut store, "Home");
        let todo = column(&mut store, "Todo");
        let id = card(&mut store, &todo, "x");
        ArchiveCard::new(todo.clone(), id.clone())
            .execute(&mut store)
            .into_result()
            .unwrap();

        board(&mut store, "Elsewhere");
        UnarchiveCard::new(home.clone(), todo, id)
            .execute(&mut store)
            .into_result()
            .unwrap();

        assert!(store.archived_cards().is_empty());
        SelectBoard::new(home).execute(&mut store).into_result().unwrap();
        assert_eq!(visible_titles(&store), vec!["x"]);
    }
}
