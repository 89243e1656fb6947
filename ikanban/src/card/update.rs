//! UpdateCard command

use crate::command_input;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{BoardId, CardFields, CardId, ChecklistItem, ColumnId, Link};
use chrono::NaiveDate;
use ikanban_operations::{operation, Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Replace a card's title, description, due date, checklist and links.
///
/// Fields left out of the input are cleared, not kept.
#[operation(
    verb = "update",
    noun = "card",
    description = "Replace a card's content (title, description, due date, checklist, links)"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateCard {
    /// The card to update
    #[param(alias = "id")]
    pub card_id: CardId,
    /// Column holding the card
    #[param(alias = "column")]
    pub column_id: ColumnId,
    /// The new title
    #[param(alias = "name")]
    pub title: String,
    #[serde(default)]
    #[param(alias = "desc")]
    pub description: String,
    /// Due date, YYYY-MM-DD
    #[serde(default)]
    #[param(alias = "due")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub links: Vec<Link>,
    /// Board the column is on (defaults to the current board)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[param(alias = "board")]
    pub board_id: Option<BoardId>,
}

impl UpdateCard {
    pub fn new(
        column_id: impl Into<ColumnId>,
        card_id: impl Into<CardId>,
        fields: CardFields,
    ) -> Self {
        Self {
            card_id: card_id.into(),
            column_id: column_id.into(),
            title: fields.title,
            description: fields.description,
            due_date: fields.due_date,
            checklist: fields.checklist,
            links: fields.links,
            board_id: None,
        }
    }

    pub fn with_board(mut self, board_id: impl Into<BoardId>) -> Self {
        self.board_id = Some(board_id.into());
        self
    }

    fn run(&self, ctx: &mut BoardStore) -> Result<Value> {
        let fields = CardFields {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date,
            checklist: self.checklist.clone(),
            links: self.links.clone(),
        }
        .normalized()?;

        let card = ctx.card_mut(self.board_id.as_ref(), &self.column_id, &self.card_id)?;
        card.replace_fields(fields);
        let result = serde_json::to_value(&*card)?;

        ctx.commit()?;
        Ok(result)
    }
}

impl Execute<BoardStore, BoardError> for UpdateCard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let result = self.run(ctx);
        ExecutionResult::logged(self.op_string(), command_input(self), started, result)
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.card_id.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{ArchiveCard, CreateCard};
    use crate::test_support::{board, column, store};

    #[test]
    fn test_update_is_full_replace() {
        let mut store = store();
        board(&mut store, "Home");
        let todo = column(&mut store, "Todo");
        let created = CreateCard::new(todo.clone(), "Draft")
            .with_description("old text")
            .with_due_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
            .with_links(vec![Link::new("https://a.example")])
            .execute(&mut store)
            .into_result()
            .unwrap();
        let card_id = CardId::from_string(created["id"].as_str().unwrap());

        let result = UpdateCard::new(todo, card_id.clone(), CardFields::new("Final"))
            .execute(&mut store)
            .into_result()
            .unwrap();

        assert_eq!(result["id"], card_id.as_str());
        assert_eq!(result["title"], "Final");
        assert_eq!(result["description"], "");
        assert_eq!(result["due_date"], Value::Null);
        assert_eq!(result["links"], serde_json::json!([]));
    }

    #[test]
    fn test_update_keeps_archived_flag() {
        let mut store = store();
        board(&mut store, "Home");
        let todo = column(&mut store, "Todo");
        let card_id = crate::test_support::card(&mut store, &todo, "x");
        ArchiveCard::new(todo.clone(), card_id.clone())
            .execute(&mut store)
            .into_result()
            .unwrap();

        let result = UpdateCard::new(todo, card_id, CardFields::new("y"))
            .execute(&mut store)
            .into_result()
            .unwrap();
        assert_eq!(result["archived"], true);
    }

    #[test]
    fn test_update_invalid_fields_change_nothing() {
        let mut store = store();
        board(&mut store, "Home");
        let todo = column(&mut store, "Todo");
        let card_id = crate::test_support::card(&mut store, &todo, "keep");
        let before = store.state().clone();

        let err = UpdateCard::new(todo, card_id, CardFields::new("  "))
            .execute(&mut store)
            .into_result()
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_update_unknown_card() {
        let mut store = store();
        board(&mut store, "Home");
        let todo = column(&mut store, "Todo");
        let err = UpdateCard::new(todo, "nope", CardFields::new("t"))
            .execute(&mut store)
            .into_result()
            .unwrap_err();
        assert!(matches!(err, BoardError::CardNotFound { .. }));
    }
}
