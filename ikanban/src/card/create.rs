//! CreateCard command

use crate::command_input;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{BoardId, Card, CardFields, ChecklistItem, ColumnId, Link};
use chrono::NaiveDate;
use ikanban_operations::{operation, Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

/// Append a card to a column
#[operation(
    verb = "create",
    noun = "card",
    description = "Create a card at the end of a column"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateCard {
    /// Column to add the card to
    #[param(alias = "column")]
    pub column_id: ColumnId,
    /// The card title
    #[param(alias = "name")]
    pub title: String,
    /// Rich text description
    #[serde(default)]
    #[param(alias = "desc")]
    pub description: String,
    /// Due date, YYYY-MM-DD
    #[serde(default)]
    #[param(alias = "due")]
    pub due_date: Option<NaiveDate>,
    /// Checklist items; blank ones are dropped
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    /// http(s) links
    #[serde(default)]
    pub links: Vec<Link>,
    /// Board the column is on (defaults to the current board)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[param(alias = "board")]
    pub board_id: Option<BoardId>,
}

impl CreateCard {
    pub fn new(column_id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            title: title.into(),
            description: String::new(),
            due_date: None,
            checklist: Vec::new(),
            links: Vec::new(),
            board_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_checklist(mut self, checklist: Vec<ChecklistItem>) -> Self {
        self.checklist = checklist;
        self
    }

    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = links;
        self
    }

    pub fn with_board(mut self, board_id: impl Into<BoardId>) -> Self {
        self.board_id = Some(board_id.into());
        self
    }

    fn fields(&self) -> CardFields {
        CardFields {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date,
            checklist: self.checklist.clone(),
            links: self.links.clone(),
        }
    }

    fn run(&self, ctx: &mut BoardStore) -> Result<Value> {
        let fields = self.fields().normalized()?;
        let board_id = ctx.resolve_board_id(self.board_id.as_ref())?;
        let column = ctx.column_mut(Some(&board_id), &self.column_id)?;

        let card = Card::from_fields(fields);
        debug!(card = %card.id, column = %column.id, "creating card");
        let mut result = serde_json::to_value(&card)?;
        result["column_id"] = serde_json::json!(column.id);
        result["board_id"] = serde_json::json!(board_id);
        column.cards.push(card);

        ctx.commit()?;
        Ok(result)
    }
}

impl Execute<BoardStore, BoardError> for CreateCard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let result = self.run(ctx);
        ExecutionResult::logged(self.op_string(), command_input(self), started, result)
    }

    fn affected_resource_ids(&self, result: &Value) -> Vec<String> {
        result
            .get("id")
            .and_then(|v| v.as_str())
            .map(|id| vec![id.to_string(), self.column_id.to_string()])
            .unwrap_or_default()
    }
}
