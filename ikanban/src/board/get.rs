//! GetBoard command: the board as rendered

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{Board, BoardId, Card, PREVIEW_LIMIT};
use chrono::NaiveDate;
use ikanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Get a board for display
#[operation(
    verb = "get",
    noun = "board",
    description = "Get a board with its visible cards and per-card summaries"
)]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GetBoard {
    /// Board to show (defaults to the current board)
    #[param(alias = "board_id")]
    pub id: Option<BoardId>,
}

impl GetBoard {
    /// The current board
    pub fn current() -> Self {
        Self::default()
    }

    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: Some(id.into()) }
    }

    fn run(&self, ctx: &BoardStore) -> Result<Value> {
        let board = ctx.target_board(self.id.as_ref())?;
        let current = ctx.current_board_id() == Some(&board.id);
        Ok(board_view(board, current, ctx.today(), ctx.config().dark_mode))
    }
}

impl Execute<BoardStore, BoardError> for GetBoard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        ExecutionResult::unlogged(self.run(ctx))
    }
}

/// Board with archived cards left out and a summary per card
pub fn board_view(board: &Board, current: bool, today: NaiveDate, dark_mode: bool) -> Value {
    let columns: Vec<Value> = board
        .columns
        .iter()
        .map(|column| {
            let cards: Vec<Value> = column
                .visible_cards()
                .map(|card| card_view(card, today))
                .collect();
            json!({
                "id": column.id,
                "name": column.name,
                "card_count": cards.len(),
                "cards": cards,
            })
        })
        .collect();

    json!({
        "id": board.id,
        "name": board.name,
        "archived": board.archived,
        "current": current,
        "background": board.background.for_theme(dark_mode),
        "columns": columns,
    })
}

/// A card plus the badges the board shows for it
pub fn card_view(card: &Card, today: NaiveDate) -> Value {
    let (completed, total) = card.checklist_progress();
    let links: Vec<Value> = card
        .links
        .iter()
        .map(|link| json!({ "url": link.url, "title": link.display_title() }))
        .collect();

    json!({
        "id": card.id,
        "title": card.title,
        "description": card.description,
        "due_date": card.due_date,
        "checklist": card.checklist,
        "links": card.links,
        "archived": card.archived,
        "summary": {
            "preview": card.description_preview(PREVIEW_LIMIT),
            "due_status": card.due_status(today),
            "checklist": { "completed": completed, "total": total },
            "links": links,
        },
    })
}
