//! Archived cards flattened across boards

use super::board::Board;
use super::card::Card;
use super::ids::{BoardId, ColumnId};
use serde::{Deserialize, Serialize};

/// An archived card together with where it lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedCard {
    pub board_id: BoardId,
    pub board_name: String,
    pub column_id: ColumnId,
    pub column_name: String,
    pub card: Card,
}

impl ArchivedCard {
    /// Archived cards on non-archived boards, in board, column, card order
    pub fn collect<'a>(boards: impl IntoIterator<Item = &'a Board>) -> Vec<Self> {
        boards
            .into_iter()
            .filter(|board| !board.archived)
            .flat_map(|board| {
                board.columns.iter().flat_map(move |column| {
                    column
                        .cards
                        .iter()
                        .filter(|card| card.archived)
                        .map(move |card| ArchivedCard {
                            board_id: board.id.clone(),
                            board_name: board.name.clone(),
                            column_id: column.id.clone(),
                            column_name: column.name.clone(),
                            card: card.clone(),
                        })
                })
            })
            .collect()
    }
}
