//! The full-state snapshot handed to storage

use super::archive::ArchivedCard;
use super::board::Board;
use super::feed::TaskFeed;
use super::ids::BoardId;
use serde::{Deserialize, Serialize};

/// Snapshot format version written by this crate
pub const STATE_VERSION: u32 = 1;

fn state_version() -> u32 {
    STATE_VERSION
}

/// Every board plus the current selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    #[serde(default = "state_version")]
    pub version: u32,
    #[serde(default, alias = "currentBoardId")]
    pub current_board_id: Option<BoardId>,
    #[serde(default)]
    pub boards: Vec<Board>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            current_board_id: None,
            boards: Vec::new(),
        }
    }
}

impl BoardState {
    pub fn board_index(&self, id: &BoardId) -> Option<usize> {
        self.boards.iter().position(|b| &b.id == id)
    }

    pub fn board(&self, id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| &b.id == id)
    }

    pub fn board_mut(&mut self, id: &BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| &b.id == id)
    }

    /// The selected board, if the selection still resolves
    pub fn current_board(&self) -> Option<&Board> {
        self.current_board_id.as_ref().and_then(|id| self.board(id))
    }

    /// Boards shown in the board selector
    pub fn active_boards(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter().filter(|b| !b.archived)
    }

    pub fn archived_boards(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter().filter(|b| b.archived)
    }

    pub fn archived_cards(&self) -> Vec<ArchivedCard> {
        ArchivedCard::collect(&self.boards)
    }

    pub fn task_feed(&self, include_archived_cards: bool) -> TaskFeed {
        TaskFeed::collect(&self.boards, include_archived_cards)
    }

    /// Clear the selection if it points at `id`
    pub fn deselect(&mut self, id: &BoardId) -> bool {
        if self.current_board_id.as_ref() == Some(id) {
            self.current_board_id = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_legacy_shape() {
        let state: BoardState = serde_json::from_str(
            r##"{
                "currentBoardId": "b1",
                "boards": [{
                    "id": "b1",
                    "name": "Home",
                    "background": {"type": "color", "value": "#f1f5f9"},
                    "columns": [{"id": "c1", "name": "Todo", "cards": []}]
                }]
            }"##,
        )
        .unwrap();

        assert_eq!(state.version, STATE_VERSION);
        assert_eq!(state.current_board().unwrap().name, "Home");
        assert!(!state.boards[0].archived);
    }

    #[test]
    fn test_deselect_only_current() {
        let mut state = BoardState::default();
        let a = Board::new("a");
        let b = Board::new("b");
        state.current_board_id = Some(a.id.clone());
        state.boards = vec![a.clone(), b.clone()];

        assert!(!state.deselect(&b.id));
        assert_eq!(state.current_board_id, Some(a.id.clone()));
        assert!(state.deselect(&a.id));
        assert_eq!(state.current_board_id, None);
    }

    #[test]
    fn test_active_and_archived_partition() {
        let mut state = BoardState::default();
        let mut archived = Board::new("old");
        archived.archived = true;
        state.boards = vec![Board::new("new"), archived];

        assert_eq!(state.active_boards().count(), 1);
        assert_eq!(state.archived_boards().next().unwrap().name, "old");
    }
}
