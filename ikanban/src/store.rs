//! BoardStore: the context every command executes against
//!
//! The store owns the [`BoardState`] and its storage collaborator. It offers
//! lookup primitives, read-only queries and [`BoardStore::commit`]; commands
//! in the `board`, `column`, `card` and `task` modules do the actual work.

use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::storage::{MemoryStorage, Storage};
use crate::types::{
    ArchivedCard, Board, BoardId, BoardState, Card, CardId, Column, ColumnId, TaskFeed,
};
use ikanban_operations::LogEntry;
use tracing::{debug, info, warn};

/// In-memory board state plus the storage it is saved to
pub struct BoardStore {
    state: BoardState,
    storage: Box<dyn Storage>,
    config: BoardConfig,
}

impl std::fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardStore")
            .field("boards", &self.state.boards.len())
            .field("current_board_id", &self.state.current_board_id)
            .finish_non_exhaustive()
    }
}

impl BoardStore {
    /// Load the last snapshot from `storage`, or start empty
    pub fn open(storage: Box<dyn Storage>, config: BoardConfig) -> Result<Self> {
        let state = match storage.load()? {
            Some(state) => {
                info!(boards = state.boards.len(), "loaded board state");
                state
            }
            None => {
                info!("no saved state, starting empty");
                BoardState::default()
            }
        };
        Ok(Self {
            state,
            storage,
            config,
        })
    }

    /// An empty store backed by [`MemoryStorage`]
    pub fn in_memory(config: BoardConfig) -> Self {
        Self {
            state: BoardState::default(),
            storage: Box::new(MemoryStorage::new()),
            config,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Hand the full snapshot to storage.
    ///
    /// On failure the in-memory state is left as is and the error is returned.
    pub fn commit(&mut self) -> Result<()> {
        self.storage.save(&self.state).map_err(|e| {
            warn!(error = %e, "failed to save board state");
            BoardError::Storage(e)
        })
    }

    // =========================================================================
    // Primitives
    // =========================================================================

    pub fn boards_mut(&mut self) -> &mut Vec<Board> {
        &mut self.state.boards
    }

    pub fn current_board_id(&self) -> Option<&BoardId> {
        self.state.current_board_id.as_ref()
    }

    pub fn set_current_board(&mut self, id: Option<BoardId>) {
        self.state.current_board_id = id;
    }

    /// Clear the selection if it points at `id`
    pub fn deselect(&mut self, id: &BoardId) -> bool {
        self.state.deselect(id)
    }

    pub fn board(&self, id: &BoardId) -> Result<&Board> {
        self.state
            .board(id)
            .ok_or_else(|| BoardError::board_not_found(id))
    }

    pub fn board_mut(&mut self, id: &BoardId) -> Result<&mut Board> {
        self.state
            .board_mut(id)
            .ok_or_else(|| BoardError::board_not_found(id))
    }

    /// The given board id, or the current board's id when none is given
    pub fn resolve_board_id(&self, id: Option<&BoardId>) -> Result<BoardId> {
        match id {
            Some(id) => Ok(self.board(id)?.id.clone()),
            None => self
                .state
                .current_board()
                .map(|b| b.id.clone())
                .ok_or(BoardError::NoCurrentBoard),
        }
    }

    /// The given board, or the current board
    pub fn target_board(&self, id: Option<&BoardId>) -> Result<&Board> {
        let id = self.resolve_board_id(id)?;
        self.board(&id)
    }

    pub fn target_board_mut(&mut self, id: Option<&BoardId>) -> Result<&mut Board> {
        let id = self.resolve_board_id(id)?;
        self.board_mut(&id)
    }

    pub fn column_mut(
        &mut self,
        board_id: Option<&BoardId>,
        column_id: &ColumnId,
    ) -> Result<&mut Column> {
        self.target_board_mut(board_id)?
            .column_mut(column_id)
            .ok_or_else(|| BoardError::column_not_found(column_id))
    }

    pub fn card_mut(
        &mut self,
        board_id: Option<&BoardId>,
        column_id: &ColumnId,
        card_id: &CardId,
    ) -> Result<&mut Card> {
        self.column_mut(board_id, column_id)?
            .card_mut(card_id)
            .ok_or_else(|| BoardError::card_not_found(card_id))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The selected board, if any
    pub fn current_board(&self) -> Option<&Board> {
        self.state.current_board()
    }

    /// Non-archived boards in store order
    pub fn active_boards(&self) -> Vec<&Board> {
        self.state.active_boards().collect()
    }

    pub fn archived_boards(&self) -> Vec<&Board> {
        self.state.archived_boards().collect()
    }

    pub fn archived_cards(&self) -> Vec<ArchivedCard> {
        self.state.archived_cards()
    }

    /// The task feed, honouring `feed_include_archived_cards`
    pub fn task_feed(&self) -> TaskFeed {
        self.state
            .task_feed(self.config.feed_include_archived_cards)
    }

    /// Today's date for due-status evaluation
    pub fn today(&self) -> chrono::NaiveDate {
        chrono::Local::now().date_naive()
    }

    // =========================================================================
    // Activity
    // =========================================================================

    pub fn append_activity(&mut self, entry: &LogEntry) -> Result<()> {
        debug!(op = %entry.op, id = %entry.id, "recording activity");
        Ok(self.storage.append_activity(entry)?)
    }

    pub fn read_activity(&self, limit: Option<usize>) -> Result<Vec<LogEntry>> {
        Ok(self.storage.read_activity(limit)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;

    fn store_with_board() -> (BoardStore, BoardId) {
        let mut store = BoardStore::in_memory(BoardConfig::default());
        let board = Board::new("Home");
        let id = board.id.clone();
        store.boards_mut().push(board);
        (store, id)
    }

    #[test]
    fn test_resolve_board_id_uses_current() {
        let (mut store, id) = store_with_board();
        assert!(matches!(
            store.resolve_board_id(None),
            Err(BoardError::NoCurrentBoard)
        ));

        store.set_current_board(Some(id.clone()));
        assert_eq!(store.resolve_board_id(None).unwrap(), id);

        let missing = BoardId::from_string("nope");
        assert!(store.resolve_board_id(Some(&missing)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_stale_selection_is_no_current_board() {
        let (mut store, _) = store_with_board();
        store.set_current_board(Some(BoardId::from_string("gone")));
        assert!(store.current_board().is_none());
        assert!(matches!(
            store.target_board(None),
            Err(BoardError::NoCurrentBoard)
        ));
    }

    #[test]
    fn test_open_loads_saved_state() {
        let mut state = BoardState::default();
        state.boards.push(Board::new("Saved"));
        let storage = MemoryStorage::with_state(&state).unwrap();

        let store = BoardStore::open(Box::new(storage), BoardConfig::default()).unwrap();
        assert_eq!(store.state(), &state);
    }

    #[test]
    fn test_commit_failure_keeps_memory_state() {
        let storage = MemoryStorage::new().with_quota(10);
        let mut store = BoardStore::open(Box::new(storage), BoardConfig::default()).unwrap();
        store.boards_mut().push(Board::new("Too big to save"));

        let err = store.commit().unwrap_err();
        assert!(matches!(
            err,
            BoardError::Storage(StorageError::QuotaExceeded { .. })
        ));
        assert_eq!(store.state().boards.len(), 1);
    }
}
