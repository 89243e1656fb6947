//! Board commands

mod archive;
mod background;
mod create;
mod delete;
mod get;
mod list;
mod select;

pub use archive::{ArchiveBoard, UnarchiveBoard};
pub use background::SetBoardBackground;
pub use create::CreateBoard;
pub use delete::DeleteBoard;
pub use get::{board_view, card_view, GetBoard};
pub use list::{ListArchivedBoards, ListBoards};
pub use select::SelectBoard;
