//! Core types for the board store

mod archive;
mod board;
mod card;
mod column;
mod feed;
mod ids;
mod operation;
pub mod order;
mod state;

// Re-export all types
pub use archive::ArchivedCard;
pub use board::{Background, BackgroundKind, Board, DARK_BACKGROUND, LIGHT_BACKGROUND};
pub use card::{Card, CardFields, ChecklistItem, DueStatus, Link, DUE_SOON_DAYS, PREVIEW_LIMIT};
pub use column::Column;
pub use feed::{BoardTaskGroup, CardTasks, TaskFeed, TaskItem};
pub use ids::{BoardId, CardId, ChecklistItemId, ColumnId, LinkId};
pub use operation::{Noun, OpRequest, Verb};
pub use state::{BoardState, STATE_VERSION};
