//! Card commands

mod archive;
mod archived;
mod create;
mod delete;
mod mv;
mod update;

pub use archive::{ArchiveCard, UnarchiveCard};
pub use archived::{DeleteArchivedCard, ListArchivedCards};
pub use create::CreateCard;
pub use delete::DeleteCard;
pub use mv::MoveCard;
pub use update::UpdateCard;
