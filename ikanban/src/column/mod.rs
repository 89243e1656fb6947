//! Column commands

mod create;
mod delete;
mod reorder;

pub use create::CreateColumn;
pub use delete::DeleteColumn;
pub use reorder::ReorderColumns;
