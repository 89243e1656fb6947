//! Task feed commands

mod feed;
mod toggle;

pub use feed::GetTaskFeed;
pub use toggle::ToggleTask;
