//! Boards and their background descriptor

use super::column::Column;
use super::ids::{BoardId, ColumnId};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// Default background color in the light theme
pub const LIGHT_BACKGROUND: &str = "#f1f5f9";
/// Default background color in the dark theme
pub const DARK_BACKGROUND: &str = "#374151";

/// How a background value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    /// CSS color
    Color,
    /// Image url
    Image,
    /// Uploaded image, inlined as a `data:image/...` url
    File,
}

/// A board's background, replaced wholesale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    #[serde(alias = "type")]
    pub kind: BackgroundKind,
    pub value: String,
}

impl Background {
    pub fn new(kind: BackgroundKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn color(value: impl Into<String>) -> Self {
        Self::new(BackgroundKind::Color, value)
    }

    /// The theme's default color
    pub fn default_for_theme(dark_mode: bool) -> Self {
        Self::color(if dark_mode {
            DARK_BACKGROUND
        } else {
            LIGHT_BACKGROUND
        })
    }

    /// The background as rendered under the given theme. The light default
    /// color reads as the dark default in dark mode.
    pub fn for_theme(&self, dark_mode: bool) -> Self {
        if dark_mode && self.kind == BackgroundKind::Color && self.value == LIGHT_BACKGROUND {
            Self::color(DARK_BACKGROUND)
        } else {
            self.clone()
        }
    }

    pub fn validated(self) -> Result<Self> {
        let value = self.value.trim().to_string();
        if value.is_empty() {
            return Err(BoardError::missing_field("background.value"));
        }
        if self.kind == BackgroundKind::File && !value.starts_with("data:image/") {
            return Err(BoardError::invalid_value(
                "background.value",
                "file backgrounds must be data:image/ urls",
            ));
        }
        Ok(Self {
            kind: self.kind,
            value,
        })
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::default_for_theme(false)
    }
}

/// A kanban board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub archived: bool,
}

impl Board {
    /// Create an empty board with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BoardId::new(),
            name: name.into(),
            columns: Vec::new(),
            background: Background::default(),
            archived: false,
        }
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    /// Total cards across all columns, archived included
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation() {
        let board = Board::new("Home");
        assert_eq!(board.name, "Home");
        assert!(board.columns.is_empty());
        assert!(!board.archived);
        assert_eq!(board.background, Background::color(LIGHT_BACKGROUND));
    }

    #[test]
    fn test_background_serializes_with_kind() {
        let bg = Background::new(BackgroundKind::Image, "https://example.com/a.png");
        let json = serde_json::to_value(&bg).unwrap();
        assert_eq!(json["kind"], "image");

        let legacy: Background =
            serde_json::from_str(r##"{"type": "color", "value": "#fff"}"##).unwrap();
        assert_eq!(legacy, Background::color("#fff"));
    }

    #[test]
    fn test_background_validation() {
        assert!(Background::color("  ").validated().is_err());
        assert!(Background::new(BackgroundKind::File, "https://x/y.png")
            .validated()
            .is_err());
        let ok = Background::new(BackgroundKind::File, "data:image/png;base64,AAAA")
            .validated()
            .unwrap();
        assert_eq!(ok.kind, BackgroundKind::File);
    }

    #[test]
    fn test_background_for_theme() {
        let light = Background::default();
        assert_eq!(light.for_theme(true).value, DARK_BACKGROUND);
        assert_eq!(light.for_theme(false).value, LIGHT_BACKGROUND);
        let custom = Background::color("#123456");
        assert_eq!(custom.for_theme(true), custom);
    }
}
