//! Columns: a named, ordered sequence of cards

use super::card::Card;
use super::ids::{CardId, ColumnId};
use serde::{Deserialize, Serialize};

/// A column defines a workflow stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(),
            name: name.into(),
            cards: Vec::new(),
        }
    }

    pub fn card_index(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == id)
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    pub fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| &c.id == id)
    }

    /// Detach a card, returning it with the index it occupied
    pub fn take_card(&mut self, id: &CardId) -> Option<(usize, Card)> {
        let index = self.card_index(id)?;
        Some((index, self.cards.remove(index)))
    }

    /// Cards that are not archived, in order
    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| !c.archived)
    }
}
