//! Task feed: every checklist item across boards, grouped by board and card

use super::board::Board;
use super::ids::{BoardId, CardId, ChecklistItemId, ColumnId};
use serde::{Deserialize, Serialize};

/// The aggregated feed plus its totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskFeed {
    pub tasks: Vec<BoardTaskGroup>,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
}

/// Cards with checklist items on one board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardTaskGroup {
    pub board_id: BoardId,
    pub board_name: String,
    pub cards: Vec<CardTasks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardTasks {
    pub card_id: CardId,
    pub card_title: String,
    pub column_id: ColumnId,
    pub column_name: String,
    pub archived: bool,
    pub checklist: Vec<TaskItem>,
}

/// A checklist item tagged with its position in the card's checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub index: usize,
    pub id: ChecklistItemId,
    pub text: String,
    pub checked: bool,
}

impl TaskFeed {
    /// Walk non-archived boards in order and collect cards with checklist items.
    ///
    /// With `include_archived_cards` unset, archived cards are skipped as well.
    pub fn collect<'a>(
        boards: impl IntoIterator<Item = &'a Board>,
        include_archived_cards: bool,
    ) -> Self {
        let mut feed = TaskFeed::default();

        for board in boards.into_iter().filter(|b| !b.archived) {
            let mut group = BoardTaskGroup {
                board_id: board.id.clone(),
                board_name: board.name.clone(),
                cards: Vec::new(),
            };

            for column in &board.columns {
                let cards = column
                    .cards
                    .iter()
                    .filter(|card| !card.checklist.is_empty())
                    .filter(|card| include_archived_cards || !card.archived);

                for card in cards {
                    let (completed, total) = card.checklist_progress();
                    feed.total_tasks += total;
                    feed.completed_tasks += completed;

                    group.cards.push(CardTasks {
                        card_id: card.id.clone(),
                        card_title: card.title.clone(),
                        column_id: column.id.clone(),
                        column_name: column.name.clone(),
                        archived: card.archived,
                        checklist: card
                            .checklist
                            .iter()
                            .enumerate()
                            .map(|(index, item)| TaskItem {
                                index,
                                id: item.id.clone(),
                                text: item.text.clone(),
                                checked: item.checked,
                            })
                            .collect(),
                    });
                }
            }

            if !group.cards.is_empty() {
                feed.tasks.push(group);
            }
        }

        feed.pending_tasks = feed.total_tasks - feed.completed_tasks;
        feed
    }
}
