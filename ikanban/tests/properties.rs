//! Property tests for id uniqueness and card conservation

use ikanban::{
    board::CreateBoard,
    card::{CreateCard, DeleteCard, MoveCard},
    column::{CreateColumn, DeleteColumn, ReorderColumns},
    BoardConfig, BoardStore, Execute,
};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Action {
    AddColumn,
    AddCard(usize),
    MoveCard {
        from: usize,
        card: usize,
        to: usize,
        index: Option<usize>,
    },
    DeleteCard(usize, usize),
    DeleteColumn(usize),
    Reorder(usize, usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        1 => Just(Action::AddColumn),
        3 => any::<usize>().prop_map(Action::AddCard),
        4 => (any::<usize>(), any::<usize>(), any::<usize>(), proptest::option::of(0usize..8))
            .prop_map(|(from, card, to, index)| Action::MoveCard { from, card, to, index }),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(c, k)| Action::DeleteCard(c, k)),
        1 => any::<usize>().prop_map(Action::DeleteColumn),
        1 => (any::<usize>(), 0usize..8).prop_map(|(f, t)| Action::Reorder(f, t)),
    ]
}

/// Apply `action`, returning the expected change in total card count
fn apply(store: &mut BoardStore, action: &Action) -> isize {
    let board = store.current_board().unwrap().clone();
    let columns = &board.columns;
    let pick = |i: usize, len: usize| (len > 0).then(|| i % len);

    match action {
        Action::AddColumn => {
            CreateColumn::new("col").execute(store).into_result().unwrap();
            0
        }
        Action::AddCard(c) => match pick(*c, columns.len()) {
            Some(c) => {
                CreateCard::new(columns[c].id.clone(), "card")
                    .execute(store)
                    .into_result()
                    .unwrap();
                1
            }
            None => 0,
        },
        Action::MoveCard { from, card, to, index } => {
            let (Some(from), Some(to)) = (pick(*from, columns.len()), pick(*to, columns.len()))
            else {
                return 0;
            };
            let Some(card) = pick(*card, columns[from].cards.len()) else {
                return 0;
            };
            let card_id = columns[from].cards[card].id.clone();
            let mut command = MoveCard::new(card_id.clone(), columns[from].id.clone(), columns[to].id.clone());
            command.target_index = *index;
            command.execute(store).into_result().unwrap();

            if from != to {
                let dest = &store.current_board().unwrap().columns[to];
                let expected = index.map_or(dest.cards.len() - 1, |i| i.min(dest.cards.len() - 1));
                assert_eq!(dest.cards[expected].id, card_id);
            }
            0
        }
        Action::DeleteCard(c, k) => {
            let Some(c) = pick(*c, columns.len()) else {
                return 0;
            };
            let Some(k) = pick(*k, columns[c].cards.len()) else {
                return 0;
            };
            DeleteCard::new(columns[c].id.clone(), columns[c].cards[k].id.clone())
                .execute(store)
                .into_result()
                .unwrap();
            -1
        }
        Action::DeleteColumn(c) => match pick(*c, columns.len()) {
            Some(c) => {
                DeleteColumn::new(columns[c].id.clone())
                    .execute(store)
                    .into_result()
                    .unwrap();
                -(columns[c].cards.len() as isize)
            }
            None => 0,
        },
        Action::Reorder(from, to) => match pick(*from, columns.len()) {
            Some(from) => {
                ReorderColumns::new(from, *to).execute(store).into_result().unwrap();
                0
            }
            None => 0,
        },
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ids_stay_unique_and_cards_are_conserved(actions in prop::collection::vec(action(), 1..60)) {
        let mut store = BoardStore::in_memory(BoardConfig::default());
        CreateBoard::new("Home").execute(&mut store).into_result().unwrap();
        CreateColumn::new("Todo").execute(&mut store).into_result().unwrap();

        let mut expected: isize = 0;
        for action in &actions {
            expected += apply(&mut store, action);

            let board = store.current_board().unwrap();
            prop_assert_eq!(board.card_count() as isize, expected);

            let column_ids: HashSet<_> = board.columns.iter().map(|c| &c.id).collect();
            prop_assert_eq!(column_ids.len(), board.columns.len());
            let card_ids: HashSet<_> = board
                .columns
                .iter()
                .flat_map(|c| c.cards.iter().map(|card| &card.id))
                .collect();
            prop_assert_eq!(card_ids.len(), board.card_count());
        }
    }
}
