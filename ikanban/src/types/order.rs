//! Positional ordering of columns and cards
//!
//! Sequences are plain `Vec`s in display order. Moves follow list-splice
//! semantics: remove at the source index, then insert into the shortened
//! sequence, clamping the insert position to its end.

use crate::error::{BoardError, Result};

/// Move the element at `from` so it ends up at `to` in the shortened sequence.
///
/// `from` must address an element; `to` past the end appends.
pub fn reorder<T>(items: &mut Vec<T>, from: usize, to: usize, what: &str) -> Result<()> {
    if from >= items.len() {
        return Err(BoardError::index_out_of_range(what, from, items.len()));
    }
    let item = items.remove(from);
    insert_at(items, item, Some(to));
    Ok(())
}

/// Insert at `index`, or append when the index is absent or past the end.
/// Returns the position the element landed at.
pub fn insert_at<T>(items: &mut Vec<T>, item: T, index: Option<usize>) -> usize {
    let at = index.map_or(items.len(), |i| i.min(items.len()));
    items.insert(at, item);
    at
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_forward() {
        let mut cols = vec!["A", "B", "C"];
        reorder(&mut cols, 0, 2, "column").unwrap();
        assert_eq!(cols, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_reorder_backward() {
        let mut cols = vec!["A", "B", "C"];
        reorder(&mut cols, 2, 0, "column").unwrap();
        assert_eq!(cols, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_reorder_clamps_target() {
        let mut cols = vec!["A", "B", "C"];
        reorder(&mut cols, 0, 99, "column").unwrap();
        assert_eq!(cols, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_reorder_rejects_bad_source() {
        let mut cols = vec!["A", "B"];
        let err = reorder(&mut cols, 2, 0, "column").unwrap_err();
        assert!(matches!(err, BoardError::IndexOutOfRange { index: 2, len: 2, .. }));
        assert_eq!(cols, vec!["A", "B"]);
    }

    #[test]
    fn test_insert_at() {
        let mut cards = vec![1, 2];
        assert_eq!(insert_at(&mut cards, 3, None), 2);
        assert_eq!(insert_at(&mut cards, 0, Some(0)), 0);
        assert_eq!(insert_at(&mut cards, 9, Some(42)), 4);
        assert_eq!(cards, vec![0, 1, 2, 3, 9]);
    }
}
