//! Drop Resolution
//!
//! Turns a released drag gesture into a registry mutation. The gesture
//! mechanics (grab threshold, single dragging slot, target tracking) live
//! in the `board-dnd` crate; this module decides what a drop *means*,
//! which can only be done at release time because the pointer may cross
//! columns mid-gesture.
//!
//! Nothing here raises: a drag has no retry semantics, so bad input is
//! absorbed as a no-op.

use board_dnd::DropTarget;

use crate::models::{Card, Column};
use crate::registry;

/// What a resolved drop did to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Card now lives in another column (worth persisting)
    Reassigned(Column),
    /// Card moved before another card in its own column (client-local)
    Reordered { before: u32 },
    /// Nothing happened (unknown ids, drop on self, bogus column)
    Ignored,
}

/// Apply a released drop to the card list.
///
/// Disambiguation, in order:
/// - drop over a column surface reassigns to that column;
/// - drop over a card in a *different* effective column is a move to that
///   card's column, not a reorder;
/// - drop over a card in the same column reorders before it;
/// - drop over yourself cancels.
pub fn apply_drop(cards: &mut Vec<Card>, dragged_id: u32, target: DropTarget) -> DropOutcome {
    let Some(dragged_column) = cards.iter().find(|c| c.id == dragged_id).map(|c| c.column) else {
        return DropOutcome::Ignored;
    };

    match target {
        DropTarget::Column(column_id) => {
            let Some(column) = Column::from_id(column_id) else {
                return DropOutcome::Ignored;
            };
            registry::reassign_column(cards, dragged_id, column);
            DropOutcome::Reassigned(column)
        }
        DropTarget::Card(target_id) => {
            if target_id == dragged_id {
                return DropOutcome::Ignored;
            }
            let Some(target_column) = cards.iter().find(|c| c.id == target_id).map(|c| c.column)
            else {
                return DropOutcome::Ignored;
            };

            if target_column != dragged_column {
                registry::reassign_column(cards, dragged_id, target_column);
                DropOutcome::Reassigned(target_column)
            } else {
                registry::reorder_before(cards, dragged_id, target_id);
                DropOutcome::Reordered { before: target_id }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardDto;

    fn board() -> Vec<Card> {
        // A(col 1), B(col 1), C(col 2)
        let mut cards = Vec::new();
        registry::load(
            &mut cards,
            vec![
                dto(1, Some(1)), // A
                dto(2, Some(1)), // B
                dto(3, Some(2)), // C
            ],
        );
        cards
    }

    fn dto(id: u32, list_id: Option<u32>) -> CardDto {
        CardDto {
            id,
            title: format!("Card {}", id),
            description: None,
            due_date: None,
            board_id: Some(1),
            list_id,
            total_hours: 0.0,
        }
    }

    fn column_of(cards: &[Card], id: u32) -> Column {
        cards.iter().find(|c| c.id == id).unwrap().column
    }

    #[test]
    fn test_drop_on_column_reassigns_only_the_dragged_card() {
        let mut cards = board();
        let outcome = apply_drop(&mut cards, 1, DropTarget::Column(2));

        assert_eq!(outcome, DropOutcome::Reassigned(Column::InProgress));
        assert_eq!(column_of(&cards, 1), Column::InProgress);
        assert_eq!(column_of(&cards, 2), Column::Todo);
        assert_eq!(column_of(&cards, 3), Column::InProgress);
    }

    #[test]
    fn test_drop_on_card_same_column_reorders() {
        let mut cards = board();
        let outcome = apply_drop(&mut cards, 2, DropTarget::Card(1));

        assert_eq!(outcome, DropOutcome::Reordered { before: 1 });
        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2, 1, 3]);
    }

    #[test]
    fn test_drop_on_card_in_other_column_is_a_column_move() {
        let mut cards = board();
        let outcome = apply_drop(&mut cards, 2, DropTarget::Card(3));

        assert_eq!(outcome, DropOutcome::Reassigned(Column::InProgress));
        assert_eq!(column_of(&cards, 2), Column::InProgress);
        // No reorder happened; registry order is untouched
        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_drop_on_self_cancels() {
        let mut cards = board();
        assert_eq!(apply_drop(&mut cards, 1, DropTarget::Card(1)), DropOutcome::Ignored);
        assert_eq!(cards, board());
    }

    #[test]
    fn test_unknown_ids_and_bogus_columns_are_absorbed() {
        let mut cards = board();
        assert_eq!(apply_drop(&mut cards, 99, DropTarget::Column(2)), DropOutcome::Ignored);
        assert_eq!(apply_drop(&mut cards, 1, DropTarget::Card(99)), DropOutcome::Ignored);
        assert_eq!(apply_drop(&mut cards, 1, DropTarget::Column(7)), DropOutcome::Ignored);
        assert_eq!(cards, board());
    }
}
