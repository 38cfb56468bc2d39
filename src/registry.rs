//! Card Registry
//!
//! Pure operations on the canonical card list for the active board.
//! The reactive shell in `store.rs` is the only writer; column views and
//! the drag engine derive from here and never keep their own copy.

use crate::api::ApiError;
use crate::models::{Card, CardDto, Column};

/// Normalize a wire card into a board card.
///
/// This is the single place where a missing or out-of-range `list_id`
/// becomes column 1. The raw record is consumed, never rewritten.
pub fn normalize(dto: CardDto) -> Card {
    Card {
        id: dto.id,
        title: dto.title,
        description: dto.description,
        due_date: dto.due_date,
        column: dto.list_id.and_then(Column::from_id).unwrap_or(Column::Todo),
        total_hours: dto.total_hours,
    }
}

/// Replace the whole registry with a server-fetched card list.
/// Duplicate ids keep their first occurrence.
pub fn load(cards: &mut Vec<Card>, dtos: Vec<CardDto>) {
    cards.clear();
    for dto in dtos {
        if !cards.iter().any(|c| c.id == dto.id) {
            cards.push(normalize(dto));
        }
    }
}

/// Insert or replace a card from a server response.
///
/// An update response without a `list_id` keeps the card's current column;
/// the backend must not silently reset a drag the server never saw.
pub fn upsert(cards: &mut Vec<Card>, dto: CardDto) {
    match cards.iter_mut().find(|c| c.id == dto.id) {
        Some(existing) => {
            let column = dto
                .list_id
                .and_then(Column::from_id)
                .unwrap_or(existing.column);
            *existing = Card {
                column,
                ..normalize(dto)
            };
        }
        None => cards.push(normalize(dto)),
    }
}

/// Reconcile a card create/edit response. Success lands the server's
/// record via `upsert`; failure leaves the registry untouched and hands
/// back the message to surface inline.
pub fn apply_card_result(
    cards: &mut Vec<Card>,
    result: Result<CardDto, ApiError>,
) -> Option<String> {
    match result {
        Ok(dto) => {
            upsert(cards, dto);
            None
        }
        Err(err) => Some(err.to_string()),
    }
}

/// Delete by id; no-op if absent
pub fn remove(cards: &mut Vec<Card>, card_id: u32) {
    cards.retain(|c| c.id != card_id);
}

/// Set a card's column without touching anyone's position
pub fn reassign_column(cards: &mut [Card], card_id: u32, column: Column) {
    if let Some(card) = cards.iter_mut().find(|c| c.id == card_id) {
        card.column = column;
    }
}

/// Move a card to immediately precede another card in the same column.
///
/// No-op when either id is unknown, when the cards sit in different
/// columns (cross-column moves go through `reassign_column`), or when a
/// card is dropped before itself.
pub fn reorder_before(cards: &mut Vec<Card>, card_id: u32, before_id: u32) {
    if card_id == before_id {
        return;
    }
    let Some(from) = cards.iter().position(|c| c.id == card_id) else {
        return;
    };
    let Some(target) = cards.iter().position(|c| c.id == before_id) else {
        return;
    };
    if cards[from].column != cards[target].column {
        return;
    }

    let card = cards.remove(from);
    // Target index may have shifted after the removal
    let to = cards
        .iter()
        .position(|c| c.id == before_id)
        .unwrap_or(cards.len());
    cards.insert(to, card);
}

/// Derived column view: registry order, then a stable due-date ordering
/// (ascending, date-less cards last) layered on top for display.
pub fn column_cards(cards: &[Card], column: Column) -> Vec<Card> {
    let mut view: Vec<Card> = cards.iter().filter(|c| c.column == column).cloned().collect();
    view.sort_by(|a, b| match (a.due_date, b.due_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

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

    fn registry(rows: &[(u32, Option<u32>)]) -> Vec<Card> {
        let mut cards = Vec::new();
        load(&mut cards, rows.iter().map(|&(id, l)| dto(id, l)).collect());
        cards
    }

    #[test]
    fn test_missing_column_lands_in_todo() {
        let cards = registry(&[(1, None), (2, Some(2)), (3, Some(99))]);

        let todo = column_cards(&cards, Column::Todo);
        assert_eq!(todo.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(column_cards(&cards, Column::InProgress).iter().all(|c| c.id == 2));
        assert!(column_cards(&cards, Column::Done).is_empty());
    }

    #[test]
    fn test_views_partition_the_registry() {
        let cards = registry(&[(1, None), (2, Some(1)), (3, Some(2)), (4, Some(3))]);
        let total: usize = Column::ALL
            .iter()
            .map(|&col| column_cards(&cards, col).len())
            .sum();
        assert_eq!(total, cards.len());
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let cards = registry(&[(1, Some(1)), (1, Some(2)), (2, None)]);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].column, Column::Todo);
    }

    #[test]
    fn test_upsert_preserves_column_when_response_has_none() {
        let mut cards = registry(&[(1, Some(2))]);

        let mut edited = dto(1, None);
        edited.title = "Renamed".into();
        upsert(&mut cards, edited);

        assert_eq!(cards[0].title, "Renamed");
        assert_eq!(cards[0].column, Column::InProgress);
    }

    #[test]
    fn test_upsert_applies_column_when_response_has_one() {
        let mut cards = registry(&[(1, Some(2))]);
        upsert(&mut cards, dto(1, Some(3)));
        assert_eq!(cards[0].column, Column::Done);
    }

    #[test]
    fn test_upsert_inserts_unknown_id() {
        let mut cards = registry(&[(1, None)]);
        upsert(&mut cards, dto(9, Some(2)));
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].id, 9);
    }

    #[test]
    fn test_rejected_create_leaves_registry_untouched() {
        let mut cards = registry(&[(1, Some(1)), (2, Some(2))]);
        let before = cards.clone();

        let msg = apply_card_result(
            &mut cards,
            Err(ApiError::Rejected {
                status: 500,
                message: "internal error".into(),
            }),
        );

        assert!(msg.is_some());
        // No id-less placeholder, no partial write: the list is identical
        assert_eq!(cards, before);
    }

    #[test]
    fn test_confirmed_create_lands_the_server_record() {
        let mut cards = registry(&[(1, Some(1))]);

        let msg = apply_card_result(&mut cards, Ok(dto(9, Some(2))));

        assert_eq!(msg, None);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].id, 9);
        assert_eq!(cards[1].column, Column::InProgress);
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let mut cards = registry(&[(1, None)]);
        remove(&mut cards, 42);
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_reorder_before_moves_within_column() {
        let mut cards = registry(&[(1, Some(1)), (2, Some(1)), (3, Some(1))]);
        reorder_before(&mut cards, 3, 1);
        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_reorder_before_self_is_noop() {
        let mut cards = registry(&[(1, Some(1)), (2, Some(1))]);
        reorder_before(&mut cards, 2, 2);
        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_reorder_across_columns_is_noop() {
        let mut cards = registry(&[(1, Some(1)), (2, Some(2))]);
        reorder_before(&mut cards, 1, 2);
        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_reassign_then_reorder_before_self_is_stable() {
        let mut cards = registry(&[(1, Some(1)), (2, Some(2))]);
        reassign_column(&mut cards, 1, Column::InProgress);
        reorder_before(&mut cards, 1, 1);
        assert_eq!(cards[0].column, Column::InProgress);
        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_column_view_orders_by_due_date_dateless_last() {
        let mut cards = registry(&[(1, Some(1)), (2, Some(1)), (3, Some(1))]);
        cards[0].due_date = None;
        cards[1].due_date = NaiveDate::from_ymd_opt(2026, 9, 1);
        cards[2].due_date = NaiveDate::from_ymd_opt(2026, 8, 1);

        let view = column_cards(&cards, Column::Todo);
        assert_eq!(view.iter().map(|c| c.id).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_column_view_keeps_registry_order_for_equal_dates() {
        let mut cards = registry(&[(1, Some(1)), (2, Some(1)), (3, Some(1))]);
        let day = NaiveDate::from_ymd_opt(2026, 8, 1);
        for card in cards.iter_mut() {
            card.due_date = day;
        }
        reorder_before(&mut cards, 3, 1);

        let view = column_cards(&cards, Column::Todo);
        assert_eq!(view.iter().map(|c| c.id).collect::<Vec<_>>(), vec![3, 1, 2]);
    }
}
