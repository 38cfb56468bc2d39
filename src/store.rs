//! Global Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! the sole owner of the card registry; every mutation goes through the
//! pure ops in `registry.rs` via the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;

use board_dnd::DropTarget;

use crate::api::ApiError;
use crate::drag::{self, DropOutcome};
use crate::models::{Card, CardDto};
use crate::registry;

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Cards of the active board, in authoritative order
    pub cards: Vec<Card>,
    /// Active board id
    pub board_id: u32,
}

impl BoardState {
    pub fn new(board_id: u32) -> Self {
        Self {
            board_id,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the registry with a fresh server load
pub fn store_load_cards(store: &BoardStore, dtos: Vec<CardDto>) {
    registry::load(&mut store.cards().write(), dtos);
}

/// Reconcile a create/edit response: a confirmed record lands in the
/// registry, a failure leaves it untouched and yields the message to show
pub fn store_apply_card_result(
    store: &BoardStore,
    result: Result<CardDto, ApiError>,
) -> Option<String> {
    registry::apply_card_result(&mut store.cards().write(), result)
}

/// Apply a server-confirmed delete
pub fn store_remove_card(store: &BoardStore, card_id: u32) {
    registry::remove(&mut store.cards().write(), card_id);
}

/// Apply a released drag optimistically
pub fn store_apply_drop(store: &BoardStore, dragged_id: u32, target: DropTarget) -> DropOutcome {
    drag::apply_drop(&mut store.cards().write(), dragged_id, target)
}

/// Refresh a card's hours badge from a freshly aggregated worklog total
pub fn store_set_card_hours(store: &BoardStore, card_id: u32, total_hours: f64) {
    store
        .cards()
        .write()
        .iter_mut()
        .find(|card| card.id == card_id)
        .map(|card| card.total_hours = total_hours);
}
