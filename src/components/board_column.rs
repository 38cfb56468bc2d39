//! Board Column Component
//!
//! One droppable column. Knows nothing about the backend; it derives its
//! card list from the registry on every render.

use leptos::prelude::*;

use board_dnd::{make_on_column_mouseenter, make_on_mouseleave, DndSignals, DropTarget};

use crate::models::{Card, Column};
use crate::registry;
use crate::store::{use_board_store, BoardStateStoreFields};

use super::CardItem;

#[component]
pub fn BoardColumn(
    column: Column,
    dnd: DndSignals,
    on_worklogs: Callback<Card>,
    on_edit: Callback<Card>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let store = use_board_store();

    // Derived view: effective-column filter + due-date display ordering
    let cards = Memo::new(move |_| registry::column_cards(&store.cards().read(), column));

    let on_mouseenter = make_on_column_mouseenter(dnd, column.id());
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_drop_target = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Column(cid)) if cid == column.id())
    };

    let column_class = move || {
        if is_drop_target() {
            "column drop-target"
        } else {
            "column"
        }
    };

    view! {
        <div
            class=column_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <h2>{column.title()}</h2>

            <div class="cards">
                <For
                    each=move || cards.get()
                    key=|card| {
                        // All rendered fields, so edits re-render the card
                        (
                            card.id,
                            card.title.clone(),
                            card.description.clone(),
                            card.due_date,
                            card.column.id(),
                            card.total_hours.to_bits(),
                        )
                    }
                    children=move |card| {
                        view! {
                            <CardItem
                                card=card
                                dnd=dnd
                                on_worklogs=on_worklogs
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}
