//! Card Item Component
//!
//! One card on the board: hours badge, title, optional description and
//! due-date badge, plus the hours/edit/delete actions. Draggable via
//! board-dnd (mousedown on buttons is ignored by the dnd layer, so the
//! action buttons never start a grab).

use leptos::prelude::*;

use board_dnd::{
    make_on_card_mouseenter, make_on_card_mouseleave, make_on_mousedown, DndSignals, DropTarget,
};

use crate::deadline;
use crate::models::Card;

#[component]
pub fn CardItem(
    card: Card,
    dnd: DndSignals,
    on_worklogs: Callback<Card>,
    on_edit: Callback<Card>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let id = card.id;

    let on_mousedown = make_on_mousedown(dnd, id);
    let on_mouseenter = make_on_card_mouseenter(dnd, id);
    let on_mouseleave = make_on_card_mouseleave(dnd, card.column.id());

    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);
    let is_drop_target = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Card(tid)) if tid == id)
    };

    let card_class = move || {
        let mut c = String::from("card");
        if is_dragging() {
            c.push_str(" dragging");
        }
        if is_drop_target() {
            c.push_str(" drop-target");
        }
        c
    };

    // Classified at render time; cards without a due date get no badge
    let deadline_badge = card
        .due_date
        .map(|due| (due, deadline::classify_today(due)));

    let card_for_worklogs = card.clone();
    let card_for_edit = card.clone();

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <div class="card-hours-total">{format!("{:.2} h", card.total_hours)}</div>

            <div class="card-body">
                <h3>{card.title.clone()}</h3>
                {card.description.clone().map(|d| view! { <p>{d}</p> })}
            </div>

            {deadline_badge.map(|(due, status)| view! {
                <div class=format!("card-deadline {}", status.css_class())>
                    {format!("Due: {}", due.format("%Y-%m-%d"))}
                </div>
            })}

            <div class="card-actions">
                <button
                    class="hours-card-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_worklogs.run(card_for_worklogs.clone());
                    }
                >
                    "Hours"
                </button>

                <button
                    class="edit-card-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_edit.run(card_for_edit.clone());
                    }
                >
                    "Edit"
                </button>

                <button
                    class="delete-card-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_delete.run(id);
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
