//! Careboard App
//!
//! Board controller: composes the header, sidebar and three columns,
//! owns session-scoped state (active board, open editors), loads cards
//! from the backend, and wires the drag gesture to the registry and the
//! sync gateway.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use board_dnd::{bind_global_mouseup, create_dnd_signals, end_drag};

use crate::api::ApiClient;
use crate::components::{BoardColumn, CardEditTarget, CardForm, Header, Sidebar, WorklogsModal};
use crate::context::AppContext;
use crate::drag::DropOutcome;
use crate::models::{Card, Column};
use crate::session::Session;
use crate::store::{store_apply_drop, store_load_cards, store_remove_card, BoardState, BoardStore};

/// The single board this client shows
const DEFAULT_BOARD_ID: u32 = 1;

#[component]
pub fn App() -> impl IntoView {
    // State
    let session = RwSignal::new(Session::restore());
    let board_error = RwSignal::new(None::<String>);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (loading, set_loading) = signal(false);
    let (editing, set_editing) = signal(None::<CardEditTarget>);
    let (worklogs_for, set_worklogs_for) = signal(None::<Card>);

    let store: BoardStore = Store::new(BoardState::new(DEFAULT_BOARD_ID));
    let api = ApiClient::default();

    // Provide context to all children
    provide_context(store);
    provide_context(api.clone());
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        session,
        board_error,
    ));

    // Load cards when the trigger or session changes. The registry is
    // only replaced on success; a failed load leaves it untouched.
    let api_load = api.clone();
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let Some(sess) = session.get() else {
            return;
        };
        let api = api_load.clone();
        web_sys::console::log_1(&format!("[BOARD] Loading cards, trigger={}", trigger).into());
        set_loading.set(true);
        spawn_local(async move {
            match api.list_cards(&sess, DEFAULT_BOARD_ID).await {
                Ok(dtos) => {
                    web_sys::console::log_1(&format!("[BOARD] Loaded {} cards", dtos.len()).into());
                    board_error.set(None);
                    store_load_cards(&store, dtos);
                }
                Err(err) => board_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    // DnD: apply the drop to the registry first, then persist a column
    // change. A failed PATCH surfaces a message; the next reload restores
    // server truth, so no rollback here.
    let dnd = create_dnd_signals();
    let api_move = api.clone();
    bind_global_mouseup(dnd, move |dragged_id, target| {
        let outcome = store_apply_drop(&store, dragged_id, target);
        web_sys::console::log_1(
            &format!("[DND] drop card={} target={:?} -> {:?}", dragged_id, target, outcome).into(),
        );

        if let DropOutcome::Reassigned(column) = outcome {
            let Some(sess) = session.get_untracked() else {
                return;
            };
            let api = api_move.clone();
            spawn_local(async move {
                if let Err(err) = api.move_card(&sess, dragged_id, column).await {
                    board_error.set(Some(format!("Could not save the move: {}", err)));
                }
            });
        }
    });

    // Delete: server first, then registry; a drag still holding the card
    // is dropped with it.
    let api_delete = api.clone();
    let on_delete = Callback::new(move |card_id: u32| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this card?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let Some(sess) = session.get_untracked() else {
            return;
        };
        let api = api_delete.clone();
        spawn_local(async move {
            match api.delete_card(&sess, card_id).await {
                Ok(()) => {
                    store_remove_card(&store, card_id);
                    if dnd.dragging_id_read.get_untracked() == Some(card_id) {
                        end_drag(&dnd);
                    }
                    board_error.set(None);
                }
                Err(err) => board_error.set(Some(err.to_string())),
            }
        });
    });

    let on_edit = Callback::new(move |card: Card| {
        set_editing.set(Some(CardEditTarget::Existing(card)));
    });
    let on_worklogs = Callback::new(move |card: Card| {
        set_worklogs_for.set(Some(card));
    });

    view! {
        <div class="board-container">
            <Header />

            <div class="content">
                <Sidebar />

                <main class="kanban-area">
                    {move || board_error.get().map(|msg| view! { <div class="board-error">{msg}</div> })}
                    {move || loading.get().then(|| view! { <div class="board-loading">"Loading..."</div> })}
                    {move || session.get().is_none().then(|| view! {
                        <div class="board-signed-out">"Sign in to see your board."</div>
                    })}

                    <div class="kanban-toolbar">
                        <button
                            class="new-card-btn"
                            on:click=move |_| set_editing.set(Some(CardEditTarget::New))
                        >
                            "+ New card"
                        </button>
                    </div>

                    <div class="kanban">
                        {Column::ALL.iter().map(|&column| view! {
                            <BoardColumn
                                column=column
                                dnd=dnd
                                on_worklogs=on_worklogs
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }).collect_view()}
                    </div>
                </main>
            </div>

            {move || editing.get().map(|target| view! {
                <CardForm
                    target=target
                    on_close=Callback::new(move |_| set_editing.set(None))
                />
            })}

            {move || worklogs_for.get().map(|card| view! {
                <WorklogsModal
                    card=card
                    on_close=Callback::new(move |_| set_worklogs_for.set(None))
                />
            })}
        </div>
    }
}
