//! Card Form Component
//!
//! Modal editor for creating or editing a card. Title is required before
//! submission; the draft may be transiently empty while typing. Controls
//! go inert while the request is in flight, and nothing touches the
//! registry until the server has answered.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{ApiClient, CreateCardArgs, UpdateCardArgs};
use crate::context::use_app_context;
use crate::store::{store_apply_card_result, use_board_store, BoardStateStoreFields};

use super::CardEditTarget;

#[component]
pub fn CardForm(target: CardEditTarget, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();
    let api = expect_context::<ApiClient>();

    let (editing_id, initial_title, initial_description, initial_due) = match &target {
        CardEditTarget::New => (None, String::new(), String::new(), String::new()),
        CardEditTarget::Existing(card) => (
            Some(card.id),
            card.title.clone(),
            card.description.clone().unwrap_or_default(),
            card.due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ),
    };

    let (title, set_title) = signal(initial_title);
    let (description, set_description) = signal(initial_description);
    let (due_date, set_due_date) = signal(initial_due);
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        // Client-side preconditions, checked before any network call
        let title_val = title.get_untracked().trim().to_string();
        if title_val.is_empty() {
            set_error.set("Title must not be empty.".to_string());
            return;
        }
        let due_raw = due_date.get_untracked();
        let due = if due_raw.is_empty() {
            None
        } else {
            match NaiveDate::parse_from_str(&due_raw, "%Y-%m-%d") {
                Ok(d) => Some(d),
                Err(_) => {
                    set_error.set("Due date is not a valid date.".to_string());
                    return;
                }
            }
        };
        let Some(session) = ctx.session.get_untracked() else {
            set_error.set("Not signed in.".to_string());
            return;
        };

        let description_val = description.get_untracked();
        let board_id = store.board_id().get_untracked();
        let api = api.clone();

        set_error.set(String::new());
        set_loading.set(true);

        spawn_local(async move {
            let description_opt = if description_val.trim().is_empty() {
                None
            } else {
                Some(description_val.as_str())
            };

            let result = match editing_id {
                None => {
                    let args = CreateCardArgs {
                        title: &title_val,
                        description: description_opt,
                        due_date: due,
                        board_id,
                    };
                    api.create_card(&session, &args).await
                }
                Some(id) => {
                    let args = UpdateCardArgs {
                        title: Some(&title_val),
                        description: description_opt,
                        due_date: due,
                        list_id: None,
                    };
                    api.update_card(&session, id, &args).await
                }
            };

            set_loading.set(false);
            // The server's record is the one that lands in the registry
            match store_apply_card_result(&store, result) {
                None => on_close.run(()),
                Some(msg) => set_error.set(msg),
            }
        });
    };

    view! {
        <div class="cf-overlay" on:click=move |_| on_close.run(())>
            <div class="cf-modal" on:click=move |ev| ev.stop_propagation()>
                <div class="cf-header">
                    <h2>{if editing_id.is_some() { "Edit card" } else { "New card" }}</h2>
                    <button class="cf-close" on:click=move |_| on_close.run(())>
                        "✖"
                    </button>
                </div>

                {move || {
                    let msg = error.get();
                    (!msg.is_empty()).then(|| view! { <div class="cf-error">{msg}</div> })
                }}

                <form class="cf-form" on:submit=submit>
                    <div class="cf-row">
                        <label>"Title"</label>
                        <input
                            type="text"
                            placeholder="Card title"
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_title.set(input.value());
                            }
                            disabled=move || loading.get()
                        />
                    </div>

                    <div class="cf-row">
                        <label>"Description"</label>
                        <textarea
                            placeholder="Optional"
                            prop:value=move || description.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_description.set(input.value());
                            }
                            disabled=move || loading.get()
                        ></textarea>
                    </div>

                    <div class="cf-row">
                        <label>"Due date"</label>
                        <input
                            type="date"
                            prop:value=move || due_date.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_due_date.set(input.value());
                            }
                            disabled=move || loading.get()
                        />
                    </div>

                    <div class="cf-actions">
                        <button type="submit" disabled=move || loading.get()>
                            {if editing_id.is_some() { "Save" } else { "Create" }}
                        </button>
                        <button
                            type="button"
                            on:click=move |_| on_close.run(())
                            disabled=move || loading.get()
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
