//! Worklogs Modal Component
//!
//! Detail view for one card's logged hours: list, create, inline edit,
//! delete. Every mutation reloads the full list from the backend and
//! only then recomputes the total, so the badge never drifts from the
//! last-completed mutation.

use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{ApiClient, ApiResult, WorklogArgs};
use crate::context::use_app_context;
use crate::models::{Card, Worklog};
use crate::session::Session;
use crate::store::{store_set_card_hours, use_board_store, BoardStore};
use crate::worklogs;

/// Fetch the authoritative list, publish it, and push the recomputed
/// total onto the card's badge. The reload is awaited to completion
/// before the total is derived.
async fn load_worklogs(
    api: ApiClient,
    session: Session,
    card_id: u32,
    store: BoardStore,
    set_worklogs: WriteSignal<Vec<Worklog>>,
) -> ApiResult<()> {
    let list = api.list_worklogs(&session, card_id).await?;
    let total = worklogs::total_hours(&list);
    set_worklogs.set(list);
    store_set_card_hours(&store, card_id, total);
    Ok(())
}

#[component]
pub fn WorklogsModal(card: Card, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();
    let api = expect_context::<ApiClient>();

    let card_id = card.id;
    let card_title = card.title.clone();

    let (worklog_list, set_worklog_list) = signal(Vec::<Worklog>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());

    // Create form; date defaults to today
    let (hours, set_hours) = signal(String::new());
    let (work_date, set_work_date) =
        signal(Local::now().date_naive().format("%Y-%m-%d").to_string());
    let (note, set_note) = signal(String::new());

    // Inline edit
    let (editing_id, set_editing_id) = signal(None::<u32>);
    let (edit_hours, set_edit_hours) = signal(String::new());
    let (edit_date, set_edit_date) = signal(String::new());
    let (edit_note, set_edit_note) = signal(String::new());

    let total = Memo::new(move |_| worklogs::total_hours(&worklog_list.get()));

    // Load on open
    let api_load = api.clone();
    Effect::new(move |_| {
        let Some(session) = ctx.session.get() else {
            return;
        };
        let api = api_load.clone();
        set_loading.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            if let Err(err) = load_worklogs(api, session, card_id, store, set_worklog_list).await {
                set_worklog_list.set(Vec::new());
                set_error.set(err.to_string());
            }
            set_loading.set(false);
        });
    });

    let api_reload = api.clone();
    let reload = move |_| {
        if loading.get_untracked() {
            return;
        }
        let Some(session) = ctx.session.get_untracked() else {
            return;
        };
        let api = api_reload.clone();
        set_loading.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            if let Err(err) = load_worklogs(api, session, card_id, store, set_worklog_list).await {
                set_worklog_list.set(Vec::new());
                set_error.set(err.to_string());
            }
            set_loading.set(false);
        });
    };

    let api_create = api.clone();
    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        // Validate before any network call
        let parsed = hours.get_untracked().trim().parse::<f64>();
        let hours_val = match parsed {
            Ok(h) if h > 0.0 => h,
            _ => {
                set_error.set("Hours must be a number greater than 0.".to_string());
                return;
            }
        };
        let date_val = match NaiveDate::parse_from_str(&work_date.get_untracked(), "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                set_error.set("Work date is not a valid date.".to_string());
                return;
            }
        };
        let Some(session) = ctx.session.get_untracked() else {
            set_error.set("Not signed in.".to_string());
            return;
        };

        let note_val = note.get_untracked();
        let api = api_create.clone();
        set_loading.set(true);
        set_error.set(String::new());

        spawn_local(async move {
            let args = WorklogArgs {
                hours: hours_val,
                date: date_val,
                note: (!note_val.trim().is_empty()).then_some(note_val.as_str()),
            };
            match api.create_worklog(&session, card_id, &args).await {
                Ok(_) => {
                    set_hours.set(String::new());
                    set_note.set(String::new());
                    // work_date stays on today
                    if let Err(err) =
                        load_worklogs(api, session, card_id, store, set_worklog_list).await
                    {
                        set_error.set(err.to_string());
                    }
                }
                Err(err) => set_error.set(err.to_string()),
            }
            set_loading.set(false);
        });
    };

    let api_save = api.clone();
    let save_edit = move |worklog_id: u32| {
        if loading.get_untracked() {
            return;
        }
        let parsed = edit_hours.get_untracked().trim().parse::<f64>();
        let hours_val = match parsed {
            Ok(h) if h > 0.0 => h,
            _ => {
                set_error.set("Hours must be a number greater than 0.".to_string());
                return;
            }
        };
        let date_val = match NaiveDate::parse_from_str(&edit_date.get_untracked(), "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                set_error.set("Work date is not a valid date.".to_string());
                return;
            }
        };
        let Some(session) = ctx.session.get_untracked() else {
            set_error.set("Not signed in.".to_string());
            return;
        };

        let note_val = edit_note.get_untracked();
        let api = api_save.clone();
        set_loading.set(true);
        set_error.set(String::new());

        spawn_local(async move {
            let args = WorklogArgs {
                hours: hours_val,
                date: date_val,
                note: (!note_val.trim().is_empty()).then_some(note_val.as_str()),
            };
            match api.update_worklog(&session, worklog_id, &args).await {
                Ok(_) => {
                    set_editing_id.set(None);
                    if let Err(err) =
                        load_worklogs(api, session, card_id, store, set_worklog_list).await
                    {
                        set_error.set(err.to_string());
                    }
                }
                Err(err) => set_error.set(err.to_string()),
            }
            set_loading.set(false);
        });
    };

    let api_delete = api.clone();
    let delete_worklog = move |worklog_id: u32| {
        if loading.get_untracked() {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this worklog entry?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let Some(session) = ctx.session.get_untracked() else {
            return;
        };

        let api = api_delete.clone();
        set_loading.set(true);
        set_error.set(String::new());

        spawn_local(async move {
            match api.delete_worklog(&session, worklog_id).await {
                Ok(()) => {
                    if let Err(err) =
                        load_worklogs(api, session, card_id, store, set_worklog_list).await
                    {
                        set_error.set(err.to_string());
                    }
                }
                Err(err) => set_error.set(err.to_string()),
            }
            set_loading.set(false);
        });
    };

    // When ownership is unknown on either side, do not block
    let current_user_id = move || ctx.session.get().and_then(|s| s.user_id());
    let is_mine = move |wl: &Worklog| match current_user_id() {
        None => true,
        Some(uid) => wl.user_id == Some(uid),
    };

    view! {
        <div class="wl-overlay" on:click=move |_| on_close.run(())>
            <div class="wl-modal" on:click=move |ev| ev.stop_propagation()>
                <div class="wl-header">
                    <h2>"Hours"</h2>
                    <button class="wl-close" on:click=move |_| on_close.run(())>
                        "✖"
                    </button>
                </div>

                <div class="wl-subtitle">
                    <strong>"Card: "</strong>
                    {card_title}
                    <span class="wl-card-id">{format!(" (#{})", card_id)}</span>
                </div>

                {move || {
                    let msg = error.get();
                    (!msg.is_empty()).then(|| view! { <div class="wl-error">{msg}</div> })
                }}

                // Create
                <form class="wl-create" on:submit=on_create>
                    <div class="wl-row">
                        <label>"Hours"</label>
                        <input
                            type="number"
                            min="0"
                            step="0.25"
                            placeholder="e.g. 1.5"
                            prop:value=move || hours.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_hours.set(input.value());
                            }
                            disabled=move || loading.get()
                        />
                    </div>

                    <div class="wl-row">
                        <label>"Date"</label>
                        <input
                            type="date"
                            prop:value=move || work_date.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_work_date.set(input.value());
                            }
                            disabled=move || loading.get()
                        />
                    </div>

                    <div class="wl-row">
                        <label>"Note"</label>
                        <input
                            type="text"
                            placeholder="Optional"
                            prop:value=move || note.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_note.set(input.value());
                            }
                            disabled=move || loading.get()
                        />
                    </div>

                    <div class="wl-actions">
                        <button type="submit" disabled=move || loading.get()>
                            "Add"
                        </button>
                        <button type="button" on:click=reload disabled=move || loading.get()>
                            "Reload"
                        </button>
                    </div>
                </form>

                <div class="wl-total">
                    "Total hours for this card: "
                    <span class="wl-total-value">{move || format!("{:.2} h", total.get())}</span>
                </div>

                // List
                <div class="wl-list">
                    {move || loading.get().then(|| view! { <p>"Loading..."</p> })}
                    {move || (!loading.get() && worklog_list.get().is_empty()).then(|| {
                        view! { <p class="wl-empty">"No hours logged for this card."</p> }
                    })}

                    <For
                        each=move || worklog_list.get()
                        key=|wl| (wl.id, wl.hours.to_bits(), wl.date, wl.note.clone())
                        children=move |wl| {
                            let id = wl.id;
                            let mine = is_mine(&wl);
                            let wl_hours = wl.hours;
                            let wl_date = wl.date;
                            let wl_note = wl.note.clone().unwrap_or_default();
                            let save_edit = save_edit.clone();
                            let delete_worklog = delete_worklog.clone();

                            let start_edit = move |_| {
                                set_editing_id.set(Some(id));
                                set_edit_hours.set(wl_hours.to_string());
                                set_edit_date.set(wl_date.format("%Y-%m-%d").to_string());
                                set_edit_note.set(wl_note.clone());
                            };
                            let cancel_edit = move |_| set_editing_id.set(None);

                            let note_text = wl.note.clone();
                            view! {
                                <div class="wl-item">
                                    {move || if editing_id.get() == Some(id) {
                                        let save_edit = save_edit.clone();
                                        view! {
                                            <div class="wl-edit-grid">
                                                <input
                                                    type="number"
                                                    min="0"
                                                    step="0.25"
                                                    prop:value=move || edit_hours.get()
                                                    on:input=move |ev| {
                                                        let target = ev.target().unwrap();
                                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                                        set_edit_hours.set(input.value());
                                                    }
                                                    disabled=move || loading.get()
                                                />
                                                <input
                                                    type="date"
                                                    prop:value=move || edit_date.get()
                                                    on:input=move |ev| {
                                                        let target = ev.target().unwrap();
                                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                                        set_edit_date.set(input.value());
                                                    }
                                                    disabled=move || loading.get()
                                                />
                                                <input
                                                    type="text"
                                                    placeholder="Note"
                                                    prop:value=move || edit_note.get()
                                                    on:input=move |ev| {
                                                        let target = ev.target().unwrap();
                                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                                        set_edit_note.set(input.value());
                                                    }
                                                    disabled=move || loading.get()
                                                />

                                                <div class="wl-actions">
                                                    <button
                                                        on:click=move |_| save_edit(id)
                                                        disabled=move || loading.get()
                                                    >
                                                        "Save"
                                                    </button>
                                                    <button on:click=cancel_edit disabled=move || loading.get()>
                                                        "Cancel"
                                                    </button>
                                                </div>
                                            </div>
                                        }.into_any()
                                    } else {
                                        let delete_worklog = delete_worklog.clone();
                                        let note_text = note_text.clone();
                                        let start_edit = start_edit.clone();
                                        view! {
                                            <div class="wl-main">
                                                <div class="wl-line">
                                                    <strong>{format!("{}", wl_hours)}</strong>
                                                    " h · "
                                                    {wl_date.format("%Y-%m-%d").to_string()}
                                                </div>
                                                {note_text.map(|n| view! { <div class="wl-note">{n}</div> })}

                                                <div class="wl-actions">
                                                    <button
                                                        on:click=start_edit
                                                        disabled=move || !mine || loading.get()
                                                        title=if mine { "" } else { "You can only edit your own hours" }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        on:click=move |_| delete_worklog(id)
                                                        disabled=move || !mine || loading.get()
                                                        title=if mine { "" } else { "You can only delete your own hours" }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </div>
                                        }.into_any()
                                    }}
                                </div>
                            }
                        }
                    />
                </div>

                <div class="wl-footer">
                    <button on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
