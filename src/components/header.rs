//! Header Component
//!
//! Top bar with the app title, signed-in user and logout.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    let email = move || {
        ctx.session
            .get()
            .and_then(|s| s.email().map(str::to_string))
            .unwrap_or_else(|| "Not signed in".to_string())
    };

    view! {
        <header class="header">
            <h1 class="header-title">"Careboard"</h1>

            <div class="header-right">
                <span class="user-name">{email}</span>

                <button class="logout-button" on:click=move |_| ctx.logout()>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
