//! Sidebar Component
//!
//! Left menu with the signed-in user block. Entries are static for now;
//! only the board view exists in this client.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    let email = move || {
        ctx.session
            .get()
            .and_then(|s| s.email().map(str::to_string))
            .unwrap_or_else(|| "Not signed in".to_string())
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-user">
                <strong>"User:"</strong>
                <p>{email}</p>
            </div>

            <h2 class="sidebar-title">"Menu"</h2>

            <ul class="sidebar-list">
                <li>"Board"</li>
                <li>"My hours"</li>
                <li>"Report"</li>
                <li>"Settings"</li>
            </ul>
        </aside>
    }
}
