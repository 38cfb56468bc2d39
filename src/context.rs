//! Application Context
//!
//! Session-scoped signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::session::Session;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload cards from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload cards from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Signed-in session; `None` once logged out
    pub session: RwSignal<Option<Session>>,
    /// Board-level inline error message
    pub board_error: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        session: RwSignal<Option<Session>>,
        board_error: RwSignal<Option<String>>,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            session,
            board_error,
        }
    }

    /// Trigger a reload of cards
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Tear the session down (logout): clears storage and the signal
    pub fn logout(&self) {
        Session::clear_storage();
        self.session.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
