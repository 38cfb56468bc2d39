//! Session
//!
//! Explicit credential holder. Restored from browser storage once at
//! startup and handed to every api call as a parameter; nothing reads
//! the token ambiently mid-call.

use gloo_storage::{LocalStorage, Storage};

use crate::models::User;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: String,
    user: Option<User>,
}

impl Session {
    /// Restore the signed-in session from localStorage, if any
    pub fn restore() -> Option<Session> {
        let token: String = LocalStorage::get(TOKEN_KEY).ok()?;
        if token.is_empty() {
            return None;
        }
        let user: Option<User> = LocalStorage::get(USER_KEY).ok();
        Some(Session { token, user })
    }

    /// Drop the stored credential (logout flow)
    pub fn clear_storage() {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn user_id(&self) -> Option<u32> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }
}
