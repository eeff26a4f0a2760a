//! # localStorage session store — browser-side persistence
//!
//! [`WebStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It keeps the session in the browser's `localStorage` under two
//! keys:
//!
//! | Key | Value |
//! |-----|-------|
//! | `"user"` | JSON-encoded [`UserInfo`] |
//! | `"token"` | the raw bearer token string |
//!
//! A session only loads when both keys are present and the user JSON parses;
//! anything else reads as signed-out.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A browser with storage disabled degrades to
//! "sign in again next visit" rather than crashing; the API server is the
//! authority on whether the token is still good anyway.

use web_sys::Storage;

use crate::models::UserInfo;
use crate::session::{Session, SessionStore};

const USER_KEY: &str = "user";
const TOKEN_KEY: &str = "token";

/// localStorage-backed SessionStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct WebStore;

impl WebStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for WebStore {
    async fn load(&self) -> Option<Session> {
        let storage = Self::storage()?;
        let user_raw = storage.get_item(USER_KEY).ok()??;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        let user: UserInfo = serde_json::from_str(&user_raw).ok()?;
        Some(Session { user, token })
    }

    async fn save(&self, session: &Session) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let Ok(user_raw) = serde_json::to_string(&session.user) else {
            return;
        };
        let _ = storage.set_item(USER_KEY, &user_raw);
        let _ = storage.set_item(TOKEN_KEY, &session.token);
    }

    async fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(USER_KEY);
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
