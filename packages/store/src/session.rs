//! # Session — the signed-in user and where it is kept
//!
//! CropShare's only persisted state is the session handed back by
//! `POST /auth/login`: the [`crate::models::UserInfo`] plus the bearer token
//! every authenticated request carries. This module defines the unit
//! ([`Session`]) and the storage seam ([`SessionStore`]) behind which the
//! platform backends live.
//!
//! ## [`SessionStore`] trait
//!
//! An async interface with three methods — `load` for startup restoration,
//! `save` after a successful login, `clear` on logout. Implementations live in
//! sibling modules:
//!
//! | Backend | Platform | Where it writes |
//! |---------|----------|-----------------|
//! | [`crate::MemoryStore`] | tests, ephemeral fallback | process memory |
//! | `FileStore` | desktop | `session.json` under an injected directory |
//! | `WebStore` | browser (`web` feature) | `localStorage`, keys `"user"` and `"token"` |
//!
//! Backends never surface storage errors; a failed read is an absent session
//! and a failed write leaves the previous state. The API server remains the
//! authority on whether a token is still good.

use serde::{Deserialize, Serialize};

use crate::models::UserInfo;

/// A signed-in user plus their bearer token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserInfo,
    pub token: String,
}

impl Session {
    pub fn new(user: UserInfo, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }

    /// Username of the signed-in user, the identity settlement resolves against.
    pub fn username(&self) -> &str {
        &self.user.username
    }
}

/// Async trait for persisting the session across page loads and app restarts.
pub trait SessionStore {
    fn load(&self) -> impl std::future::Future<Output = Option<Session>>;
    fn save(
        &self,
        session: &Session,
    ) -> impl std::future::Future<Output = ()>;
    fn clear(&self) -> impl std::future::Future<Output = ()>;
}
