use std::sync::{Arc, Mutex};

use crate::session::{Session, SessionStore};

/// In-memory SessionStore for testing and ephemeral fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    session: Arc<Mutex<Option<Session>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    async fn load(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    async fn save(&self, session: &Session) {
        *self.session.lock().unwrap() = Some(session.clone());
    }

    async fn clear(&self) {
        *self.session.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserInfo;

    #[tokio::test]
    async fn test_save_and_load_session() {
        let store = MemoryStore::new();

        // Nothing saved yet
        assert!(store.load().await.is_none());

        let session = Session::new(UserInfo::named("abcd2"), "tok-123");
        store.save(&session).await;

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, session);
        assert_eq!(loaded.username(), "abcd2");
        assert_eq!(loaded.token, "tok-123");
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_session() {
        let store = MemoryStore::new();

        store
            .save(&Session::new(UserInfo::named("first"), "t1"))
            .await;
        store
            .save(&Session::new(UserInfo::named("second"), "t2"))
            .await;

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.username(), "second");
        assert_eq!(loaded.token, "t2");
    }

    #[tokio::test]
    async fn test_clear_removes_session() {
        let store = MemoryStore::new();

        store
            .save(&Session::new(UserInfo::named("abcd2"), "tok"))
            .await;
        assert!(store.load().await.is_some());

        store.clear().await;
        assert!(store.load().await.is_none());

        // Clearing an empty store is fine
        store.clear().await;
        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store
            .save(&Session::new(UserInfo::named("abcd2"), "tok"))
            .await;
        assert!(other.load().await.is_some());
    }
}
