//! # Filesystem-backed session store
//!
//! [`FileStore`] is a [`SessionStore`] implementation that persists the session
//! as a single `session.json` file. It is used on desktop so a signed-in user
//! stays signed in across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session.json           # {"user": {...}, "token": "..."}
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/cropshare/` |
//! | Linux | `~/.local/share/cropshare/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\cropshare\` |

use std::path::PathBuf;

use crate::session::{Session, SessionStore};

/// Filesystem-backed SessionStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn session_path(&self) -> PathBuf {
        self.base.join("session.json")
    }
}

impl SessionStore for FileStore {
    async fn load(&self) -> Option<Session> {
        let raw = std::fs::read_to_string(self.session_path()).ok()?;
        serde_json::from_str(&raw).ok()
    }

    async fn save(&self, session: &Session) {
        let Ok(raw) = serde_json::to_string(session) else {
            return;
        };
        let path = self.session_path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, raw);
    }

    async fn clear(&self) {
        let _ = std::fs::remove_file(self.session_path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserInfo;

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("cropshare_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        store
            .save(&Session::new(UserInfo::named("abcd2"), "tok-123"))
            .await;

        // Re-open from the same directory
        let store2 = FileStore::new(dir.clone());
        let loaded = store2.load().await.unwrap();
        assert_eq!(loaded.username(), "abcd2");
        assert_eq!(loaded.token, "tok-123");

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_clear_deletes_the_file() {
        let dir =
            std::env::temp_dir().join(format!("cropshare_clear_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        store
            .save(&Session::new(UserInfo::named("abcd2"), "tok"))
            .await;
        assert!(store.load().await.is_some());

        store.clear().await;
        assert!(store.load().await.is_none());
        assert!(!dir.join("session.json").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_no_session() {
        let dir =
            std::env::temp_dir().join(format!("cropshare_corrupt_test_{}", std::process::id()));
        let _ = std::fs::create_dir_all(&dir);
        std::fs::write(dir.join("session.json"), "{not json").unwrap();

        let store = FileStore::new(dir.clone());
        assert!(store.load().await.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
