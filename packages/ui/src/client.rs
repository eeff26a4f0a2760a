//! Shared constructors for the API client and session store.
//!
//! One place that decides which server the app talks to and where the
//! session survives between launches. Views call [`make_client`] and
//! [`make_session_store`] instead of wiring these up themselves.

use std::sync::OnceLock;

use api::ApiClient;
use store::CropshareConfig;

static CONFIG: OnceLock<CropshareConfig> = OnceLock::new();

/// The process-wide configuration, read once from `cropshare.toml` on native
/// targets and compiled-in defaults in the browser.
pub fn app_config() -> &'static CropshareConfig {
    CONFIG.get_or_init(CropshareConfig::load_or_default)
}

/// An API client pointed at the configured server.
pub fn make_client() -> ApiClient {
    ApiClient::from_config(app_config())
}

/// Create a platform-appropriate session store.
///
/// - **Web** (WASM + `web` feature): `localStorage` via [`store::WebStore`]
/// - **Desktop** (native): `session.json` under `<data_dir>/cropshare/`
/// - **WASM without `web`**: in-memory only, the session does not survive a
///   reload
pub fn make_session_store() -> impl store::SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::WebStore
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("cropshare");
        store::FileStore::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
}
