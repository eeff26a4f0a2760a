pub mod config;
pub mod models;
pub mod session;
pub mod settlement;
pub mod time;
pub mod validate;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_store;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_store::WebStore;

pub use config::CropshareConfig;
pub use models::{Contract, NewContract, Transaction, TransactionType, UserInfo};
pub use session::{Session, SessionStore};
pub use settlement::{DueStanding, PartyRole, Settlement};
