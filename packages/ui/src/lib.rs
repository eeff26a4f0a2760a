//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{app_config, make_client, make_session_store};

mod money;
pub use money::{format_amount, format_money, money};

mod session;
pub use session::{sign_in, sign_out, use_session, LogoutButton, SessionProvider, SessionState};

mod contract_card;
pub use contract_card::ContractCard;

mod contract_form;
pub use contract_form::ContractForm;

mod transaction_row;
pub use transaction_row::TransactionRow;

mod transaction_form;
pub use transaction_form::TransactionForm;
