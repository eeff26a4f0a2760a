//! Contract page: the card for one contract and every transaction on it.

use dioxus::prelude::*;

use store::{Contract, Transaction};
use ui::{make_client, sign_out, use_session, ContractCard, TransactionForm, TransactionRow};

use crate::Route;

const CONTRACT_CSS: Asset = asset!("/assets/contract.css");

#[component]
pub fn ContractDetail(contract_id: i64) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut contract = use_signal(|| Option::<Contract>::None);
    let mut transactions = use_signal(Vec::<Transaction>::new);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut show_new_transaction = use_signal(|| false);

    // Fetch the contract and its transactions once the token is available
    let _loader = use_resource(move || async move {
        let Some(token) = session().token() else {
            return;
        };
        let client = make_client();
        match client.contract(contract_id, &token).await {
            Ok(found) => {
                contract.set(Some(found));
                load_error.set(None);
            }
            // A rejected token means the stored session is stale; dropping it
            // sends the viewer back to the sign-in page.
            Err(e) if e.is_unauthorized() => {
                sign_out(session).await;
                return;
            }
            Err(e) => {
                load_error.set(Some(e.to_string()));
                return;
            }
        }
        match client.transactions(contract_id, &token).await {
            Ok(list) => transactions.set(list),
            Err(e) => load_error.set(Some(e.to_string())),
        }
    });

    let state = session();
    if state.loading {
        return rsx! {
            div { class: "app-container",
                p { class: "loading", "Loading..." }
            }
        };
    }
    let Some(username) = state.username() else {
        nav.replace(Route::Auth {});
        return rsx! {};
    };

    // A new transaction moves the contract's balances too, so refresh both.
    let handle_created = move |_| {
        spawn(async move {
            let Some(token) = session().token() else {
                return;
            };
            let client = make_client();
            match client.contract(contract_id, &token).await {
                Ok(found) => contract.set(Some(found)),
                Err(e) => load_error.set(Some(e.to_string())),
            }
            match client.transactions(contract_id, &token).await {
                Ok(list) => transactions.set(list),
                Err(e) => load_error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        document::Stylesheet { href: CONTRACT_CSS }

        div { class: "app-container",
            if let Some(message) = load_error() {
                div { class: "error-message", "{message}" }
            }

            if let Some(contract) = contract() {
                ContractCard {
                    contract: contract.clone(),
                    viewer: username.clone(),
                    on_open: move |_| {},
                }

                div { class: "transactions-section",
                    div { class: "transactions-header",
                        h2 { "Transactions" }
                        button {
                            class: "primary",
                            onclick: move |_| show_new_transaction.set(true),
                            "New Transaction"
                        }
                    }

                    if show_new_transaction() {
                        TransactionForm {
                            contract_id: contract_id,
                            on_close: move |_| show_new_transaction.set(false),
                            on_success: handle_created,
                        }
                    }

                    if transactions().is_empty() {
                        p { class: "empty-state", "No transactions found for this contract." }
                    }
                    div { class: "transaction-list",
                        for (i, transaction) in transactions().into_iter().enumerate() {
                            TransactionRow {
                                key: "{i}",
                                transaction: transaction.clone(),
                                contract: contract.clone(),
                                viewer: username.clone(),
                            }
                        }
                    }
                }
            } else if load_error().is_none() {
                p { class: "loading", "Loading contract..." }
            }
        }
    }
}
