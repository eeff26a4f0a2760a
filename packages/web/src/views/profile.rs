//! Profile page: welcome header plus the viewer's contracts.

use dioxus::prelude::*;

use store::Contract;
use ui::{make_client, sign_out, use_session, ContractCard, ContractForm, LogoutButton};

use crate::Route;

const PROFILE_CSS: Asset = asset!("/assets/profile.css");

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut contracts = use_signal(Vec::<Contract>::new);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut show_new_contract = use_signal(|| false);

    // Load contracts once the session token is available
    let _loader = use_resource(move || async move {
        let Some(token) = session().token() else {
            return;
        };
        match make_client().contracts(&token).await {
            Ok(list) => {
                contracts.set(list);
                load_error.set(None);
            }
            // A rejected token means the stored session is stale; dropping it
            // sends the viewer back to the sign-in page.
            Err(e) if e.is_unauthorized() => sign_out(session).await,
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

    let handle_created = move |_| {
        spawn(async move {
            let Some(token) = session().token() else {
                return;
            };
            match make_client().contracts(&token).await {
                Ok(list) => {
                    contracts.set(list);
                    load_error.set(None);
                }
                Err(e) => load_error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        document::Stylesheet { href: PROFILE_CSS }

        div { class: "app-container",
            div { class: "profile-header",
                h1 { "Welcome, {username}!" }
                div { class: "profile-actions",
                    button {
                        class: "primary",
                        onclick: move |_| show_new_contract.set(true),
                        "New Contract"
                    }
                    LogoutButton {
                        on_logged_out: move |_| {
                            nav.push(Route::Auth {});
                        },
                    }
                }
            }

            if show_new_contract() {
                ContractForm {
                    on_close: move |_| show_new_contract.set(false),
                    on_success: handle_created,
                }
            }

            if let Some(message) = load_error() {
                div { class: "error-message", "{message}" }
            }

            div { class: "contract-list",
                if contracts().is_empty() && load_error().is_none() {
                    p { class: "empty-state", "No contracts yet." }
                }
                for contract in contracts() {
                    ContractCard {
                        key: "{contract.contract_id}",
                        contract: contract.clone(),
                        viewer: username.clone(),
                        on_open: move |contract_id| {
                            nav.push(Route::ContractDetail { contract_id });
                        },
                    }
                }
            }
        }
    }
}
