//! New-contract form.

use dioxus::prelude::*;
use store::NewContract;

use crate::client::make_client;
use crate::use_session;
use crate::Icon;
use crate::icons::FaCircleExclamation;

/// Form for starting a contract between an owner and a tenant.
///
/// `on_success` fires after the server accepts the contract, before
/// `on_close`; the parent refreshes its list on the former and hides the
/// form on the latter.
#[component]
pub fn ContractForm(on_close: EventHandler<()>, on_success: EventHandler<()>) -> Element {
    let session = use_session();
    let mut tenant = use_signal(String::new);
    let mut owner = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let contract = NewContract {
                owner: owner().trim().to_string(),
                tenant: tenant().trim().to_string(),
            };
            if contract.owner.is_empty() || contract.tenant.is_empty() {
                error.set(Some("Owner and tenant names are required".to_string()));
                return;
            }
            let Some(token) = session().token() else {
                error.set(Some("You are signed out".to_string()));
                return;
            };

            loading.set(true);
            match make_client().create_contract(&contract, &token).await {
                Ok(_) => {
                    on_success.call(());
                    on_close.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to create contract: {}", e);
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "form-card",
            div { class: "form-card-header",
                div { class: "form-title", "New Contract" }
                if let Some(err) = error() {
                    div { class: "error-message",
                        Icon { icon: FaCircleExclamation, width: 14, height: 14 }
                        "{err}"
                    }
                }
            }

            form { class: "form-body", onsubmit: handle_submit,
                div { class: "form-group",
                    label { "Tenant Name" }
                    input {
                        r#type: "text",
                        value: tenant(),
                        oninput: move |evt: FormEvent| tenant.set(evt.value()),
                        required: true,
                    }
                }

                div { class: "form-group",
                    label { "Owner Name" }
                    input {
                        r#type: "text",
                        value: owner(),
                        oninput: move |evt: FormEvent| owner.set(evt.value()),
                        required: true,
                    }
                }

                div { class: "form-footer",
                    button {
                        r#type: "button",
                        class: "secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "primary",
                        disabled: loading(),
                        if loading() { "Creating..." } else { "Create Contract" }
                    }
                }
            }
        }
    }
}
