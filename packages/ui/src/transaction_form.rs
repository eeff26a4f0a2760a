//! New-transaction form.

use dioxus::prelude::*;
use store::{time, validate, Transaction, TransactionType};

use crate::client::make_client;
use crate::use_session;
use crate::Icon;
use crate::icons::FaCircleExclamation;

/// Form for recording a transaction against one contract.
///
/// The date and type come first; the remaining fields only appear once a
/// type is picked, and the owner/tenant sharing slider is hidden for
/// transfers (they never move the settlement balance). The "paid by" label
/// follows the type, so income reads "Received By" and transfers read
/// "Transfer from".
#[component]
pub fn TransactionForm(
    contract_id: i64,
    on_close: EventHandler<()>,
    on_success: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut date = use_signal(time::today_ymd);
    let mut kind = use_signal(|| Option::<TransactionType>::None);
    let mut description = use_signal(String::new);
    let mut crop_id = use_signal(String::new);
    let mut paid_by = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut sharing = use_signal(|| 50u8);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let Some(kind) = kind() else {
                error.set(Some("Select a transaction type".to_string()));
                return;
            };
            let amount = match validate::amount(&amount()) {
                Ok(amount) => amount,
                Err(message) => {
                    error.set(Some(message.to_string()));
                    return;
                }
            };
            let Ok(crop_id) = crop_id().trim().parse::<i64>() else {
                error.set(Some("Crop ID must be a number".to_string()));
                return;
            };
            if let Err(message) = validate::sharing_percent(sharing()) {
                error.set(Some(message.to_string()));
                return;
            }
            let Some(time_created) = time::ymd_to_millis(&date()) else {
                error.set(Some("Transaction date is invalid".to_string()));
                return;
            };
            let Some(token) = session().token() else {
                error.set(Some("You are signed out".to_string()));
                return;
            };

            let transaction = Transaction {
                description: description().trim().to_string(),
                crop_id,
                paid_by: paid_by().trim().to_string(),
                contract_id,
                amount,
                sharing_percent: sharing(),
                transaction_type: kind,
                time_created,
                time_modified: time::now_millis(),
            };

            loading.set(true);
            match make_client().create_transaction(&transaction, &token).await {
                Ok(_) => {
                    on_success.call(());
                    on_close.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to create transaction: {}", e);
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let selected = kind();
    let paid_by_label = selected.map(|k| k.paid_by_label()).unwrap_or("Paid By");
    let owner_share = sharing();
    let tenant_share = 100u8.saturating_sub(owner_share);

    rsx! {
        div { class: "form-card",
            div { class: "form-card-header",
                div { class: "form-title", "New Transaction" }
                if let Some(err) = error() {
                    div { class: "error-message",
                        Icon { icon: FaCircleExclamation, width: 14, height: 14 }
                        "{err}"
                    }
                }
            }

            form { class: "form-body", onsubmit: handle_submit,
                div { class: "form-group",
                    label { "Transaction Date" }
                    input {
                        r#type: "date",
                        value: date(),
                        oninput: move |evt: FormEvent| date.set(evt.value()),
                        required: true,
                    }
                }

                div { class: "form-group",
                    label { "Transaction Type" }
                    select {
                        value: selected.map(|k| k.wire_name()).unwrap_or(""),
                        onchange: move |evt: FormEvent| kind.set(TransactionType::from_wire(&evt.value())),
                        required: true,
                        option { value: "", "Select type" }
                        for t in TransactionType::ALL {
                            option { value: t.wire_name(), {t.label()} }
                        }
                    }
                }

                if let Some(selected) = selected {
                    div { class: "form-group",
                        label { "Description" }
                        input {
                            r#type: "text",
                            value: description(),
                            oninput: move |evt: FormEvent| description.set(evt.value()),
                            required: true,
                        }
                    }

                    div { class: "form-group",
                        label { "Crop ID" }
                        input {
                            r#type: "number",
                            value: crop_id(),
                            oninput: move |evt: FormEvent| crop_id.set(evt.value()),
                            required: true,
                        }
                    }

                    div { class: "form-group",
                        label { "{paid_by_label}" }
                        input {
                            r#type: "text",
                            value: paid_by(),
                            oninput: move |evt: FormEvent| paid_by.set(evt.value()),
                            required: true,
                        }
                    }

                    div { class: "form-group",
                        label { "Amount" }
                        input {
                            r#type: "number",
                            value: amount(),
                            oninput: move |evt: FormEvent| amount.set(evt.value()),
                            required: true,
                        }
                    }

                    if selected != TransactionType::Transfer {
                        div { class: "form-group",
                            label { "Sharing Percentage" }
                            div { class: "slider-row",
                                span { class: "slider-value", "{owner_share}%" }
                                input {
                                    r#type: "range",
                                    min: "0",
                                    max: "100",
                                    step: "5",
                                    value: "{owner_share}",
                                    oninput: move |evt: FormEvent| {
                                        sharing.set(evt.value().parse().map(|p: u8| p.min(100)).unwrap_or(50));
                                    },
                                }
                                span { class: "slider-value", "{tenant_share}%" }
                            }
                            div { class: "slider-ends",
                                span { "Owner" }
                                span { "Tenant" }
                            }
                        }
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
                        if loading() { "Creating..." } else { "Create" }
                    }
                }
            }
        }
    }
}
