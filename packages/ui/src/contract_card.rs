//! Contract summary card, shown from the viewer's side of the deal.

use dioxus::prelude::*;
use store::settlement::{self, DueStanding, PartyRole};
use store::Contract;

use crate::money::money;

/// One contract as a clickable card.
///
/// The margin is the viewer's own account balance, and the due line (absent
/// when the parties are settled) names the counterpart:
///
/// - viewer owes: "You owe {counterpart}: $200"
/// - counterpart owes: "{counterpart} owes you: $200"
#[component]
pub fn ContractCard(contract: Contract, viewer: String, on_open: EventHandler<i64>) -> Element {
    let role = PartyRole::resolve(&contract, &viewer);
    let margin = settlement::margin(&contract, role);
    let counterpart = role.counterpart(&contract);
    let contract_id = contract.contract_id;

    let margin_class = if margin < 0.0 {
        "amount negative"
    } else {
        "amount positive"
    };
    let margin_text = money(margin);

    let due_line = match settlement::due_standing(&contract, role) {
        DueStanding::ViewerOwes(amount) => Some((
            "amount negative",
            format!("You owe {}:", counterpart),
            money(amount),
        )),
        DueStanding::CounterpartOwes(amount) => Some((
            "amount positive",
            format!("{} owes you:", counterpart),
            money(amount),
        )),
        DueStanding::Settled => None,
    };

    rsx! {
        div {
            class: "contract-card",
            onclick: move |_| on_open.call(contract_id),

            div { class: "contract-card-header",
                span { class: "contract-id", "#{contract.contract_id}" }
                h3 { "Contract Details" }
            }

            div { class: "contract-parties",
                div { class: "party-row",
                    span { class: "party-label", "Owner:" }
                    span { "{contract.owner}" }
                }
                div { class: "party-row",
                    span { class: "party-label", "Tenant:" }
                    span { "{contract.tenant}" }
                }
            }

            div { class: "account-summary",
                h4 { "Your Account" }
                div { class: "summary-row",
                    span { "Margin:" }
                    span { class: "{margin_class}", "{margin_text}" }
                }
                if let Some((due_class, due_label, due_text)) = due_line {
                    div { class: "summary-row",
                        span { "{due_label}" }
                        span { class: "{due_class}", "{due_text}" }
                    }
                }
            }
        }
    }
}
