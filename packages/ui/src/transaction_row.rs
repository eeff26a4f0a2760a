//! One transaction as a list row, settled from the viewer's side.

use dioxus::prelude::*;
use store::settlement::{compute, viewer_share_percent};
use store::{Contract, Transaction, TransactionType};

use crate::money::{format_amount, money};
use crate::Icon;
use crate::icons::{FaCalendar, FaPercent, FaUser};

/// A transaction row: type badge, description, amount, who paid, the
/// viewer's share of the split, the transaction date, and the signed impact
/// on the viewer's balance.
///
/// The impact column stays empty for transfers; a positive impact carries an
/// explicit `+`.
#[component]
pub fn TransactionRow(transaction: Transaction, contract: Contract, viewer: String) -> Element {
    let settlement = compute(&transaction, &contract, &viewer);
    let share = viewer_share_percent(settlement.role, &transaction);
    let badge = transaction.transaction_type.badge_letter();
    let date = store::time::millis_to_ymd(transaction.time_created);
    let amount_text = money(transaction.amount);

    let tone = match transaction.transaction_type {
        TransactionType::Expenditure => "expenditure",
        TransactionType::Income => "income",
        TransactionType::Transfer => "transfer",
    };

    let impact = settlement.balance_impact;
    let impact_class = if impact >= 0.0 {
        "txn-impact positive"
    } else {
        "txn-impact negative"
    };
    let impact_text = if impact > 0.0 {
        Some(format!("+{}", format_amount(impact)))
    } else if impact < 0.0 {
        Some(format_amount(impact))
    } else {
        None
    };

    rsx! {
        div { class: "transaction-row",
            div { class: "txn-main",
                span { class: "txn-badge {tone}", "{badge}" }
                span { class: "txn-description", "{transaction.description}" }
            }

            span { class: "txn-amount {tone}", "{amount_text}" }

            div { class: "txn-meta",
                span { class: "meta-item",
                    Icon { icon: FaUser, width: 14, height: 14 }
                    "{transaction.paid_by}"
                }
                span { class: "meta-item",
                    "{share}"
                    Icon { icon: FaPercent, width: 14, height: 14 }
                }
                span { class: "meta-item",
                    Icon { icon: FaCalendar, width: 14, height: 14 }
                    "{date}"
                }
                span { class: "{impact_class}",
                    if let Some(impact_text) = impact_text {
                        "{impact_text}"
                    }
                }
            }
        }
    }
}
