//! # Settlement — how one transaction lands on one viewer
//!
//! Every number CropShare shows is derived here. Given a [`Transaction`], the
//! [`Contract`] it belongs to, and the username looking at the screen, this
//! module answers two questions:
//!
//! 1. Which side of the contract is the viewer on? ([`PartyRole::resolve`])
//! 2. What did this transaction do to the viewer's position? ([`balance_impact`])
//!
//! ## Role resolution
//!
//! The viewer is the [`PartyRole::Owner`] when their username equals
//! `contract.owner`, and the [`PartyRole::Tenant`] otherwise. There is no third
//! role: a username matching neither party still reads the contract through the
//! tenant lens. Callers that need to keep strangers out must do so before
//! rendering.
//!
//! ## Balance impact
//!
//! The sharing percent is the owner's cut; the tenant carries the complement.
//! The raw share of the viewer is `percent x amount / 100`, and the type fixes
//! the sign:
//!
//! | Type | Impact |
//! |------|--------|
//! | `EXPENDITURE` | negative (a cost) |
//! | `INCOME` | positive (a gain) |
//! | `TRANSFER` | exactly `0.0` (moves money between the accounts, creates no new cost or gain) |
//!
//! The two parties' impacts always add up to the full amount in magnitude, and
//! neither side's impact can exceed `amount`.
//!
//! ## Aggregate dues
//!
//! The running "who owes whom" totals are **not** recomputed from transaction
//! history; the server maintains `owner_due`/`tenant_due` and this module only
//! selects and interprets the viewer's field ([`due_toward_counterpart`],
//! [`due_standing`]). A positive due means the viewer owes the counterpart.
//!
//! Everything here is pure and synchronous; identical inputs give identical
//! outputs.

use crate::models::{Contract, Transaction, TransactionType};

/// Which side of a contract a viewer is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartyRole {
    Owner,
    Tenant,
}

impl PartyRole {
    /// Resolve a viewer's role on a contract by username.
    ///
    /// Anyone who is not the owner is treated as the tenant.
    pub fn resolve(contract: &Contract, viewer: &str) -> PartyRole {
        if viewer == contract.owner {
            PartyRole::Owner
        } else {
            PartyRole::Tenant
        }
    }

    pub fn is_owner(self) -> bool {
        matches!(self, PartyRole::Owner)
    }

    /// The other party's username.
    pub fn counterpart<'c>(self, contract: &'c Contract) -> &'c str {
        match self {
            PartyRole::Owner => &contract.tenant,
            PartyRole::Tenant => &contract.owner,
        }
    }
}

/// The viewer's share of a transaction, in percent.
///
/// The stored percent is the owner's; the tenant gets the complement.
pub fn viewer_share_percent(role: PartyRole, transaction: &Transaction) -> u8 {
    match role {
        PartyRole::Owner => transaction.sharing_percent,
        PartyRole::Tenant => 100u8.saturating_sub(transaction.sharing_percent),
    }
}

/// Signed effect of one transaction on the viewer's net position.
///
/// Zero for transfers, negative for expenditures, positive for income.
pub fn balance_impact(transaction: &Transaction, role: PartyRole) -> f64 {
    // Percent first, then the divide: keeps whole-dollar examples exact.
    let share = viewer_share_percent(role, transaction) as f64 * transaction.amount / 100.0;
    match transaction.transaction_type {
        TransactionType::Expenditure => -share,
        TransactionType::Income => share,
        TransactionType::Transfer => 0.0,
    }
}

/// A transaction assessed from one viewer's seat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settlement {
    pub role: PartyRole,
    pub balance_impact: f64,
}

impl Settlement {
    pub fn is_owner(&self) -> bool {
        self.role.is_owner()
    }
}

/// Resolve the viewer's role and compute the transaction's impact in one go.
pub fn compute(transaction: &Transaction, contract: &Contract, viewer: &str) -> Settlement {
    let role = PartyRole::resolve(contract, viewer);
    Settlement {
        role,
        balance_impact: balance_impact(transaction, role),
    }
}

/// The viewer's account balance on the contract.
pub fn margin(contract: &Contract, role: PartyRole) -> f64 {
    match role {
        PartyRole::Owner => contract.owner_account,
        PartyRole::Tenant => contract.tenant_account,
    }
}

/// What the viewer currently owes the counterpart. Negative means the
/// counterpart owes the viewer.
pub fn due_toward_counterpart(contract: &Contract, role: PartyRole) -> f64 {
    match role {
        PartyRole::Owner => contract.owner_due,
        PartyRole::Tenant => contract.tenant_due,
    }
}

/// The due, interpreted for display. Amounts are magnitudes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DueStanding {
    ViewerOwes(f64),
    CounterpartOwes(f64),
    Settled,
}

pub fn due_standing(contract: &Contract, role: PartyRole) -> DueStanding {
    let due = due_toward_counterpart(contract, role);
    if due > 0.0 {
        DueStanding::ViewerOwes(due)
    } else if due < 0.0 {
        DueStanding::CounterpartOwes(-due)
    } else {
        DueStanding::Settled
    }
}
