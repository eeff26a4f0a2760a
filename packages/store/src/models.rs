//! # Domain models for contracts and transactions
//!
//! Defines the data structures exchanged with the CropShare API. These types are
//! `Serialize + Deserialize` with field renames that reproduce the server's JSON
//! exactly, so a decoded value can be re-encoded without losing or respelling a key.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Contract`] | A share-farming agreement between an `owner` and a `tenant`. Carries the two account balances and the two running dues, all maintained server-side. |
//! | [`Transaction`] | A single dated financial event recorded against one contract: description, crop, payer, amount, the owner's sharing percent, the [`TransactionType`], and epoch-millisecond timestamps. |
//! | [`TransactionType`] | The closed set of event kinds: `EXPENDITURE`, `INCOME`, `TRANSFER`. Anything else on the wire is a decode error. |
//! | [`UserInfo`] | The signed-in user as the auth endpoints describe them. |
//! | [`NewContract`] | The create-request body; every other contract field is server-derived. |
//!
//! ## Wire quirks
//!
//! The server spells every key camelCase except `Transaction::contract_id`, which
//! arrives as `"contract_id"`. The rename on that one field keeps the quirk intact.

use serde::{Deserialize, Serialize};

/// A share-farming contract between an owner and a tenant.
///
/// Balances and dues are server-computed; the client only ever reads them.
/// `tenant_due` is the negation of `owner_due`: whatever one party owes, the
/// other is owed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub contract_id: i64,
    /// Username of the owning party.
    pub owner: String,
    /// Username of the tenant party.
    pub tenant: String,
    /// Owner's running account balance (margin).
    pub owner_account: f64,
    /// Amount the owner currently owes the tenant. Negative when the tenant owes.
    pub owner_due: f64,
    /// Tenant's running account balance (margin).
    pub tenant_account: f64,
    /// Amount the tenant currently owes the owner. Negative when the owner owes.
    pub tenant_due: f64,
}

/// Body for `POST /contracts`; the server fills in everything else.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewContract {
    pub owner: String,
    pub tenant: String,
}

/// One financial event on a contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub description: String,
    pub crop_id: i64,
    /// Display name of whoever handed over the money.
    pub paid_by: String,
    /// The server spells this one snake_case.
    #[serde(rename = "contract_id")]
    pub contract_id: i64,
    /// Unsigned magnitude; direction comes from the type.
    pub amount: f64,
    /// The owner's share in percent, 0..=100. The tenant's share is the
    /// complement. Not meaningful for transfers.
    pub sharing_percent: u8,
    pub transaction_type: TransactionType,
    /// Epoch milliseconds.
    pub time_created: i64,
    /// Epoch milliseconds.
    pub time_modified: i64,
}

/// The kind of a [`Transaction`], as the server spells it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Expenditure,
    Income,
    Transfer,
}

impl TransactionType {
    /// Every type, in the order the form's select lists them.
    pub const ALL: [TransactionType; 3] = [
        TransactionType::Expenditure,
        TransactionType::Income,
        TransactionType::Transfer,
    ];

    /// The uppercase spelling used on the wire and as select option values.
    pub fn wire_name(self) -> &'static str {
        match self {
            TransactionType::Expenditure => "EXPENDITURE",
            TransactionType::Income => "INCOME",
            TransactionType::Transfer => "TRANSFER",
        }
    }

    /// Parse a wire/select value back into a type.
    pub fn from_wire(value: &str) -> Option<TransactionType> {
        match value {
            "EXPENDITURE" => Some(TransactionType::Expenditure),
            "INCOME" => Some(TransactionType::Income),
            "TRANSFER" => Some(TransactionType::Transfer),
            _ => None,
        }
    }

    /// Human-readable name for list rows and select options.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Expenditure => "Expenditure",
            TransactionType::Income => "Income",
            TransactionType::Transfer => "Transfer",
        }
    }

    /// Single letter shown in the round type badge.
    pub fn badge_letter(self) -> &'static str {
        match self {
            TransactionType::Expenditure => "E",
            TransactionType::Income => "I",
            TransactionType::Transfer => "T",
        }
    }

    /// Label for the payer field, which reads differently per type.
    pub fn paid_by_label(self) -> &'static str {
        match self {
            TransactionType::Expenditure => "Paid By",
            TransactionType::Income => "Received By",
            TransactionType::Transfer => "Transfer from",
        }
    }
}

/// The signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Server id; some auth responses omit it.
    #[serde(default)]
    pub user_id: Option<i64>,
    pub username: String,
}

impl UserInfo {
    pub fn named(username: impl Into<String>) -> Self {
        Self {
            user_id: None,
            username: username.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_wire_keys_are_camel_case() {
        let contract = Contract {
            contract_id: 1,
            owner: "John Doe".to_string(),
            tenant: "abcd2".to_string(),
            owner_account: 5000.0,
            owner_due: -200.0,
            tenant_account: 3000.0,
            tenant_due: 200.0,
        };

        let json = serde_json::to_value(&contract).unwrap();
        assert_eq!(json["contractId"], 1);
        assert_eq!(json["ownerAccount"], 5000.0);
        assert_eq!(json["ownerDue"], -200.0);
        assert_eq!(json["tenantAccount"], 3000.0);
        assert_eq!(json["tenantDue"], 200.0);

        let back: Contract = serde_json::from_value(json).unwrap();
        assert_eq!(back, contract);
    }

    #[test]
    fn test_transaction_keeps_snake_case_contract_id() {
        let txn = Transaction {
            description: "Payment for crop sale".to_string(),
            crop_id: 101,
            paid_by: "John Doe".to_string(),
            contract_id: 1,
            amount: 2000.0,
            sharing_percent: 50,
            transaction_type: TransactionType::Income,
            time_created: 1735725600000,
            time_modified: 1735732800000,
        };

        let json = serde_json::to_value(&txn).unwrap();
        // Every key camelCase except the one the server spells snake_case.
        assert_eq!(json["cropId"], 101);
        assert_eq!(json["paidBy"], "John Doe");
        assert_eq!(json["contract_id"], 1);
        assert_eq!(json["sharingPercent"], 50);
        assert_eq!(json["transactionType"], "INCOME");
        assert_eq!(json["timeCreated"], 1735725600000i64);
        assert!(json.get("contractId").is_none());
    }

    #[test]
    fn test_transaction_decodes_server_payload() {
        let raw = r#"{
            "description": "Advance payment",
            "cropId": 102,
            "paidBy": "abcd2",
            "contract_id": 1,
            "amount": 1500,
            "sharingPercent": 60,
            "transactionType": "EXPENDITURE",
            "timeCreated": 1736085600000,
            "timeModified": 1736092800000
        }"#;

        let txn: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(txn.crop_id, 102);
        assert_eq!(txn.contract_id, 1);
        assert_eq!(txn.amount, 1500.0);
        assert_eq!(txn.sharing_percent, 60);
        assert_eq!(txn.transaction_type, TransactionType::Expenditure);
    }

    #[test]
    fn test_unknown_transaction_type_is_a_decode_error() {
        let raw = r#"{
            "description": "x",
            "cropId": 1,
            "paidBy": "x",
            "contract_id": 1,
            "amount": 1,
            "sharingPercent": 50,
            "transactionType": "SETTLEMENT",
            "timeCreated": 0,
            "timeModified": 0
        }"#;

        assert!(serde_json::from_str::<Transaction>(raw).is_err());
    }

    #[test]
    fn test_transaction_type_wire_roundtrip() {
        for ty in TransactionType::ALL {
            assert_eq!(TransactionType::from_wire(ty.wire_name()), Some(ty));
        }
        assert_eq!(TransactionType::from_wire(""), None);
        assert_eq!(TransactionType::from_wire("income"), None);
    }

    #[test]
    fn test_paid_by_label_varies_by_type() {
        assert_eq!(TransactionType::Expenditure.paid_by_label(), "Paid By");
        assert_eq!(TransactionType::Income.paid_by_label(), "Received By");
        assert_eq!(TransactionType::Transfer.paid_by_label(), "Transfer from");
    }

    #[test]
    fn test_user_info_tolerates_missing_id() {
        let user: UserInfo = serde_json::from_str(r#"{"username": "abcd2"}"#).unwrap();
        assert_eq!(user.user_id, None);
        assert_eq!(user.username, "abcd2");

        let user: UserInfo =
            serde_json::from_str(r#"{"userId": 7, "username": "abcd2"}"#).unwrap();
        assert_eq!(user.user_id, Some(7));
    }
}
