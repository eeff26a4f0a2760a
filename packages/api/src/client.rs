use reqwest::Client;
use serde::{Deserialize, Serialize};

use store::{Contract, CropshareConfig, NewContract, Session, Transaction, UserInfo};

use crate::error::ApiError;

/// HTTP client for the CropShare API.
///
/// Cheap to clone; the inner [`reqwest::Client`] shares its connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

/// Body for `POST /auth/register`, spelled the way the server expects.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: i64,
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

// Success envelopes. Serde skips the `message` and anything else we don't read.
#[derive(Deserialize)]
struct AuthEnvelope {
    token: Option<String>,
    #[serde(default)]
    user: Option<UserInfo>,
}

#[derive(Deserialize)]
struct ContractEnvelope {
    contract: Option<Contract>,
}

#[derive(Deserialize)]
struct ContractListEnvelope {
    contracts: Option<Vec<Contract>>,
}

#[derive(Deserialize)]
struct TransactionEnvelope {
    transaction: Option<Transaction>,
}

#[derive(Deserialize)]
struct TransactionListEnvelope {
    transactions: Option<Vec<Transaction>>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn from_config(config: &CropshareConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sign in. When the server's response omits the user object, the
    /// submitted username fills the gap so the session always knows who it is.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/auth/login"))
            .json(&Credentials { username, password })
            .send()
            .await?;
        let body: AuthEnvelope = Self::expect_ok(response, "Failed to login")
            .await?
            .json()
            .await?;

        let token = body.token.ok_or(ApiError::MissingPayload("token"))?;
        let user = body.user.unwrap_or_else(|| UserInfo::named(username));
        Ok(Session::new(user, token))
    }

    /// Create an account. Call [`ApiClient::login`] afterwards; the register
    /// endpoint does not hand out a token.
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.endpoint("/auth/register"))
            .json(registration)
            .send()
            .await?;
        Self::expect_ok(response, "Failed to register").await?;
        Ok(())
    }

    /// Every contract the signed-in user is party to.
    pub async fn contracts(&self, token: &str) -> Result<Vec<Contract>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/contracts"))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;
        let body: ContractListEnvelope = Self::expect_ok(response, "Failed to fetch contracts")
            .await?
            .json()
            .await?;
        body.contracts.ok_or(ApiError::MissingPayload("contracts"))
    }

    pub async fn contract(&self, contract_id: i64, token: &str) -> Result<Contract, ApiError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/contracts/{}", contract_id)))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;
        let body: ContractEnvelope = Self::expect_ok(response, "Failed to fetch contract")
            .await?
            .json()
            .await?;
        body.contract.ok_or(ApiError::MissingPayload("contract"))
    }

    /// Open a new contract between two parties. The server replies with the
    /// full record, zeroed balances and all.
    pub async fn create_contract(
        &self,
        contract: &NewContract,
        token: &str,
    ) -> Result<Contract, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/contracts"))
            .header("Authorization", format!("Bearer {}", token))
            .json(contract)
            .send()
            .await?;
        let body: ContractEnvelope = Self::expect_ok(response, "Failed to create contract")
            .await?
            .json()
            .await?;
        body.contract.ok_or(ApiError::MissingPayload("contract"))
    }

    /// Every transaction recorded against one contract.
    pub async fn transactions(
        &self,
        contract_id: i64,
        token: &str,
    ) -> Result<Vec<Transaction>, ApiError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/transactions/{}", contract_id)))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;
        let body: TransactionListEnvelope =
            Self::expect_ok(response, "Failed to fetch transactions")
                .await?
                .json()
                .await?;
        body.transactions
            .ok_or(ApiError::MissingPayload("transactions"))
    }

    /// Record a transaction. The contract it lands on comes from
    /// `transaction.contract_id`.
    pub async fn create_transaction(
        &self,
        transaction: &Transaction,
        token: &str,
    ) -> Result<Transaction, ApiError> {
        let response = self
            .http
            .post(self.endpoint(&format!("/transactions/{}", transaction.contract_id)))
            .header("Authorization", format!("Bearer {}", token))
            .json(transaction)
            .send()
            .await?;
        let body: TransactionEnvelope = Self::expect_ok(response, "Failed to create transaction")
            .await?
            .json()
            .await?;
        body.transaction
            .ok_or(ApiError::MissingPayload("transaction"))
    }

    /// Pass 2xx responses through; turn anything else into
    /// [`ApiError::Rejected`], preferring the body's `message` over the
    /// fallback.
    async fn expect_ok(
        response: reqwest::Response,
        fallback: &'static str,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| fallback.to_string());
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_loses_trailing_slashes() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.endpoint("/contracts"), "http://localhost:8080/contracts");

        let client = ApiClient::new("http://localhost:8080");
        assert_eq!(client.endpoint("/transactions/7"), "http://localhost:8080/transactions/7");
    }

    #[test]
    fn test_from_config_uses_the_configured_base() {
        let config = CropshareConfig::new("https://api.cropshare.example".to_string());
        let client = ApiClient::from_config(&config);
        assert_eq!(client.base_url(), "https://api.cropshare.example");
    }

    #[test]
    fn test_registration_wire_keys() {
        let registration = Registration {
            username: "abcd2".to_string(),
            password: "Passw0rd!".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Brown".to_string(),
            phone_number: 412345678,
        };
        let json = serde_json::to_value(&registration).unwrap();
        assert_eq!(json["firstName"], "Alice");
        assert_eq!(json["lastName"], "Brown");
        assert_eq!(json["phoneNumber"], 412345678);
    }

    #[test]
    fn test_contract_list_envelope_decodes() {
        let raw = r#"{
            "message": "ok",
            "contracts": [{
                "contractId": 1,
                "owner": "John Doe",
                "tenant": "abcd2",
                "ownerAccount": 5000,
                "ownerDue": -200,
                "tenantAccount": 3000,
                "tenantDue": 200
            }]
        }"#;
        let envelope: ContractListEnvelope = serde_json::from_str(raw).unwrap();
        let contracts = envelope.contracts.unwrap();
        assert_eq!(contracts.len(), 1);
        assert_eq!(contracts[0].contract_id, 1);
        assert_eq!(contracts[0].tenant_due, 200.0);
    }

    #[test]
    fn test_auth_envelope_tolerates_missing_user() {
        let envelope: AuthEnvelope =
            serde_json::from_str(r#"{"message": "ok", "token": "tok-123"}"#).unwrap();
        assert_eq!(envelope.token.as_deref(), Some("tok-123"));
        assert!(envelope.user.is_none());
    }

    #[test]
    fn test_error_body_without_message_decodes() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());

        let body: ErrorBody =
            serde_json::from_str(r#"{"message": "Invalid credentials"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Invalid credentials"));
    }
}
