//! # API crate — HTTP client for the CropShare server
//!
//! Everything the frontends know about the external CropShare API lives here.
//! [`ApiClient`] wraps a [`reqwest::Client`] pointed at a configured base URL
//! and exposes one method per endpoint; the wire types themselves come from
//! the `store` crate so the client and the views share a single definition.
//!
//! ## Endpoints
//!
//! | Method | Path | Client call |
//! |--------|------|-------------|
//! | POST | `/auth/login` | [`ApiClient::login`] |
//! | POST | `/auth/register` | [`ApiClient::register`] |
//! | GET | `/contracts` | [`ApiClient::contracts`] |
//! | GET | `/contracts/:id` | [`ApiClient::contract`] |
//! | POST | `/contracts` | [`ApiClient::create_contract`] |
//! | GET | `/transactions/:contractId` | [`ApiClient::transactions`] |
//! | POST | `/transactions/:contractId` | [`ApiClient::create_transaction`] |
//!
//! Authenticated calls send `Authorization: Bearer <token>` with the token the
//! session carries. Success responses arrive wrapped in an envelope
//! (`{"message": ..., "contracts": [...]}` and friends); the client unwraps
//! the payload and turns a missing field or a non-2xx status into an
//! [`ApiError`].

mod client;
pub mod error;

pub use client::{ApiClient, Registration};
pub use error::ApiError;

pub use store::{Contract, NewContract, Session, Transaction, TransactionType, UserInfo};
