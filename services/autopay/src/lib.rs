//! SNAP Autopay direct-debit support.
//!
//! This crate signs and dispatches requests against the Autopay
//! direct-debit API family: account binding, debits, refunds, limit
//! management and OTP flows, on both the v1.0 and v1.1 endpoint
//! catalogues.
//!
//! Two signatures are involved. The access token request is signed with
//! the merchant's RSA private key over `clientId|timestamp`; every service
//! request after that is signed with HMAC-SHA512 over a canonical string
//! embedding a digest of the exact request payload. The token is fetched
//! once per client and reused.
//!
//! ## Example
//!
//! ```no_run
//! use snapsign_autopay::{Autopay, Environment};
//! use snapsign_core::Context;
//! use snapsign_http_send_reqwest::ReqwestHttpSend;
//!
//! # async fn example() -> snapsign_core::Result<()> {
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//!
//! // Credentials resolve from AUTOPAY_* environment values.
//! let client = Autopay::from_env(ctx, Environment::Alpha);
//! let resp = client.balance_inquiry("ref-001", 0.0, "card-token", "").await?;
//! println!("responseCode: {:?}", resp.response_code());
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;
pub use constants::{
    OTP_CODE_ACCOUNT_UNBINDING, OTP_CODE_CARD_REGISTRATION_SET_LIMIT, OTP_CODE_DIRECT_DEBIT,
    OTP_CODE_FORCE_DEBIT, REFUND_TYPE_FULL, REFUND_TYPE_PARTIAL, SERVICE_CODE_DEBIT,
    SERVICE_CODE_REFUND,
};

mod config;
pub use config::{Config, Environment};

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::{
    ConfigCredentialProvider, DefaultCredentialProvider, StaticCredentialProvider,
};

mod canonical;
mod endpoint;
pub use endpoint::{ApiVersion, Money};

mod sign;
pub use sign::{sign_service, sign_token};

mod token;
pub use token::AccessTokenProvider;

mod client;
pub use client::{ApiResponse, Autopay};
