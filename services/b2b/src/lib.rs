//! OAuth2 client-credentials token acquisition for the legacy B2B API
//! gateway.
//!
//! The B2B gateway predates the SNAP signature scheme: it authenticates
//! with HTTP Basic over a form-encoded `client_credentials` grant instead
//! of an RSA-signed token request. This crate covers only token
//! acquisition; individual B2B products define their own request shapes on
//! top of the bearer token.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod config;
pub use config::Environment;

mod credential;
pub use credential::Credential;

mod client;
pub use client::B2bClient;
