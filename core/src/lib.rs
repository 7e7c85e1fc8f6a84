//! Core components for signing SNAP Autopay API requests.
//!
//! This crate provides the foundational types and traits shared by the
//! snapsign service crates:
//!
//! - **Context**: a container holding the HTTP transport and environment
//!   implementations used during signing and token acquisition
//! - **Traits**: abstract interfaces for credential loading
//!   ([`ProvideCredential`]) and credential validation ([`SigningCredential`])
//! - **Error**: a structured error type distinguishing caller mistakes,
//!   signing failures and transport failures
//!
//! Service crates such as `snapsign-autopay` build on these pieces: they
//! define their own credential types, canonical strings and request
//! builders, while the transport stays pluggable behind [`HttpSend`].
//!
//! ## Example
//!
//! ```
//! use snapsign_core::{Context, OsEnv};
//!
//! // A context with no transport configured; calls through it will error
//! // until an `HttpSend` implementation is attached.
//! let ctx = Context::new().with_env(OsEnv);
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopHttpSend, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SigningCredential};

mod error;
pub use error::{Error, ErrorKind, Result};
