//! # nuvo-payment
//!
//! Client SDK for the Nuvo payment gateway.
//!
//! Every call is authenticated with the account's client id and secret and
//! routed to a payment provider (`stripe` unless told otherwise). Results come
//! back as an [`Outcome`]: either the decoded JSON body, or a [`PaymentError`]
//! with an HTTP status and message. Network failures, error responses and
//! malformed bodies all end up as `Outcome::Failure`, so callers branch on one
//! type instead of handling errors from several layers.

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod payment;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::NuvoPayment;
pub use config::Credentials;
pub use error::{Error, PaymentError, Result, TransportError};
pub use gateway::Gateway;
pub use payment::{CreatePayment, Payments};
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
pub use types::*;

/// Current version of the SDK
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
