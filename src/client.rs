//! SDK entry point

use crate::config::Credentials;
use crate::gateway::Gateway;
use crate::payment::Payments;
use crate::transport::Transport;
use crate::Result;
use std::path::Path;
use std::sync::Arc;

/// Client for the Nuvo payment gateway
///
/// ```no_run
/// use nuvo_payment::{CreatePayment, NuvoPayment};
///
/// # async fn example() -> nuvo_payment::Result<()> {
/// let nuvo = NuvoPayment::from_env()?;
/// let outcome = nuvo
///     .payments
///     .create(
///         CreatePayment::new(49.99)
///             .redirect_url("success", "https://shop.example.com/success")
///             .redirect_url("cancel", "https://shop.example.com/cancel"),
///     )
///     .await;
///
/// match outcome.into_result() {
///     Ok(body) => println!("redirect to {}", body["redirect_url"]),
///     Err(err) => eprintln!("payment failed with {}", err),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NuvoPayment {
    pub payments: Payments,
}

impl NuvoPayment {
    /// Build a client from the environment, loading `./.env` first when present
    pub fn from_env() -> Result<Self> {
        Self::from_env_file(".")
    }

    /// Build a client from the environment, loading `<dir>/.env` first when present
    pub fn from_env_file(dir: impl AsRef<Path>) -> Result<Self> {
        Self::new(Credentials::from_env_file(dir)?)
    }

    /// Build a client from explicit credentials
    pub fn new(credentials: Credentials) -> Result<Self> {
        Ok(Self::from_gateway(Gateway::new(credentials)?))
    }

    /// Build a client on top of a custom transport
    pub fn with_transport(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self::from_gateway(Gateway::with_transport(credentials, transport))
    }

    fn from_gateway(gateway: Gateway) -> Self {
        Self {
            payments: Payments::new(gateway),
        }
    }
}
