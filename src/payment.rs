//! Payment resource
//!
//! Thin wrappers that shape a request and hand it to the [`Gateway`]. The
//! gateway's [`Outcome`] is returned as is.

use crate::gateway::Gateway;
use crate::types::{Outcome, RequestSpec};
use std::collections::BTreeMap;

/// Collection endpoint for payments
pub const PAYMENTS_PATH: &str = "/api/v1/payments";

/// Currency used when none is given
pub const DEFAULT_CURRENCY: &str = "USD";

/// Body of `POST /api/v1/payments`
///
/// Amount and currency are sent as given; validation is left to the
/// remote service.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePayment {
    pub amount: f64,
    pub currency: String,
    pub metadata: BTreeMap<String, String>,
    pub redirect_urls: BTreeMap<String, String>,
    /// Routed through the `X-Provider` header, not the body
    pub provider: Option<String>,
}

impl CreatePayment {
    /// Create a payment request in the default currency
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            currency: DEFAULT_CURRENCY.to_string(),
            metadata: BTreeMap::new(),
            redirect_urls: BTreeMap::new(),
            provider: None,
        }
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Add one redirect URL, e.g. `("success", "https://shop.example.com/ok")`
    pub fn redirect_url(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.redirect_urls.insert(name.into(), url.into());
        self
    }

    /// Replace all redirect URLs
    pub fn redirect_urls<I, K, V>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.redirect_urls = urls
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    pub fn metadata_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Replace all metadata
    pub fn metadata<I, K, V>(mut self, metadata: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = metadata
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Ask the gateway to use a specific provider instead of the default
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    fn into_request(self) -> RequestSpec {
        let body = serde_json::json!({
            "amount": self.amount,
            "currency": self.currency,
            "metadata": self.metadata,
            "redirect_urls": self.redirect_urls,
        });

        let spec = RequestSpec::post(PAYMENTS_PATH).json(body);
        match self.provider {
            Some(provider) => spec.provider(provider),
            None => spec,
        }
    }
}

/// Payment operations
#[derive(Debug, Clone)]
pub struct Payments {
    gateway: Gateway,
}

impl Payments {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Create a payment; on success the body carries the provider's redirect URL
    pub async fn create(&self, request: CreatePayment) -> Outcome {
        self.gateway.execute(request.into_request()).await
    }

    /// Retrieve a payment by id
    pub async fn find(&self, payment_id: &str) -> Outcome {
        self.gateway
            .execute(RequestSpec::get(format!("{}/{}", PAYMENTS_PATH, payment_id)))
            .await
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }
}
