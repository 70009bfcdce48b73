//! HTTP transport used by the gateway
//!
//! The gateway only depends on the [`Transport`] trait, so tests and callers
//! with their own HTTP stack can swap in another implementation.
//! [`ReqwestTransport`] is the default.

use crate::error::TransportError;
use crate::Result;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use reqwest::Client;
use std::time::Duration;

/// Upper bound on a single call, connect included
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fully built outbound call
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Raw answer from the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Issues one raw HTTP call
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<TransportResponse, TransportError>;
}

/// [`Transport`] backed by `reqwest`
///
/// By default 4xx and 5xx responses are reported as
/// [`TransportError::Status`] carrying the raw body.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    http_errors: bool,
}

impl ReqwestTransport {
    /// Create a transport with the default timeout
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::with_client(client))
    }

    /// Wrap an existing client
    ///
    /// The caller is responsible for the client's timeout.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            http_errors: true,
        }
    }

    /// Whether 4xx/5xx responses are reported as errors (default `true`)
    pub fn with_http_errors(mut self, http_errors: bool) -> Self {
        self.http_errors = http_errors;
        self
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<TransportResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if self.http_errors {
            if let Err(err) = response.error_for_status_ref() {
                let message = err.to_string();
                let body = response.text().await.ok();
                return Err(TransportError::status(status.as_u16(), body, message));
            }
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::request(e.to_string()))?;

        Ok(TransportResponse {
            status: status.as_u16(),
            body,
        })
    }
}
