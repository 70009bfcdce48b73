//! Authenticated request gateway
//!
//! Every call to the payment service goes through [`Gateway::execute`]. It is
//! the only place that sees the credentials, and the only place where
//! transport errors are turned into values: whatever happens on the wire, the
//! caller gets an [`Outcome`] back.

use crate::config::Credentials;
use crate::error::PaymentError;
use crate::transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
use crate::types::{Outcome, RequestSpec, CLIENT_ID_HEADER, DEFAULT_PROVIDER, PROVIDER_HEADER};
use crate::Result;
use http::header::{HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::HeaderMap;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

const APPLICATION_JSON: &str = "application/json";

/// Issues authenticated calls and normalizes their outcome
#[derive(Clone)]
pub struct Gateway {
    credentials: Arc<Credentials>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("credentials", &self.credentials)
            .field("transport", &"<transport>")
            .finish()
    }
}

impl Gateway {
    /// Create a gateway using the default `reqwest` transport
    pub fn new(credentials: Credentials) -> Result<Self> {
        Ok(Self::with_transport(
            credentials,
            Arc::new(ReqwestTransport::new()?),
        ))
    }

    /// Create a gateway on top of a custom transport
    pub fn with_transport(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials: Arc::new(credentials),
            transport,
        }
    }

    /// Credentials this gateway signs with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Issue one call and fold every result into an [`Outcome`]
    #[instrument(skip(self, spec), fields(method = %spec.method, path = %spec.path))]
    pub async fn execute(&self, spec: RequestSpec) -> Outcome {
        let request = match self.build_request(spec) {
            Ok(request) => request,
            Err(failure) => {
                warn!(error = %failure.message, "request could not be built");
                return Outcome::Failure(failure);
            }
        };

        match self.transport.send(request).await {
            Ok(response) => {
                debug!(status = response.status, "response received");
                decode(response)
            }
            Err(err) => {
                let failure = PaymentError::from(err);
                debug!(status = failure.http_status, "call failed");
                Outcome::Failure(failure)
            }
        }
    }

    fn build_request(
        &self,
        spec: RequestSpec,
    ) -> std::result::Result<TransportRequest, PaymentError> {
        let headers = self.headers(&spec)?;

        let body = match &spec.json_body {
            Some(value) => Some(serde_json::to_vec(value).map_err(|e| {
                PaymentError::internal(format!("failed to serialize request body: {e}"))
            })?),
            None => None,
        };

        Ok(TransportRequest {
            method: spec.method,
            url: self.credentials.url_for(&spec.path),
            headers,
            body,
        })
    }

    /// Extras first, then the fixed headers; `insert` keeps one value per name
    fn headers(&self, spec: &RequestSpec) -> std::result::Result<HeaderMap, PaymentError> {
        let mut headers = HeaderMap::new();

        for (name, value) in &spec.extra_headers {
            let name = header_name(name)?;
            if name.as_str().eq_ignore_ascii_case(PROVIDER_HEADER) {
                continue;
            }
            if is_reserved(&name) {
                warn!(header = %name, "ignoring attempt to override a gateway header");
                continue;
            }
            headers.insert(name, header_value(value)?);
        }

        let provider = spec.provider_override().unwrap_or(DEFAULT_PROVIDER);
        headers.insert(HeaderName::from_static("x-provider"), header_value(provider)?);
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(AUTHORIZATION, header_value(&self.credentials.bearer())?);
        headers.insert(
            HeaderName::from_static("x-client-id"),
            header_value(self.credentials.client_id())?,
        );

        if spec.json_body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        }

        Ok(headers)
    }
}

/// Gateway-owned headers that extras may not set
fn is_reserved(name: &HeaderName) -> bool {
    name == ACCEPT
        || name == AUTHORIZATION
        || name == CONTENT_TYPE
        || name.as_str().eq_ignore_ascii_case(CLIENT_ID_HEADER)
}

fn header_name(name: &str) -> std::result::Result<HeaderName, PaymentError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| PaymentError::internal(format!("invalid header name {name:?}: {e}")))
}

// The value may be a secret, so it is left out of the message.
fn header_value(value: &str) -> std::result::Result<HeaderValue, PaymentError> {
    HeaderValue::from_str(value)
        .map_err(|e| PaymentError::internal(format!("invalid header value: {e}")))
}

fn decode(response: TransportResponse) -> Outcome {
    if response.body.trim().is_empty() {
        return Outcome::success(Value::Null);
    }

    match serde_json::from_str::<Value>(&response.body) {
        Ok(body) => Outcome::success(body),
        Err(e) => Outcome::Failure(
            PaymentError::internal(format!("invalid JSON in response body: {e}")).with_details(
                json!({
                    "status": response.status,
                    "body": response.body,
                }),
            ),
        ),
    }
}
