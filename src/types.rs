//! Request and outcome types shared by the gateway and the resources

use crate::error::PaymentError;
use http::Method;
use serde_json::Value;
use std::collections::HashMap;

/// Header carrying the client identifier
pub const CLIENT_ID_HEADER: &str = "X-Client-ID";

/// Header selecting the payment provider behind the gateway
pub const PROVIDER_HEADER: &str = "X-Provider";

/// Provider used when the caller does not pick one
pub const DEFAULT_PROVIDER: &str = "stripe";

/// One outbound call, built fresh by a resource
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    /// Path relative to the configured base URL, e.g. `/api/v1/payments`
    pub path: String,
    pub json_body: Option<Value>,
    pub extra_headers: HashMap<String, String>,
}

impl RequestSpec {
    /// Create a request with no body and no extra headers
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            json_body: None,
            extra_headers: HashMap::new(),
        }
    }

    /// Create a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Set the JSON body
    pub fn json(mut self, body: Value) -> Self {
        self.json_body = Some(body);
        self
    }

    /// Add an extra header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }

    /// Override the `X-Provider` header
    pub fn provider(self, provider: impl Into<String>) -> Self {
        self.header(PROVIDER_HEADER, provider)
    }

    /// Provider override supplied by the caller, if any
    pub fn provider_override(&self) -> Option<&str> {
        self.extra_headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(PROVIDER_HEADER))
            .map(|(_, value)| value.as_str())
    }
}

/// Result of every gateway call
///
/// Status codes are not interpreted on the success path: a `200` whose body
/// reads `{"error": true}` is still a `Success`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success { body: Value },
    Failure(PaymentError),
}

impl Outcome {
    /// Create a success outcome
    pub fn success(body: Value) -> Self {
        Self::Success { body }
    }

    /// Create a failure outcome
    pub fn failure(error: PaymentError) -> Self {
        Self::Failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Decoded response body of a success
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Success { body } => Some(body),
            Self::Failure(_) => None,
        }
    }

    /// Error of a failure
    pub fn error(&self) -> Option<&PaymentError> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Convert into a `Result` so callers can use `?`
    pub fn into_result(self) -> Result<Value, PaymentError> {
        match self {
            Self::Success { body } => Ok(body),
            Self::Failure(error) => Err(error),
        }
    }

    /// Render the outcome as one JSON value
    ///
    /// Successes yield the body verbatim, failures the
    /// `{"error": true, "status", "message", "details"?}` map.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Success { body } => body.clone(),
            Self::Failure(error) => error.to_value(),
        }
    }
}

impl From<PaymentError> for Outcome {
    fn from(error: PaymentError) -> Self {
        Self::Failure(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_spec_builders() {
        let spec = RequestSpec::post("/api/v1/payments")
            .json(json!({"amount": 10.0}))
            .provider("paypal");

        assert_eq!(spec.method, Method::POST);
        assert_eq!(spec.path, "/api/v1/payments");
        assert_eq!(spec.json_body, Some(json!({"amount": 10.0})));
        assert_eq!(spec.provider_override(), Some("paypal"));
    }

    #[test]
    fn test_provider_override_is_case_insensitive() {
        let spec = RequestSpec::get("/x").header("x-provider", "adyen");
        assert_eq!(spec.provider_override(), Some("adyen"));
        assert_eq!(RequestSpec::get("/x").provider_override(), None);
    }

    #[test]
    fn test_success_with_error_flag_stays_success() {
        let outcome = Outcome::success(json!({"error": true}));
        assert!(outcome.is_success());
        assert_eq!(outcome.to_value(), json!({"error": true}));
    }

    #[test]
    fn test_failure_accessors() {
        let outcome = Outcome::from(PaymentError::new(404, "not found"));
        assert!(outcome.is_failure());
        assert!(outcome.body().is_none());
        assert_eq!(outcome.error().map(|e| e.http_status), Some(404));
        assert_eq!(outcome.to_value()["error"], true);

        let err = outcome.into_result().unwrap_err();
        assert_eq!(err.to_string(), "404: not found");
    }
}
