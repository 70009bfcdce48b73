//! Error types for the Nuvo payment SDK
//!
//! Only construction can fail with [`Error`]. Per-call failures never surface
//! as errors: the gateway folds them into an [`Outcome::Failure`] carrying a
//! [`PaymentError`].
//!
//! [`Outcome::Failure`]: crate::types::Outcome::Failure

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Result type alias for SDK construction
pub type Result<T> = std::result::Result<T, Error>;

/// Startup-time error
#[derive(Error, Debug)]
pub enum Error {
    /// A required environment variable is missing or unreadable
    #[error("Configuration error: {0}")]
    Config(#[from] envconfig::Error),

    /// The `.env` file exists but could not be parsed
    #[error("Dotenv error: {0}")]
    Dotenv(#[from] dotenv::Error),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Failure reported by a [`Transport`](crate::transport::Transport)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The remote service answered with a status the transport treats as an error
    #[error("{message}")]
    Status {
        status: u16,
        /// Raw response body, if it could be read
        body: Option<String>,
        message: String,
    },

    /// No response was obtained (connect, DNS, timeout, invalid URL)
    #[error("{0}")]
    Request(String),
}

impl TransportError {
    /// Create an error-status failure
    pub fn status(status: u16, body: Option<String>, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            body,
            message: message.into(),
        }
    }

    /// Create a request failure
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(message.into())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::status(status.as_u16(), None, err.to_string()),
            None => Self::Request(err.to_string()),
        }
    }
}

/// Structured failure returned to callers inside an `Outcome`
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{http_status}: {message}")]
pub struct PaymentError {
    /// HTTP status of the failed call, `500` when no response was obtained
    #[serde(rename = "status")]
    pub http_status: u16,
    /// Raw response body, or a description of the local failure
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl PaymentError {
    /// Status used when the remote service gave no usable answer
    pub const INTERNAL_STATUS: u16 = 500;

    /// Create a failure with an explicit status
    pub fn new(http_status: u16, message: impl Into<String>) -> Self {
        Self {
            http_status,
            message: message.into(),
            details: None,
        }
    }

    /// Create a status-500 failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Self::INTERNAL_STATUS, message)
    }

    /// Attach structured details
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Render the legacy error map: `{"error": true, "status", "message", "details"?}`
    pub fn to_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("error".to_string(), Value::Bool(true));
        map.insert("status".to_string(), Value::from(self.http_status));
        map.insert("message".to_string(), Value::String(self.message.clone()));
        if let Some(details) = &self.details {
            map.insert("details".to_string(), details.clone());
        }
        Value::Object(map)
    }
}

impl From<TransportError> for PaymentError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Status {
                status,
                body,
                message,
            } => {
                let message = body.filter(|b| !b.is_empty()).unwrap_or(message);
                Self::new(status, message)
            }
            TransportError::Request(message) => Self::internal(message),
        }
    }
}
