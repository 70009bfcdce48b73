#![allow(dead_code)]

use async_trait::async_trait;
use nuvo_payment::{
    Credentials, NuvoPayment, Transport, TransportError, TransportRequest, TransportResponse,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "https://api.test.com";
pub const CLIENT_ID: &str = "test-client-id";
pub const CLIENT_SECRET: &str = "test-client-secret";

pub type Reply = Result<TransportResponse, TransportError>;

pub fn test_credentials(base_url: &str) -> Credentials {
    Credentials::new(base_url, CLIENT_ID, CLIENT_SECRET)
}

/// Transport that records every request and answers from a script
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn with_replies(replies: impl IntoIterator<Item = Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn json(status: u16, body: serde_json::Value) -> Arc<Self> {
        Self::with_replies([Ok(TransportResponse {
            status,
            body: body.to_string(),
        })])
    }

    pub fn error_status(status: u16, body: &str) -> Arc<Self> {
        Self::with_replies([Err(TransportError::status(
            status,
            Some(body.to_string()),
            format!("HTTP status error ({status})"),
        ))])
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Reply {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::request("no scripted reply left")))
    }
}

pub fn mock_client(transport: Arc<MockTransport>) -> NuvoPayment {
    NuvoPayment::with_transport(test_credentials(BASE_URL), transport)
}
