//! Mock transport for testing
//!
//! Replays queued responses in order and records every request so tests can
//! assert on call counts, URLs, headers and bodies without a network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};

/// Queued reply for the next call
#[derive(Debug, Clone)]
enum Reply {
    Response(HttpResponse),
    Failure(String),
}

/// Mock transport for testing.
///
/// # Example
/// ```ignore
/// let transport = MockTransport::new()
///     .with_json(200, json!({"success": true, "data": []}));
///
/// // ... run the client ...
/// assert_eq!(transport.call_count(), 1);
/// ```
#[derive(Default)]
pub struct MockTransport {
    /// Replies consumed front to back
    replies: Arc<Mutex<VecDeque<Reply>>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response
    pub fn with_json(self, status: u16, body: Value) -> Self {
        self.with_response(HttpResponse::new(status, body.to_string()))
    }

    /// Queue a raw response
    pub fn with_response(self, response: HttpResponse) -> Self {
        self.push(Reply::Response(response));
        self
    }

    /// Queue a transport failure
    pub fn with_failure(self, cause: &str) -> Self {
        self.push(Reply::Failure(cause.to_string()));
        self
    }

    /// Number of requests that reached the transport
    pub fn call_count(&self) -> usize {
        self.captured_requests.lock().unwrap().len()
    }

    /// Requests sent so far, in order
    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.captured_requests.lock().unwrap().clone()
    }

    fn push(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.captured_requests.lock().unwrap().push(request);

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Failure(cause)) => Err(TransportError(cause)),
            None => Err(TransportError("MockTransport: no reply queued".to_string())),
        }
    }
}
