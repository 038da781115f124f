//! # MockTransport
//!
//! An in-memory [`Transport`] that records every request it receives and
//! answers from a queue of canned responses. Use it to assert exactly which
//! requests an operation produced, or that it produced none at all.
//!
//! ```rust
//! use std::sync::Arc;
//! use help_center::clients::mock::MockTransport;
//! use help_center::clients::rest::RestClient;
//! use serde_json::json;
//!
//! let transport = Arc::new(MockTransport::new());
//! transport.push_json(json!({"category": {"id": 7, "name": "FAQ"}}));
//!
//! let client = RestClient::with_transport(transport.clone());
//! assert_eq!(transport.call_count(), 0);
//! ```

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::clients::{HttpError, HttpRequest, HttpResponse, HttpResponseError, Transport};

/// A recording [`Transport`] double.
///
/// When the response queue is empty, `send` answers `200 {}`.
#[derive(Debug, Default)]
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<Result<HttpResponse, HttpResponseError>>>,
}

impl MockTransport {
    /// Creates a transport with an empty response queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a `200` response carrying `body`.
    pub fn push_json(&self, body: serde_json::Value) {
        self.push_response(HttpResponse::ok(body));
    }

    /// Queues an arbitrary response.
    pub fn push_response(&self, response: HttpResponse) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Ok(response));
    }

    /// Queues an error response with the given status code.
    pub fn push_error(&self, code: u16, message: impl Into<String>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(HttpResponseError {
                code,
                message: message.into(),
                error_reference: None,
            }));
    }

    /// Returns how many requests were sent.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns a copy of every request sent so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent request.
    #[must_use]
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let next = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match next {
            Some(Ok(response)) => Ok(response),
            Some(Err(error)) => Err(HttpError::Response(error)),
            None => Ok(HttpResponse::ok(serde_json::json!({}))),
        }
    }
}
