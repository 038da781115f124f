//! The seam between the routing core and the wire.
//!
//! Resource operations never talk to `reqwest` directly: they hand a finished
//! [`HttpRequest`] to a [`Transport`] and get back an [`HttpResponse`] or an
//! [`HttpError`]. [`HttpClient`](crate::clients::HttpClient) is the production
//! implementation and `MockTransport` (behind the `test-util` feature) the
//! in-memory one used in tests.

use async_trait::async_trait;

use crate::clients::{HttpError, HttpRequest, HttpResponse};

/// Executes one request and returns the parsed response.
///
/// Implementations must return `Err` for non-2xx responses and must not
/// retry.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Sends `request` and waits for the response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}
