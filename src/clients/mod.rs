//! HTTP client types for Help Center API communication.
//!
//! This module provides the transport layer the routing core sends through.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Transport`]: The seam between resource operations and the wire
//! - [`HttpClient`]: The reqwest-backed transport
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`MultipartPart`] and [`FileSource`]: Lazily opened upload parts
//! - [`rest::RestClient`]: The session client that hands out resource handles
//! - `mock::MockTransport`: A recording transport for tests (`test-util`
//!   feature)
//!
//! # Example
//!
//! ```rust,ignore
//! use help_center::{HelpCenterConfig, HttpClient, HttpMethod, HttpRequest, Transport};
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "help_center/articles.json")
//!     .build()
//!     .unwrap();
//!
//! let response = client.send(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. A non-2xx response or network failure is returned to the caller as
//! an [`HttpError`].

mod errors;
mod http_client;
mod http_request;
mod http_response;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;
pub mod rest;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    DataType, FileSource, HttpMethod, HttpRequest, HttpRequestBuilder, MultipartPart,
};
pub use http_response::HttpResponse;
pub use transport::Transport;

pub use rest::RestClient;
