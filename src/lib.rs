//! # Zendesk Help Center SDK
//!
//! A Rust SDK for the Zendesk Help Center REST API, providing type-safe
//! configuration, route resolution and resource operations for articles,
//! sections, categories, article labels and article attachments.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`HelpCenterConfig`] and [`HelpCenterConfigBuilder`]
//! - Validated newtypes for credentials and account values
//! - Route tables that turn logical operations into request paths via [`rest`]
//! - Parent-id chaining so nested calls can omit ids already seen
//! - Locale-scoped paths for translated content
//! - Multipart uploads for article attachments
//! - An async HTTP client behind the [`Transport`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use help_center::{ApiToken, Credentials, HelpCenterConfig, Subdomain};
//!
//! let config = HelpCenterConfig::builder()
//!     .subdomain(Subdomain::new("acme").unwrap())
//!     .credentials(
//!         Credentials::api_token("agent@example.com", ApiToken::new("token").unwrap()).unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use help_center::RestClient;
//! use help_center::rest::resources::{ListParams, NewCategory, NewSection};
//!
//! let client = RestClient::new(&config);
//!
//! // GET /api/v2/help_center/en-us/categories.json
//! let categories = client.categories().with_locale("en-us");
//! let response = categories.find_all(&ListParams::default()).await?;
//!
//! // POST /api/v2/help_center/categories.json, then
//! // POST /api/v2/help_center/categories/<new id>/sections.json
//! client.categories().create(&NewCategory::new("FAQ")).await?;
//! client.sections().create(&NewSection::new("Billing")).await?;
//! ```
//!
//! ## Testing Without a Network
//!
//! ```rust
//! use std::sync::Arc;
//! use help_center::RestClient;
//! use help_center::clients::mock::MockTransport;
//!
//! let transport = Arc::new(MockTransport::new());
//! let client = RestClient::with_transport(transport.clone());
//! assert!(client.chain().is_empty());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and chain context live on the client
//! - **Fail-fast validation**: Missing parameters are reported before any request is sent
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiToken, Credentials, HelpCenterConfig, HelpCenterConfigBuilder, HostUrl,
    Subdomain,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RestClient, Transport,
};

// Re-export routing types
pub use rest::{ChainContext, ResourceError, ResourceKind, ResourceOperation};
