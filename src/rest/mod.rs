//! Resource routing for the Help Center REST API.
//!
//! This module maps logical operations on Help Center resources to concrete
//! requests:
//!
//! - **Route tables** ([`RouteTemplate`], [`DEFAULT_ROUTES`]): per-resource
//!   path templates with `{placeholder}` tokens
//! - **[`ChainContext`]**: the last id seen per resource kind, so nested calls
//!   can omit parent ids
//! - **[`resolve`]**: fills a template from explicit [`PathParams`], then the
//!   chain, and reports every gap at once
//! - **[`RequestBuilder`]**: envelopes, flat bodies, query strings and
//!   multipart uploads
//! - **[`Resource`]**: the generic CRUD base the handles in [`resources`]
//!   build on
//!
//! # Data Flow
//!
//! An operation validates its fields, resolves its route against the client's
//! chain context, builds an [`HttpRequest`](crate::HttpRequest), sends it
//! through the [`Transport`](crate::Transport), and records the id of anything
//! it created.
//!
//! # Example
//!
//! ```rust,ignore
//! use help_center::rest::resources::NewArticle;
//!
//! let mut articles = client.articles();
//! articles.set_locale("en-us");
//! let response = articles
//!     .create(&NewArticle::new("T").body("B").section_id(5))
//!     .await?;
//! ```
//!
//! # Key Types
//!
//! - [`ResourceError`]: Error types for resource operations
//! - [`ResourceDescriptor`] and [`RestResource`]: static resource metadata
//! - [`ResourceOperation`] and [`ResourceKind`]: operation and id-kind enums
//! - [`FileUpload`]: an attachment to upload

mod chain;
mod errors;
mod path;
mod request;
mod resource;
pub mod resources;

pub use chain::ChainContext;
pub use errors::ResourceError;
pub use path::{
    find_route, resolve, resource_prefix, PathParams, ResolvedRoute, ResourceOperation,
    RouteTemplate, DEFAULT_ROUTES,
};
pub use request::{FileUpload, RequestBuilder};
pub use resource::{Resource, ResourceDescriptor, ResourceKind, RestResource};
