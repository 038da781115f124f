//! Error types for resource operations.
//!
//! Validation errors ([`ResourceError::MissingParameters`],
//! [`ResourceError::RouteNotFound`], [`ResourceError::FileNotFound`],
//! [`ResourceError::InvalidSubResource`]) are raised before anything is sent.
//! [`ResourceError::Transport`] wraps the transport's own error together with
//! the operation and resolved path that produced it.
//!
//! # Example
//!
//! ```rust,ignore
//! use help_center::rest::ResourceError;
//!
//! match client.articles().create(&article).await {
//!     Ok(response) => println!("Created: {}", response.body),
//!     Err(ResourceError::MissingParameters { operation, missing }) => {
//!         println!("{operation} needs {}", missing.join(", "));
//!     }
//!     Err(ResourceError::Transport { path, source, .. }) => {
//!         println!("{path} failed: {source}");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::clients::{HttpError, InvalidHttpRequestError};

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Required parameters were absent and could not be taken from the chain
    /// context.
    #[error("Missing parameters for {operation}: {}", .missing.join(", "))]
    MissingParameters {
        /// The operation that was attempted (e.g. `Articles::create`).
        operation: String,
        /// The missing keys, in template order.
        missing: Vec<String>,
    },

    /// The resource has no route for the operation.
    #[error("No route registered for {resource}::{operation}")]
    RouteNotFound {
        /// The resource type name (e.g. `Articles`).
        resource: &'static str,
        /// The operation name (e.g. `createUnassociated`).
        operation: &'static str,
    },

    /// A file referenced for upload does not exist.
    #[error("File {} could not be found in {operation}", .path.display())]
    FileNotFound {
        /// The operation that was attempted.
        operation: String,
        /// The path that was checked.
        path: PathBuf,
    },

    /// The parent resource has no sub-resource under this key.
    #[error("{resource} has no sub-resource '{sub_resource}'")]
    InvalidSubResource {
        /// The parent resource type name.
        resource: &'static str,
        /// The requested sub-resource key.
        sub_resource: String,
    },

    /// The request could not be assembled.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Request fields could not be serialized.
    #[error("Failed to serialize request: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The transport reported a failure.
    #[error("{operation} failed at {path}: {source}")]
    Transport {
        /// The operation that was attempted.
        operation: String,
        /// The resolved request path.
        path: String,
        /// The underlying transport error.
        #[source]
        source: HttpError,
    },
}

impl ResourceError {
    /// Returns the HTTP status code if the server rejected the request.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Returns the request id reported by the server, if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Transport {
                source: HttpError::Response(e),
                ..
            } => e.error_reference.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` if the error was raised before anything was sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::Transport { .. })
    }
}
