//! Error types for SDK configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that an
//! invalid subdomain or an empty credential is rejected before any client is
//! built.
//!
//! # Example
//!
//! ```rust
//! use help_center::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid Zendesk API token.")]
    EmptyApiToken,

    /// OAuth access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid OAuth access token.")]
    EmptyAccessToken,

    /// The agent email used with an API token is invalid.
    #[error("Invalid email '{email}'. API token authentication requires the agent's email address.")]
    InvalidEmail {
        /// The invalid email that was provided.
        email: String,
    },

    /// Subdomain is invalid.
    #[error("Invalid subdomain '{subdomain}'. Expected format: 'acme' or 'acme.zendesk.com'.")]
    InvalidSubdomain {
        /// The invalid subdomain that was provided.
        subdomain: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
