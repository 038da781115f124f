//! Configuration types for the Help Center SDK.
//!
//! # Overview
//!
//! - [`HelpCenterConfig`]: account, credentials and transport settings
//! - [`HelpCenterConfigBuilder`]: a builder for [`HelpCenterConfig`]
//! - [`Subdomain`], [`HostUrl`], [`ApiToken`], [`AccessToken`]: validated newtypes
//! - [`Credentials`]: how requests are authorized
//!
//! # Example
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
//!
//! assert_eq!(config.base_uri(), "https://acme.zendesk.com");
//! ```

mod credentials;
mod newtypes;

pub use credentials::Credentials;
pub use newtypes::{AccessToken, ApiToken, HostUrl, Subdomain};

use crate::error::ConfigError;

/// Path prefix shared by every Help Center endpoint.
pub const API_BASE_PATH: &str = "/api/v2";

/// Configuration for the Help Center SDK.
///
/// `HelpCenterConfig` is `Clone + Send + Sync` and can be shared between
/// clients.
#[derive(Clone, Debug)]
pub struct HelpCenterConfig {
    subdomain: Subdomain,
    credentials: Credentials,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl HelpCenterConfig {
    /// Creates a new builder for constructing a `HelpCenterConfig`.
    #[must_use]
    pub fn builder() -> HelpCenterConfigBuilder {
        HelpCenterConfigBuilder::new()
    }

    /// Returns the account subdomain.
    #[must_use]
    pub const fn subdomain(&self) -> &Subdomain {
        &self.subdomain
    }

    /// Returns the request credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the host override, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the scheme and host every request is sent to.
    ///
    /// The host override wins over the account subdomain.
    #[must_use]
    pub fn base_uri(&self) -> String {
        self.host.as_ref().map_or_else(
            || format!("https://{}", self.subdomain.host()),
            |host| host.base_uri().to_string(),
        )
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HelpCenterConfig>();
};

/// Builder for [`HelpCenterConfig`].
///
/// `subdomain` and `credentials` are required.
#[derive(Debug, Default)]
pub struct HelpCenterConfigBuilder {
    subdomain: Option<Subdomain>,
    credentials: Option<Credentials>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl HelpCenterConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account subdomain (required).
    #[must_use]
    pub fn subdomain(mut self, subdomain: Subdomain) -> Self {
        self.subdomain = Some(subdomain);
        self
    }

    /// Sets the request credentials (required).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sends requests to `host` instead of `https://{subdomain}.zendesk.com`.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `subdomain` or
    /// `credentials` was not set.
    pub fn build(self) -> Result<HelpCenterConfig, ConfigError> {
        let subdomain = self
            .subdomain
            .ok_or(ConfigError::MissingRequiredField { field: "subdomain" })?;
        let credentials = self.credentials.ok_or(ConfigError::MissingRequiredField {
            field: "credentials",
        })?;

        Ok(HelpCenterConfig {
            subdomain,
            credentials,
            host: self.host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::oauth(AccessToken::new("token").unwrap())
    }

    #[test]
    fn test_builder_requires_subdomain() {
        let result = HelpCenterConfig::builder().credentials(credentials()).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "subdomain" })
        ));
    }

    #[test]
    fn test_builder_requires_credentials() {
        let result = HelpCenterConfig::builder()
            .subdomain(Subdomain::new("acme").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "credentials"
            })
        ));
    }

    #[test]
    fn test_host_override_replaces_subdomain_uri() {
        let config = HelpCenterConfig::builder()
            .subdomain(Subdomain::new("acme").unwrap())
            .credentials(credentials())
            .host(HostUrl::new("http://127.0.0.1:9000").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_uri(), "http://127.0.0.1:9000");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_default_base_uri_uses_subdomain() {
        let config = HelpCenterConfig::builder()
            .subdomain(Subdomain::new("acme").unwrap())
            .credentials(credentials())
            .build()
            .unwrap();

        assert_eq!(config.base_uri(), "https://acme.zendesk.com");
        assert!(config.host().is_none());
    }
}
