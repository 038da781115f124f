//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Zendesk API token.
///
/// The token is non-empty and masked in debug output so it never ends up in
/// logs by accident.
///
/// # Example
///
/// ```rust
/// use help_center::ApiToken;
///
/// let token = ApiToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated OAuth access token.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated Zendesk account subdomain.
///
/// # Accepted Formats
///
/// - `acme` - normalized to `acme.zendesk.com`
/// - `acme.zendesk.com` - used as-is
///
/// # Example
///
/// ```rust
/// use help_center::Subdomain;
///
/// let subdomain = Subdomain::new("acme").unwrap();
/// assert_eq!(subdomain.as_ref(), "acme");
/// assert_eq!(subdomain.host(), "acme.zendesk.com");
///
/// let subdomain = Subdomain::new("Acme.zendesk.com").unwrap();
/// assert_eq!(subdomain.as_ref(), "acme");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subdomain(String);

impl Subdomain {
    const SUFFIX: &'static str = ".zendesk.com";

    /// Creates a new validated subdomain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSubdomain`] if the subdomain is invalid.
    pub fn new(subdomain: impl Into<String>) -> Result<Self, ConfigError> {
        let subdomain = subdomain.into().trim().to_lowercase();
        let name = subdomain.strip_suffix(Self::SUFFIX).unwrap_or(&subdomain);

        if !Self::is_valid_name(name) {
            return Err(ConfigError::InvalidSubdomain { subdomain });
        }

        Ok(Self(name.to_string()))
    }

    /// Returns the full host name, e.g. `acme.zendesk.com`.
    #[must_use]
    pub fn host(&self) -> String {
        format!("{}{}", self.0, Self::SUFFIX)
    }

    fn is_valid_name(name: &str) -> bool {
        if name.is_empty() || name.starts_with('-') || name.ends_with('-') {
            return false;
        }

        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for Subdomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Subdomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Subdomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated base URL overriding the account host.
///
/// Used when requests go through a proxy, or at a local mock server in tests.
///
/// # Example
///
/// ```rust
/// use help_center::HostUrl;
///
/// let url = HostUrl::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("127.0.0.1"));
/// assert_eq!(url.base_uri(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_start == host_end {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }

    /// Returns the URL without a trailing slash, ready to prefix request paths.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.url
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_token_rejects_empty_string() {
        assert!(matches!(ApiToken::new(""), Err(ConfigError::EmptyApiToken)));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret").unwrap();
        assert_eq!(format!("{token:?}"), "AccessToken(*****)");
    }

    #[test]
    fn test_subdomain_normalizes_full_host() {
        let subdomain = Subdomain::new("  ACME.zendesk.com ").unwrap();
        assert_eq!(subdomain.as_ref(), "acme");
        assert_eq!(subdomain.host(), "acme.zendesk.com");
    }

    #[test]
    fn test_subdomain_rejects_foreign_domain() {
        let result = Subdomain::new("acme.example.com");
        assert!(matches!(result, Err(ConfigError::InvalidSubdomain { .. })));
    }

    #[test]
    fn test_subdomain_rejects_leading_hyphen_and_empty() {
        assert!(Subdomain::new("-acme").is_err());
        assert!(Subdomain::new("").is_err());
        assert!(Subdomain::new(".zendesk.com").is_err());
    }

    #[test]
    fn test_subdomain_serde_round_trip_validates() {
        let subdomain: Subdomain = serde_json::from_str(r#""support-team""#).unwrap();
        assert_eq!(subdomain.as_ref(), "support-team");

        let bad: Result<Subdomain, _> = serde_json::from_str(r#""bad domain""#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_host_url_keeps_port_in_base_uri() {
        let url = HostUrl::new("http://localhost:3000").unwrap();
        assert_eq!(url.host_name(), Some("localhost"));
        assert_eq!(url.base_uri(), "http://localhost:3000");
    }

    #[test]
    fn test_host_url_rejects_missing_scheme() {
        assert!(matches!(
            HostUrl::new("localhost:3000"),
            Err(ConfigError::InvalidHostUrl { .. })
        ));
        assert!(HostUrl::new("https://").is_err());
    }
}
