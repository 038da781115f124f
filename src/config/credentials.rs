//! Request authentication for the Help Center API.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::{AccessToken, ApiToken};
use crate::error::ConfigError;

/// Credentials used to authorize every API request.
///
/// # Example
///
/// ```rust
/// use help_center::{ApiToken, Credentials};
///
/// let credentials = Credentials::api_token(
///     "agent@example.com",
///     ApiToken::new("abc123").unwrap(),
/// )
/// .unwrap();
/// assert!(credentials.authorization_header().starts_with("Basic "));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// Agent email combined with an API token (`{email}/token:{token}`).
    ApiToken {
        /// The agent's email address.
        email: String,
        /// The API token.
        token: ApiToken,
    },
    /// An OAuth access token sent as a bearer token.
    OAuth(AccessToken),
}

impl Credentials {
    /// Creates API token credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEmail`] if `email` does not look like an
    /// email address.
    pub fn api_token(email: impl Into<String>, token: ApiToken) -> Result<Self, ConfigError> {
        let email = email.into().trim().to_string();
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !valid {
            return Err(ConfigError::InvalidEmail { email });
        }
        Ok(Self::ApiToken { email, token })
    }

    /// Creates OAuth credentials.
    #[must_use]
    pub const fn oauth(token: AccessToken) -> Self {
        Self::OAuth(token)
    }

    /// Returns the value of the `Authorization` header for these credentials.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        match self {
            Self::ApiToken { email, token } => {
                let raw = format!("{email}/token:{}", token.as_ref());
                format!("Basic {}", STANDARD.encode(raw))
            }
            Self::OAuth(token) => format!("Bearer {}", token.as_ref()),
        }
    }
}
