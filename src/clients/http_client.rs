//! HTTP client for Help Center API communication.
//!
//! This module provides [`HttpClient`], the `reqwest`-backed
//! [`Transport`](crate::clients::Transport).

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest, MultipartPart};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::{HelpCenterConfig, API_BASE_PATH};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Help Center API.
///
/// The client handles:
/// - Base URI construction from the account subdomain or host override
/// - Default headers including User-Agent and Authorization
/// - JSON and multipart request bodies
/// - Error serialization for non-2xx responses
///
/// It never retries; a failed call surfaces to the caller as-is.
///
/// # Example
///
/// ```rust,ignore
/// use help_center::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
///
/// let client = HttpClient::new(&config);
/// let request = HttpRequest::builder(HttpMethod::Get, "help_center/categories.json")
///     .build()
///     .unwrap();
///
/// let response = client.send(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://acme.zendesk.com`).
    base_uri: String,
    /// Base path (e.g., "/api/v2").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &HelpCenterConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Zendesk Help Center Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.credentials().authorization_header(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri: config.base_uri(),
            base_path: API_BASE_PATH.to_string(),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request path is sent to.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            path.trim_start_matches('/')
        )
    }

    /// Sends an HTTP request to the Help Center API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - An upload file cannot be opened (`Io`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", crate::clients::DataType::Json.as_content_type())
                .body(body.to_string());
        } else if let Some(parts) = &request.multipart {
            req_builder = req_builder.multipart(Self::multipart_form(parts).await?);
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Sending Help Center request"
        );

        // Upload file handles live inside the request body and are dropped
        // as soon as `send` resolves, on success and on error alike.
        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Opens every upload and wraps it in a streaming multipart part.
    async fn multipart_form(
        parts: &[MultipartPart],
    ) -> Result<reqwest::multipart::Form, HttpError> {
        let mut form = reqwest::multipart::Form::new();
        for part in parts {
            let file = part.source.open().await?;
            let body = reqwest::Body::from(file);
            let file_part =
                reqwest::multipart::Part::stream(body).file_name(part.file_name.clone());
            form = form.part(part.name.clone(), file_part);
        }
        Ok(form)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response to a compact JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for field in ["error", "description", "details", "errors"] {
            if let Some(value) = response.body.get(field) {
                error_body.insert(field.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ApiToken, Credentials, HostUrl, Subdomain};

    fn create_test_config() -> HelpCenterConfig {
        HelpCenterConfig::builder()
            .subdomain(Subdomain::new("acme").unwrap())
            .credentials(
                Credentials::api_token("agent@example.com", ApiToken::new("secret").unwrap())
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_subdomain() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(client.base_uri(), "https://acme.zendesk.com");
        assert_eq!(client.base_path(), "/api/v2");
    }

    #[test]
    fn test_url_for_joins_base_and_path() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.url_for("help_center/articles.json"),
            "https://acme.zendesk.com/api/v2/help_center/articles.json"
        );
        assert_eq!(
            client.url_for("/help_center/articles.json"),
            "https://acme.zendesk.com/api/v2/help_center/articles.json"
        );
    }

    #[test]
    fn test_authorization_header_injection() {
        let config = HelpCenterConfig::builder()
            .subdomain(Subdomain::new("acme").unwrap())
            .credentials(Credentials::oauth(AccessToken::new("oauth-token").unwrap()))
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer oauth-token".to_string())
        );
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = HelpCenterConfig::builder()
            .subdomain(Subdomain::new("acme").unwrap())
            .credentials(Credentials::oauth(AccessToken::new("t").unwrap()))
            .host(HostUrl::new("http://localhost:8080").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Zendesk Help Center Library"));
        assert_eq!(client.base_uri(), "http://localhost:8080");
    }

    #[test]
    fn test_serialize_error_keeps_known_fields() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-9".to_string()]);
        let response = HttpResponse::new(
            422,
            headers,
            serde_json::json!({
                "error": "RecordInvalid",
                "description": "Record validation errors",
                "ignored": true
            }),
        );

        let message = HttpClient::serialize_error(&response);
        assert!(message.contains("RecordInvalid"));
        assert!(message.contains("Record validation errors"));
        assert!(message.contains("req-9"));
        assert!(!message.contains("ignored"));
    }
}
