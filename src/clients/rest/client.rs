//! The Help Center session client.
//!
//! [`RestClient`] ties a [`Transport`] to a [`ChainContext`] and hands out the
//! resource handles (`articles()`, `sections()`, ...). Every operation runs
//! through it, so ids created by one handle are visible to the next.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::clients::{HttpClient, HttpRequest, HttpResponse, Transport};
use crate::config::HelpCenterConfig;
use crate::rest::resources::{ArticleAttachments, ArticleLabels, Articles, Categories, Sections};
use crate::rest::{
    resolve, ChainContext, PathParams, ResolvedRoute, ResourceDescriptor, ResourceError,
    ResourceKind, ResourceOperation,
};

/// Client for the Help Center REST API.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`. The chain context sits behind a mutex that
/// is only held for the synchronous resolve and record steps, never across a
/// request. Interleaving operations from several tasks on one client is
/// allowed but the chained ids then depend on completion order; pass parent
/// ids explicitly in that case.
///
/// # Example
///
/// ```rust,ignore
/// use help_center::{ApiToken, Credentials, HelpCenterConfig, RestClient, Subdomain};
/// use help_center::rest::resources::NewArticle;
///
/// let config = HelpCenterConfig::builder()
///     .subdomain(Subdomain::new("acme")?)
///     .credentials(Credentials::api_token("agent@acme.com", ApiToken::new("token")?)?)
///     .build()?;
/// let client = RestClient::new(&config);
///
/// let mut articles = client.articles();
/// articles.set_locale("en-us");
/// let response = articles
///     .create(&NewArticle::new("Title").body("Body").section_id(5))
///     .await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    transport: Arc<dyn Transport>,
    chain: Mutex<ChainContext>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client that talks to the account described by `config`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created. See
    /// [`HttpClient::new`].
    #[must_use]
    pub fn new(config: &HelpCenterConfig) -> Self {
        tracing::debug!(base_uri = %config.base_uri(), "Creating Help Center client");
        Self::with_transport(Arc::new(HttpClient::new(config)))
    }

    /// Creates a client on top of any [`Transport`].
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            chain: Mutex::new(ChainContext::new()),
        }
    }

    /// Replaces the chain context, e.g. with one built by
    /// [`ChainContext::with_parent`].
    #[must_use]
    pub fn with_chain(self, chain: ChainContext) -> Self {
        Self {
            transport: self.transport,
            chain: Mutex::new(chain),
        }
    }

    /// Returns a snapshot of the chain context.
    #[must_use]
    pub fn chain(&self) -> ChainContext {
        self.lock_chain().clone()
    }

    /// Returns the last id recorded for `kind`.
    #[must_use]
    pub fn last_id(&self, kind: ResourceKind) -> Option<u64> {
        self.lock_chain().last_id(kind)
    }

    /// Records `id` as the last id for `kind`.
    pub fn record_id(&self, kind: ResourceKind, id: u64) {
        self.lock_chain().record_id(kind, id);
    }

    /// Forgets every chained id.
    pub fn clear_chain(&self) {
        self.lock_chain().clear();
    }

    /// Records `id` for `parent` after checking that `sub_resource` exists.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidSubResource`] for unknown keys.
    pub fn navigate(
        &self,
        parent: &ResourceDescriptor,
        id: u64,
        sub_resource: &str,
    ) -> Result<ResourceKind, ResourceError> {
        self.lock_chain().navigate(parent, id, sub_resource)
    }

    /// Resolves a route against this client's chain context.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn resolve(
        &self,
        descriptor: &ResourceDescriptor,
        operation: ResourceOperation,
        params: &PathParams,
        locale: Option<&str>,
    ) -> Result<ResolvedRoute, ResourceError> {
        let chain = self.lock_chain();
        resolve(descriptor, operation, params, &chain, locale)
    }

    /// Sends a request through the transport.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] carrying `operation`, the request
    /// path and the transport's error. Nothing is retried.
    pub async fn send(
        &self,
        operation: &str,
        request: HttpRequest,
    ) -> Result<HttpResponse, ResourceError> {
        let path = request.path.clone();
        tracing::debug!(
            operation,
            method = %request.http_method,
            path = %path,
            "Dispatching Help Center operation"
        );

        self.transport.send(request).await.map_err(|source| {
            tracing::warn!(operation, path = %path, error = %source, "Help Center request failed");
            ResourceError::Transport {
                operation: operation.to_string(),
                path,
                source,
            }
        })
    }

    /// Returns a handle for articles.
    #[must_use]
    pub fn articles(&self) -> Articles<'_> {
        Articles::new(self)
    }

    /// Returns a handle for sections.
    #[must_use]
    pub fn sections(&self) -> Sections<'_> {
        Sections::new(self)
    }

    /// Returns a handle for categories.
    #[must_use]
    pub fn categories(&self) -> Categories<'_> {
        Categories::new(self)
    }

    /// Returns a handle for article labels.
    #[must_use]
    pub fn article_labels(&self) -> ArticleLabels<'_> {
        ArticleLabels::new(self)
    }

    /// Returns a handle for article attachments.
    #[must_use]
    pub fn article_attachments(&self) -> ArticleAttachments<'_> {
        ArticleAttachments::new(self)
    }

    fn lock_chain(&self) -> MutexGuard<'_, ChainContext> {
        self.chain.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::MockTransport;
    use crate::clients::HttpMethod;
    use crate::config::{ApiToken, Credentials, Subdomain};
    use crate::rest::resources::CATEGORIES;

    #[test]
    fn test_new_builds_http_transport() {
        let config = HelpCenterConfig::builder()
            .subdomain(Subdomain::new("acme").unwrap())
            .credentials(
                Credentials::api_token("agent@acme.com", ApiToken::new("t").unwrap()).unwrap(),
            )
            .build()
            .unwrap();

        let client = RestClient::new(&config);
        assert!(client.chain().is_empty());
    }

    #[test]
    fn test_chain_accessors() {
        let client = RestClient::with_transport(Arc::new(MockTransport::new()))
            .with_chain(ChainContext::new().with_parent(ResourceKind::Category, 3));

        assert_eq!(client.last_id(ResourceKind::Category), Some(3));
        client.record_id(ResourceKind::Section, 4);
        assert_eq!(client.chain().len(), 2);

        client.clear_chain();
        assert!(client.chain().is_empty());
    }

    #[test]
    fn test_navigate_goes_through_chain() {
        let client = RestClient::with_transport(Arc::new(MockTransport::new()));

        let kind = client.navigate(&CATEGORIES, 8, "sections").unwrap();
        assert_eq!(kind, ResourceKind::Section);
        assert_eq!(client.last_id(ResourceKind::Category), Some(8));
    }

    #[tokio::test]
    async fn test_send_wraps_transport_errors_with_context() {
        let transport = Arc::new(MockTransport::new());
        transport.push_error(500, "boom");
        let client = RestClient::with_transport(transport.clone());

        let request = HttpRequest::builder(HttpMethod::Get, "help_center/categories.json")
            .build()
            .unwrap();
        let error = client.send("Categories::findAll", request).await.unwrap_err();

        match error {
            ResourceError::Transport {
                operation, path, ..
            } => {
                assert_eq!(operation, "Categories::findAll");
                assert_eq!(path, "help_center/categories.json");
            }
            other => panic!("expected Transport, got {other:?}"),
        }
        assert_eq!(transport.call_count(), 1);
    }
}
