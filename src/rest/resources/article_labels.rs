//! Article label resource implementation.
//!
//! Labels are created and removed under their article:
//!
//! - Create: `help_center/articles/{articleId}/labels.json`
//! - Delete: `help_center/articles/{articleId}/labels/{id}.json`
//!
//! `findAll` and `find` use the account-wide `help_center/articles/labels`
//! collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpResponse, RestClient};
use crate::rest::resources::ListParams;
use crate::rest::{
    PathParams, RequestBuilder, Resource, ResourceDescriptor, ResourceError, ResourceKind,
    ResourceOperation, RestResource, RouteTemplate,
};
use crate::HttpMethod;

const ROUTES: &[RouteTemplate] = &[
    RouteTemplate::new(
        ResourceOperation::Create,
        HttpMethod::Post,
        "help_center/articles/{articleId}/labels.json",
    ),
    RouteTemplate::new(
        ResourceOperation::Delete,
        HttpMethod::Delete,
        "help_center/articles/{articleId}/labels/{id}.json",
    ),
];

/// Descriptor of the article label resource.
pub static ARTICLE_LABELS: ResourceDescriptor = ResourceDescriptor {
    name: "ArticleLabels",
    kind: ResourceKind::ArticleLabel,
    object_name: "label",
    collection: "articles/labels",
    list_key: "labels",
    routes: ROUTES,
    inherits_defaults: true,
    locale_scoped: &[],
    sub_resources: &[],
};

/// A label attached to articles.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Label {
    /// The unique identifier of the label.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The label text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// API URL of the label.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub url: Option<String>,

    /// When the label was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the label was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Label {
    const DESCRIPTOR: &'static ResourceDescriptor = &ARTICLE_LABELS;
}

/// Fields for adding a label to an article.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct NewLabel {
    /// Article to label; taken from the chain when absent.
    #[serde(skip)]
    pub article_id: Option<u64>,

    /// The label text. Must not be blank.
    pub name: String,
}

impl NewLabel {
    /// Creates a label called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            article_id: None,
            name: name.into(),
        }
    }

    /// Sets the article explicitly.
    #[must_use]
    pub const fn article_id(mut self, article_id: u64) -> Self {
        self.article_id = Some(article_id);
        self
    }
}

/// Operations on article labels.
#[derive(Debug, Clone)]
pub struct ArticleLabels<'a> {
    base: Resource<'a, Label>,
}

impl<'a> ArticleLabels<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self {
            base: Resource::new(client),
        }
    }

    /// Lists every label in the account.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] if the request fails.
    pub async fn find_all(&self, params: &ListParams) -> Result<HttpResponse, ResourceError> {
        self.base.find_all(params).await
    }

    /// Finds a label. `None` uses the chained label id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if no id is available.
    pub async fn find(&self, id: impl Into<Option<u64>>) -> Result<HttpResponse, ResourceError> {
        self.base.find(id.into()).await
    }

    /// Adds a label to an article and chains the label's id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] naming every missing key
    /// among `name` and `articleId`, before anything is sent.
    pub async fn create(&self, label: &NewLabel) -> Result<HttpResponse, ResourceError> {
        let article_id = label
            .article_id
            .or_else(|| self.base.client().last_id(ResourceKind::Article));
        RequestBuilder::ensure_present(
            &self.base.operation_name(ResourceOperation::Create),
            &[
                ("name", !label.name.trim().is_empty()),
                ("articleId", article_id.is_some()),
            ],
        )?;

        let params = PathParams::new().with_opt("articleId", article_id);
        self.base.create(&params, label).await
    }

    /// Removes label `id` from an article. `None` uses the chained article id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if no article id is
    /// available.
    pub async fn delete(
        &self,
        article_id: impl Into<Option<u64>>,
        id: u64,
    ) -> Result<HttpResponse, ResourceError> {
        let params = PathParams::new()
            .with_opt("articleId", article_id.into())
            .with("id", id);
        self.base.delete_with(&params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::MockTransport;
    use crate::rest::ChainContext;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_reports_name_and_article_together() {
        let transport = Arc::new(MockTransport::new());
        let client = RestClient::with_transport(transport.clone());

        let error = client
            .article_labels()
            .create(&NewLabel::new("  "))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            ResourceError::MissingParameters { ref operation, ref missing }
                if operation == "ArticleLabels::create"
                    && missing == &vec!["name".to_string(), "articleId".to_string()]
        ));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_under_chained_article() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(json!({"label": {"id": 600, "name": "faq"}}));
        let client = RestClient::with_transport(transport.clone())
            .with_chain(ChainContext::new().with_parent(ResourceKind::Article, 21));

        client
            .article_labels()
            .create(&NewLabel::new("faq"))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(request.path, "help_center/articles/21/labels.json");
        assert_eq!(request.body, Some(json!({"label": {"name": "faq"}})));
        assert_eq!(client.last_id(ResourceKind::ArticleLabel), Some(600));
    }

    #[tokio::test]
    async fn test_delete_under_article() {
        let transport = Arc::new(MockTransport::new());
        let client = RestClient::with_transport(transport.clone());

        client.article_labels().delete(21, 600).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.http_method, HttpMethod::Delete);
        assert_eq!(request.path, "help_center/articles/21/labels/600.json");
    }

    #[tokio::test]
    async fn test_find_all_uses_label_collection() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(json!({"labels": [{"id": 1, "name": "a"}]}));
        let client = RestClient::with_transport(transport.clone());

        let response = client
            .article_labels()
            .find_all(&ListParams::default())
            .await
            .unwrap();

        assert_eq!(
            transport.last_request().unwrap().path,
            "help_center/articles/labels.json"
        );
        let labels = Resource::<Label>::decode_list(&response).unwrap();
        assert_eq!(labels[0].name.as_deref(), Some("a"));
    }
}
