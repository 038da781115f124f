//! Article attachment resource implementation.
//!
//! Attachments are uploaded as a single multipart part named `file`, either
//! under an article or unassociated (to be linked later). The `inline` query
//! parameter is always sent as `"true"` or `"false"`.
//!
//! Attachments do not inherit the generic routes; there is no update route.
//!
//! # Example
//!
//! ```rust,ignore
//! use help_center::rest::FileUpload;
//!
//! let attachments = client.articles().attachments(42)?;
//! attachments
//!     .create(&FileUpload::new("docs/diagram.png").inline(true))
//!     .await?;
//! // POST help_center/articles/42/attachments.json?inline=true
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpResponse, RestClient};
use crate::rest::resources::ListParams;
use crate::rest::{
    FileUpload, PathParams, RequestBuilder, Resource, ResourceDescriptor, ResourceError,
    ResourceKind, ResourceOperation, RestResource, RouteTemplate,
};
use crate::HttpMethod;

const ROUTES: &[RouteTemplate] = &[
    RouteTemplate::new(
        ResourceOperation::Create,
        HttpMethod::Post,
        "help_center/articles/{articleId}/attachments.json",
    ),
    RouteTemplate::new(
        ResourceOperation::CreateUnassociated,
        HttpMethod::Post,
        "help_center/articles/attachments.json",
    ),
    RouteTemplate::new(
        ResourceOperation::FindAll,
        HttpMethod::Get,
        "help_center/articles/{articleId}/attachments.json",
    ),
    RouteTemplate::new(ResourceOperation::Find, HttpMethod::Get, "{resource}/{id}.json"),
    RouteTemplate::new(ResourceOperation::Delete, HttpMethod::Delete, "{resource}/{id}.json"),
];

/// Descriptor of the article attachment resource.
pub static ARTICLE_ATTACHMENTS: ResourceDescriptor = ResourceDescriptor {
    name: "ArticleAttachments",
    kind: ResourceKind::ArticleAttachment,
    object_name: "article_attachment",
    collection: "articles/attachments",
    list_key: "article_attachments",
    routes: ROUTES,
    inherits_defaults: false,
    locale_scoped: &[],
    sub_resources: &[],
};

/// A file attached to an article.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Attachment {
    /// The unique identifier of the attachment.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The article the attachment belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<u64>,

    /// The file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// The MIME type of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Whether the attachment is shown inline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,

    /// API URL of the attachment.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub url: Option<String>,

    /// Download URL of the file.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub content_url: Option<String>,

    /// When the attachment was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the attachment was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Attachment {
    const DESCRIPTOR: &'static ResourceDescriptor = &ARTICLE_ATTACHMENTS;
}

/// Operations on article attachments.
#[derive(Debug, Clone)]
pub struct ArticleAttachments<'a> {
    base: Resource<'a, Attachment>,
}

impl<'a> ArticleAttachments<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self {
            base: Resource::new(client),
        }
    }

    /// Uploads a file attached to an article and chains the attachment id.
    ///
    /// The article comes from `upload.article_id` or the chain.
    ///
    /// # Errors
    ///
    /// Returns, before anything is sent:
    /// - [`ResourceError::MissingParameters`] naming `file` and/or `articleId`
    /// - [`ResourceError::FileNotFound`] if the file does not exist
    pub async fn create(&self, upload: &FileUpload) -> Result<HttpResponse, ResourceError> {
        let article_id = upload
            .article_id
            .or_else(|| self.base.client().last_id(ResourceKind::Article));
        RequestBuilder::ensure_present(
            &self.base.operation_name(ResourceOperation::Create),
            &[
                ("file", upload.has_file()),
                ("articleId", article_id.is_some()),
            ],
        )?;

        let params = PathParams::new().with_opt("articleId", article_id);
        self.upload(ResourceOperation::Create, &params, upload).await
    }

    /// Uploads a file that is not attached to any article yet.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] naming `file` if no path
    /// was given, or [`ResourceError::FileNotFound`] if it does not exist.
    pub async fn create_unassociated(
        &self,
        upload: &FileUpload,
    ) -> Result<HttpResponse, ResourceError> {
        RequestBuilder::ensure_present(
            &self
                .base
                .operation_name(ResourceOperation::CreateUnassociated),
            &[("file", upload.has_file())],
        )?;

        self.upload(
            ResourceOperation::CreateUnassociated,
            &PathParams::new(),
            upload,
        )
        .await
    }

    /// Lists the attachments of an article. `None` uses the chained article
    /// id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if no article id is
    /// available.
    pub async fn find_all(
        &self,
        article_id: impl Into<Option<u64>>,
        params: &ListParams,
    ) -> Result<HttpResponse, ResourceError> {
        let path_params = PathParams::new().with_opt("articleId", article_id.into());
        self.base.find_all_with(&path_params, params).await
    }

    /// Finds an attachment. `None` uses the chained attachment id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if no id is available.
    pub async fn find(&self, id: impl Into<Option<u64>>) -> Result<HttpResponse, ResourceError> {
        self.base.find(id.into()).await
    }

    /// Deletes an attachment. `None` uses the chained attachment id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if no id is available.
    pub async fn delete(&self, id: impl Into<Option<u64>>) -> Result<HttpResponse, ResourceError> {
        self.base.delete(id.into()).await
    }

    async fn upload(
        &self,
        operation: ResourceOperation,
        params: &PathParams,
        upload: &FileUpload,
    ) -> Result<HttpResponse, ResourceError> {
        let route = self.base.resolve(operation, params, None)?;
        let request = RequestBuilder::new(&route)
            .file_upload(&self.base.operation_name(operation), upload)?
            .build()?;
        self.base.dispatch(&route, request).await
    }
}
