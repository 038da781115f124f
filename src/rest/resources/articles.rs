//! Article resource implementation.
//!
//! Articles differ from the generic resource in three ways:
//!
//! - Create goes through `help_center/{locale}/sections/{sectionId}/articles.json`.
//!   The locale comes from the handle or the fields; the section id is explicit
//!   or chained from the last section.
//! - Update edits one translation: PUT
//!   `help_center/articles/{articleId}/translations/{locale}.json` with the
//!   fields under a `translation` envelope.
//! - `findAll` and `find` use `help_center/<locale>/articles` when a locale is
//!   set.
//!
//! # Example
//!
//! ```rust,ignore
//! use help_center::rest::resources::{ArticleTranslation, NewArticle};
//!
//! let mut articles = client.articles();
//! articles.set_locale("en-us");
//! articles
//!     .create(&NewArticle::new("T").body("B").section_id(5))
//!     .await?;
//! // POST help_center/en-us/sections/5/articles.json
//! // {"article": {"title": "T", "body": "B"}}
//!
//! client
//!     .articles()
//!     .update(42, &ArticleTranslation::default().locale("en-us").body("X"))
//!     .await?;
//! // PUT help_center/articles/42/translations/en-us.json
//! // {"translation": {"body": "X"}}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpResponse, RestClient};
use crate::rest::resources::{ArticleAttachments, ArticleLabels, ListParams};
use crate::rest::{
    PathParams, RequestBuilder, Resource, ResourceDescriptor, ResourceError, ResourceKind,
    ResourceOperation, RestResource, RouteTemplate,
};
use crate::HttpMethod;

const ROUTES: &[RouteTemplate] = &[
    RouteTemplate::new(
        ResourceOperation::Create,
        HttpMethod::Post,
        "help_center/{locale}/sections/{sectionId}/articles.json",
    ),
    RouteTemplate::new(
        ResourceOperation::Update,
        HttpMethod::Put,
        "{resource}/{articleId}/translations/{locale}.json",
    ),
    RouteTemplate::new(
        ResourceOperation::UpdateSourceLocale,
        HttpMethod::Put,
        "{resource}/{id}/source_locale.json",
    ),
];

/// Descriptor of the article resource.
pub static ARTICLES: ResourceDescriptor = ResourceDescriptor {
    name: "Articles",
    kind: ResourceKind::Article,
    object_name: "article",
    collection: "articles",
    list_key: "articles",
    routes: ROUTES,
    inherits_defaults: true,
    locale_scoped: &[ResourceOperation::FindAll, ResourceOperation::Find],
    sub_resources: &[
        ("article_attachments", ResourceKind::ArticleAttachment),
        ("article_labels", ResourceKind::ArticleLabel),
    ],
};

/// A Help Center article.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Article {
    /// The unique identifier of the article.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The section the article belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<u64>,

    /// The article title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The article body in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// The locale the article is displayed in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// The locale the article was originally written in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_locale: Option<String>,

    /// The author's user id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<u64>,

    /// Whether the article is a draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,

    /// Whether the article is promoted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoted: Option<bool>,

    /// Whether comments are disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_disabled: Option<bool>,

    /// Position within the section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// Whether the displayed translation is outdated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdated: Option<bool>,

    /// Labels attached to the article.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub label_names: Vec<String>,

    /// Sum of the article's votes.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub vote_sum: Option<i64>,

    /// Number of votes cast.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub vote_count: Option<i64>,

    /// API URL of the article.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub url: Option<String>,

    /// Help Center URL of the article.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub html_url: Option<String>,

    /// When the article was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the article was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the article content was last edited.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub edited_at: Option<DateTime<Utc>>,
}

impl RestResource for Article {
    const DESCRIPTOR: &'static ResourceDescriptor = &ARTICLES;
}

/// One translation of an article, as returned by a translation update.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Translation {
    /// The unique identifier of the translation.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The id of the translated article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<u64>,

    /// The kind of the translated item (`Article`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    /// The translation's locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Translated title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Translated body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Whether the translation is outdated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdated: Option<bool>,

    /// Whether the translation is a draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,

    /// When the translation was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields for creating an article.
///
/// `section_id` and `locale` select the route and are not sent in the body.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct NewArticle {
    /// Section to create the article in; taken from the chain when absent.
    #[serde(skip)]
    pub section_id: Option<u64>,

    /// Locale for this call only; the handle's locale is used when absent.
    #[serde(skip)]
    pub locale: Option<String>,

    /// The article title.
    pub title: String,

    /// The article body in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// The author's user id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<u64>,

    /// Whether the article is a draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,

    /// Whether the article is promoted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoted: Option<bool>,

    /// Whether comments are disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_disabled: Option<bool>,

    /// User segment allowed to view the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_segment_id: Option<u64>,

    /// Permission group allowed to edit the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_group_id: Option<u64>,

    /// Labels to attach.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label_names: Vec<String>,
}

impl NewArticle {
    /// Creates the fields for an article titled `title`.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the section explicitly.
    #[must_use]
    pub const fn section_id(mut self, section_id: u64) -> Self {
        self.section_id = Some(section_id);
        self
    }

    /// Sets the locale for this call.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// Fields for updating one translation of an article.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ArticleTranslation {
    /// Locale of the translation for this call only; the handle's locale is
    /// used when absent.
    #[serde(skip)]
    pub locale: Option<String>,

    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Draft flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,

    /// Outdated flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdated: Option<bool>,
}

impl ArticleTranslation {
    /// Sets the locale for this call.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Operations on articles.
#[derive(Debug, Clone)]
pub struct Articles<'a> {
    base: Resource<'a, Article>,
}

impl<'a> Articles<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self {
            base: Resource::new(client),
        }
    }

    /// Returns the handle with `locale` set.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.base.set_locale(locale);
        self
    }

    /// Sets the locale used by locale-scoped routes.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.base.set_locale(locale);
    }

    /// Returns the locale set on this handle.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.base.locale()
    }

    /// Lists articles.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] if the request fails.
    pub async fn find_all(&self, params: &ListParams) -> Result<HttpResponse, ResourceError> {
        self.base.find_all(params).await
    }

    /// Finds an article. `None` uses the chained article id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if no id is available.
    pub async fn find(&self, id: impl Into<Option<u64>>) -> Result<HttpResponse, ResourceError> {
        self.base.find(id.into()).await
    }

    /// Creates an article in a section and chains its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] naming `locale` if neither
    /// the handle nor `article` has one, then naming `sectionId` if no section
    /// is given or chained. Both checks happen before anything is sent.
    pub async fn create(&self, article: &NewArticle) -> Result<HttpResponse, ResourceError> {
        let operation = self.base.operation_name(ResourceOperation::Create);
        let locale = self.base.effective_locale(article.locale.as_deref());
        RequestBuilder::ensure_present(&operation, &[("locale", locale.is_some())])?;

        let section_id = article
            .section_id
            .or_else(|| self.base.client().last_id(ResourceKind::Section));
        RequestBuilder::ensure_present(&operation, &[("sectionId", section_id.is_some())])?;

        let params = PathParams::new()
            .with_opt("locale", locale)
            .with_opt("sectionId", section_id);
        self.base.create(&params, article).await
    }

    /// Updates one translation of an article. `None` uses the chained
    /// article id.
    ///
    /// The fields are sent under a `translation` envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] naming `locale` if neither
    /// the handle nor `fields` has one.
    pub async fn update(
        &self,
        id: impl Into<Option<u64>>,
        fields: &ArticleTranslation,
    ) -> Result<HttpResponse, ResourceError> {
        let operation = self.base.operation_name(ResourceOperation::Update);
        let locale = self.base.effective_locale(fields.locale.as_deref());
        RequestBuilder::ensure_present(&operation, &[("locale", locale.is_some())])?;

        let params = PathParams::new()
            .with_opt("articleId", id.into())
            .with_opt("locale", locale);
        self.base
            .send_json(
                ResourceOperation::Update,
                &params,
                locale,
                "translation",
                fields,
            )
            .await
    }

    /// Deletes an article. `None` uses the chained article id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if no id is available.
    pub async fn delete(&self, id: impl Into<Option<u64>>) -> Result<HttpResponse, ResourceError> {
        self.base.delete(id.into()).await
    }

    /// Sets the article's source locale.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if `locale` is empty or no
    /// id is available.
    pub async fn update_source_locale(
        &self,
        id: impl Into<Option<u64>>,
        locale: &str,
    ) -> Result<HttpResponse, ResourceError> {
        self.base.update_source_locale(id.into(), locale).await
    }

    /// Returns an attachments handle scoped to article `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidSubResource`] if articles have no
    /// attachments sub-resource.
    pub fn attachments(&self, id: u64) -> Result<ArticleAttachments<'a>, ResourceError> {
        let client = self.base.client();
        client.navigate(&ARTICLES, id, "article_attachments")?;
        Ok(ArticleAttachments::new(client))
    }

    /// Returns a labels handle scoped to article `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidSubResource`] if articles have no
    /// labels sub-resource.
    pub fn labels(&self, id: u64) -> Result<ArticleLabels<'a>, ResourceError> {
        let client = self.base.client();
        client.navigate(&ARTICLES, id, "article_labels")?;
        Ok(ArticleLabels::new(client))
    }
}
