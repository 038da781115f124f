//! Section resource implementation.
//!
//! Sections live inside a category. They are created under
//! `help_center/categories/{categoryId}/sections.json`; when `categoryId` is
//! not given, the last category created or navigated into is used.
//!
//! With a locale set, `findAll`, `find` and `update` go through
//! `help_center/<locale>/sections`.
//!
//! # Example
//!
//! ```rust,ignore
//! use help_center::rest::resources::{NewCategory, NewSection};
//!
//! client.categories().create(&NewCategory::new("Billing")).await?;
//! client.sections().create(&NewSection::new("Invoices")).await?;
//! // POST help_center/categories/<new category id>/sections.json
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpResponse, RestClient};
use crate::rest::resources::{Articles, ListParams};
use crate::rest::{
    PathParams, Resource, ResourceDescriptor, ResourceError, ResourceKind, ResourceOperation,
    RestResource, RouteTemplate,
};
use crate::HttpMethod;

const ROUTES: &[RouteTemplate] = &[
    RouteTemplate::new(
        ResourceOperation::Create,
        HttpMethod::Post,
        "help_center/categories/{categoryId}/sections.json",
    ),
    RouteTemplate::new(
        ResourceOperation::UpdateSourceLocale,
        HttpMethod::Put,
        "{resource}/{id}/source_locale.json",
    ),
];

/// Descriptor of the section resource.
pub static SECTIONS: ResourceDescriptor = ResourceDescriptor {
    name: "Sections",
    kind: ResourceKind::Section,
    object_name: "section",
    collection: "sections",
    list_key: "sections",
    routes: ROUTES,
    inherits_defaults: true,
    locale_scoped: &[
        ResourceOperation::FindAll,
        ResourceOperation::Find,
        ResourceOperation::Update,
    ],
    sub_resources: &[("articles", ResourceKind::Article)],
};

/// A Help Center section.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Section {
    /// The unique identifier of the section.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The category the section belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,

    /// The parent section, for nested sections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_section_id: Option<u64>,

    /// The section name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The section description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The locale the section is displayed in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// The locale the section was originally written in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_locale: Option<String>,

    /// Position within the category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// Default sort order of the section's articles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<String>,

    /// Whether the displayed translation is outdated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdated: Option<bool>,

    /// API URL of the section.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub url: Option<String>,

    /// Help Center URL of the section.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub html_url: Option<String>,

    /// When the section was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the section was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Section {
    const DESCRIPTOR: &'static ResourceDescriptor = &SECTIONS;
}

/// Fields for creating a section.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct NewSection {
    /// The category to create the section in. Routing only; taken from the
    /// chain when absent.
    #[serde(skip)]
    pub category_id: Option<u64>,

    /// The section name.
    pub name: String,

    /// The section description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The section's locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Position within the category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// Parent section, for nested sections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_section_id: Option<u64>,
}

impl NewSection {
    /// Creates the fields for a section called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the category explicitly.
    #[must_use]
    pub const fn category_id(mut self, category_id: u64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Fields for updating a section.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct SectionUpdate {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// Move the section to another category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
}

/// Operations on sections.
#[derive(Debug, Clone)]
pub struct Sections<'a> {
    base: Resource<'a, Section>,
}

impl<'a> Sections<'a> {
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

    /// Lists sections.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] if the request fails.
    pub async fn find_all(&self, params: &ListParams) -> Result<HttpResponse, ResourceError> {
        self.base.find_all(params).await
    }

    /// Finds a section. `None` uses the chained section id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if no id is available.
    pub async fn find(&self, id: impl Into<Option<u64>>) -> Result<HttpResponse, ResourceError> {
        self.base.find(id.into()).await
    }

    /// Creates a section under a category and chains its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] naming `categoryId` if the
    /// section has no category and none is chained.
    pub async fn create(&self, section: &NewSection) -> Result<HttpResponse, ResourceError> {
        let params = PathParams::new().with_opt("categoryId", section.category_id);
        self.base.create(&params, section).await
    }

    /// Updates a section. `None` uses the chained section id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if no id is available.
    pub async fn update(
        &self,
        id: impl Into<Option<u64>>,
        fields: &SectionUpdate,
    ) -> Result<HttpResponse, ResourceError> {
        self.base.update(id.into(), fields).await
    }

    /// Deletes a section. `None` uses the chained section id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if no id is available.
    pub async fn delete(&self, id: impl Into<Option<u64>>) -> Result<HttpResponse, ResourceError> {
        self.base.delete(id.into()).await
    }

    /// Sets the section's source locale.
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

    /// Returns an articles handle scoped to section `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidSubResource`] if sections have no
    /// articles sub-resource.
    pub fn articles(&self, id: u64) -> Result<Articles<'a>, ResourceError> {
        let client = self.base.client();
        client.navigate(&SECTIONS, id, "articles")?;
        Ok(Articles::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::MockTransport;
    use crate::rest::ChainContext;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_new_section_keeps_category_out_of_body() {
        let fields = NewSection::new("Invoices").category_id(3);
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({"name": "Invoices"})
        );
    }

    #[tokio::test]
    async fn test_create_with_explicit_category() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(json!({"section": {"id": 30}}));
        let client = RestClient::with_transport(transport.clone())
            .with_chain(ChainContext::new().with_parent(ResourceKind::Category, 1));

        client
            .sections()
            .create(&NewSection::new("B").category_id(2))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.path, "help_center/categories/2/sections.json");
        assert_eq!(request.body, Some(json!({"section": {"name": "B"}})));
        assert_eq!(client.last_id(ResourceKind::Section), Some(30));
    }

    #[tokio::test]
    async fn test_create_without_category_fails_before_sending() {
        let transport = Arc::new(MockTransport::new());
        let client = RestClient::with_transport(transport.clone());

        let error = client
            .sections()
            .create(&NewSection::new("B"))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            ResourceError::MissingParameters { ref operation, ref missing }
                if operation == "Sections::create" && missing == &vec!["categoryId".to_string()]
        ));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_ignores_locale_prefix() {
        let transport = Arc::new(MockTransport::new());
        let client = RestClient::with_transport(transport.clone());

        client
            .sections()
            .with_locale("de")
            .create(&NewSection::new("B").category_id(2))
            .await
            .unwrap();

        assert_eq!(
            transport.last_request().unwrap().path,
            "help_center/categories/2/sections.json"
        );
    }

    #[tokio::test]
    async fn test_update_uses_locale_prefix() {
        let transport = Arc::new(MockTransport::new());
        let client = RestClient::with_transport(transport.clone());

        let fields = SectionUpdate {
            position: Some(1),
            ..Default::default()
        };
        client
            .sections()
            .with_locale("de")
            .update(8, &fields)
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.http_method, HttpMethod::Put);
        assert_eq!(request.path, "help_center/de/sections/8.json");
        assert_eq!(request.body, Some(json!({"section": {"position": 1}})));
    }

    #[tokio::test]
    async fn test_find_all_sends_list_params() {
        let transport = Arc::new(MockTransport::new());
        let client = RestClient::with_transport(transport.clone());

        let params = ListParams {
            per_page: Some(25),
            ..Default::default()
        };
        client.sections().find_all(&params).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.path, "help_center/sections.json");
        assert_eq!(request.query_value("per_page"), Some("25"));
    }

    #[tokio::test]
    async fn test_update_source_locale_uses_chained_section() {
        let transport = Arc::new(MockTransport::new());
        let client = RestClient::with_transport(transport.clone())
            .with_chain(ChainContext::new().with_parent(ResourceKind::Section, 12));

        client
            .sections()
            .update_source_locale(None, "ja")
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.path, "help_center/sections/12/source_locale.json");
        assert_eq!(request.body, Some(json!({"section_locale": "ja"})));
    }

    #[tokio::test]
    async fn test_update_source_locale_without_id_fails() {
        let transport = Arc::new(MockTransport::new());
        let client = RestClient::with_transport(transport.clone());

        let error = client
            .sections()
            .update_source_locale(None, "de")
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            ResourceError::MissingParameters { ref operation, ref missing }
                if operation == "Sections::updateSourceLocale"
                    && missing == &vec!["id".to_string()]
        ));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_update_source_locale_empty_locale_sends_nothing() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(json!({}));
        let client = RestClient::with_transport(transport.clone());
        let sections = client.sections();

        sections.update_source_locale(7, "de").await.unwrap();
        let error = sections.update_source_locale(7, "").await.unwrap_err();

        assert_eq!(
            error.to_string(),
            "Missing parameters for Sections::updateSourceLocale: locale"
        );
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn test_articles_navigation_records_section() {
        let client = RestClient::with_transport(Arc::new(MockTransport::new()));
        client.sections().articles(44).unwrap();

        assert_eq!(client.last_id(ResourceKind::Section), Some(44));
    }
}
