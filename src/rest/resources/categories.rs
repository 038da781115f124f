//! Category resource implementation.
//!
//! Categories are the top level of the Help Center. They are locale-scoped:
//! with a locale set, `findAll`, `find`, `create` and `update` go through
//! `help_center/<locale>/categories`.
//!
//! # Example
//!
//! ```rust,ignore
//! use help_center::rest::resources::{CategoryUpdate, NewCategory};
//!
//! let categories = client.categories().with_locale("en-us");
//! let response = categories.create(&NewCategory::new("Billing")).await?;
//!
//! // The new id is chained, so `None` targets the category just created.
//! categories
//!     .update(None, &CategoryUpdate { position: Some(2), ..Default::default() })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpResponse, RestClient};
use crate::rest::resources::{ListParams, Sections};
use crate::rest::{
    PathParams, Resource, ResourceDescriptor, ResourceError, ResourceKind, ResourceOperation,
    RestResource, RouteTemplate,
};
use crate::HttpMethod;

const ROUTES: &[RouteTemplate] = &[RouteTemplate::new(
    ResourceOperation::UpdateSourceLocale,
    HttpMethod::Put,
    "{resource}/{id}/source_locale.json",
)];

/// Descriptor of the category resource.
pub static CATEGORIES: ResourceDescriptor = ResourceDescriptor {
    name: "Categories",
    kind: ResourceKind::Category,
    object_name: "category",
    collection: "categories",
    list_key: "categories",
    routes: ROUTES,
    inherits_defaults: true,
    locale_scoped: &[
        ResourceOperation::FindAll,
        ResourceOperation::Find,
        ResourceOperation::Create,
        ResourceOperation::Update,
    ],
    sub_resources: &[("sections", ResourceKind::Section)],
};

/// A Help Center category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Category {
    /// The unique identifier of the category.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The category name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The category description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The locale the category is displayed in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// The locale the category was originally written in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_locale: Option<String>,

    /// Position among sibling categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// Whether the displayed translation is outdated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdated: Option<bool>,

    /// API URL of the category.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub url: Option<String>,

    /// Help Center URL of the category.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub html_url: Option<String>,

    /// When the category was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the category was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Category {
    const DESCRIPTOR: &'static ResourceDescriptor = &CATEGORIES;
}

/// Fields for creating a category.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct NewCategory {
    /// The category name.
    pub name: String,

    /// The category description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The category's locale. Sent in the body; routing uses the handle's
    /// locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Position among sibling categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

impl NewCategory {
    /// Creates the fields for a category called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Fields for updating a category.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CategoryUpdate {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

/// Operations on categories.
#[derive(Debug, Clone)]
pub struct Categories<'a> {
    base: Resource<'a, Category>,
}

impl<'a> Categories<'a> {
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

    /// Lists categories.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] if the request fails.
    pub async fn find_all(&self, params: &ListParams) -> Result<HttpResponse, ResourceError> {
        self.base.find_all(params).await
    }

    /// Finds a category. `None` uses the chained category id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if no id is available.
    pub async fn find(&self, id: impl Into<Option<u64>>) -> Result<HttpResponse, ResourceError> {
        self.base.find(id.into()).await
    }

    /// Creates a category and chains its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if serialization or the request fails.
    pub async fn create(&self, category: &NewCategory) -> Result<HttpResponse, ResourceError> {
        self.base.create(&PathParams::new(), category).await
    }

    /// Updates a category. `None` uses the chained category id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if no id is available.
    pub async fn update(
        &self,
        id: impl Into<Option<u64>>,
        fields: &CategoryUpdate,
    ) -> Result<HttpResponse, ResourceError> {
        self.base.update(id.into(), fields).await
    }

    /// Deletes a category. `None` uses the chained category id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if no id is available.
    pub async fn delete(&self, id: impl Into<Option<u64>>) -> Result<HttpResponse, ResourceError> {
        self.base.delete(id.into()).await
    }

    /// Sets the category's source locale.
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

    /// Returns a sections handle scoped to category `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidSubResource`] if categories have no
    /// sections sub-resource.
    pub fn sections(&self, id: u64) -> Result<Sections<'a>, ResourceError> {
        let client = self.base.client();
        client.navigate(&CATEGORIES, id, "sections")?;
        Ok(Sections::new(client))
    }
}
