//! Resource descriptors and the generic CRUD base.
//!
//! Each Help Center resource type is described by a static
//! [`ResourceDescriptor`]: its envelope key, collection, route overrides,
//! which operations are locale-scoped, and which sub-resources it has. Model
//! types tie themselves to their descriptor through [`RestResource`].
//!
//! [`Resource`] implements the generic operations once (`find_all`, `find`,
//! `create`, `update`, `delete`, `update_source_locale`). The per-resource
//! handles in [`resources`](crate::rest::resources) wrap a `Resource` and
//! override only the operations they specialize.
//!
//! # Example
//!
//! ```rust,ignore
//! use help_center::rest::resources::{NewCategory, NewSection};
//!
//! let categories = client.categories();
//! categories.create(&NewCategory::new("Billing")).await?;
//!
//! // The category id from the response is chained into the section route.
//! client.sections().create(&NewSection::new("Invoices")).await?;
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::clients::{HttpRequest, HttpResponse, RestClient};
use crate::rest::resources::ListParams;
use crate::rest::{
    PathParams, RequestBuilder, ResolvedRoute, ResourceError, ResourceOperation, RouteTemplate,
};

/// The kinds of resource an id can belong to.
///
/// Used as the key of the [`ChainContext`](crate::rest::ChainContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    /// A Help Center article.
    Article,
    /// A section within a category.
    Section,
    /// A top-level category.
    Category,
    /// A label attached to an article.
    ArticleLabel,
    /// A file attached to an article.
    ArticleAttachment,
}

impl ResourceKind {
    /// Returns the kind's name in snake case.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Section => "section",
            Self::Category => "category",
            Self::ArticleLabel => "article_label",
            Self::ArticleAttachment => "article_attachment",
        }
    }

    /// Returns the kind a path placeholder refers to.
    ///
    /// `id` refers to the resource being routed (`own`); parent placeholders
    /// name their kind. Other placeholders, such as `locale`, are not ids.
    #[must_use]
    pub fn for_placeholder(placeholder: &str, own: Self) -> Option<Self> {
        match placeholder {
            "id" => Some(own),
            "articleId" => Some(Self::Article),
            "sectionId" => Some(Self::Section),
            "categoryId" => Some(Self::Category),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static metadata for one resource type.
#[derive(Debug)]
pub struct ResourceDescriptor {
    /// Type name used in error messages (e.g. `Articles`).
    pub name: &'static str,
    /// The kind ids of this resource are recorded under.
    pub kind: ResourceKind,
    /// Envelope key for request and response bodies (e.g. `article`).
    pub object_name: &'static str,
    /// Collection segment of the default prefix (e.g. `articles`).
    pub collection: &'static str,
    /// Response key of list results (e.g. `articles`).
    pub list_key: &'static str,
    /// Routes that override or extend the defaults.
    pub routes: &'static [RouteTemplate],
    /// Whether the generic CRUD routes apply to this resource.
    pub inherits_defaults: bool,
    /// Operations routed through `help_center/<locale>/<collection>` when a
    /// locale is set.
    pub locale_scoped: &'static [ResourceOperation],
    /// Sub-resource keys reachable from this resource.
    pub sub_resources: &'static [(&'static str, ResourceKind)],
}

impl ResourceDescriptor {
    /// Returns the default path prefix (e.g. `help_center/articles`).
    #[must_use]
    pub fn resource_name(&self) -> String {
        format!("help_center/{}", self.collection)
    }

    /// Returns the qualified operation name used in errors and logs.
    #[must_use]
    pub fn operation_name(&self, operation: ResourceOperation) -> String {
        format!("{}::{}", self.name, operation.as_str())
    }

    /// Returns `true` if `operation` is routed through the locale prefix.
    #[must_use]
    pub fn is_locale_scoped(&self, operation: ResourceOperation) -> bool {
        self.locale_scoped.contains(&operation)
    }

    /// Returns the kind registered under `key`, if any.
    #[must_use]
    pub fn sub_resource(&self, key: &str) -> Option<ResourceKind> {
        self.sub_resources
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, kind)| *kind)
    }

    /// Returns the body field used by source-locale updates.
    #[must_use]
    pub fn source_locale_field(&self) -> String {
        format!("{}_locale", self.object_name)
    }
}

/// A model type returned by a Help Center resource.
///
/// # Example
///
/// ```rust
/// use help_center::rest::RestResource;
/// use help_center::rest::resources::Section;
///
/// assert_eq!(Section::DESCRIPTOR.object_name, "section");
/// ```
pub trait RestResource: DeserializeOwned + Send + Sync {
    /// The descriptor of the resource this model belongs to.
    const DESCRIPTOR: &'static ResourceDescriptor;
}

/// Generic operations shared by every resource handle.
///
/// Operations return the transport's response unchanged; decode the model
/// with [`HttpResponse::resource`] using the descriptor's object name, or use
/// the typed helpers [`Resource::decode`] and [`Resource::decode_list`].
pub struct Resource<'a, R: RestResource> {
    client: &'a RestClient,
    locale: Option<String>,
    _model: PhantomData<fn() -> R>,
}

impl<R: RestResource> fmt::Debug for Resource<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("resource", &R::DESCRIPTOR.name)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl<R: RestResource> Clone for Resource<'_, R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client,
            locale: self.locale.clone(),
            _model: PhantomData,
        }
    }
}

impl<'a, R: RestResource> Resource<'a, R> {
    /// Creates a handle bound to `client` with no locale.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self {
            client,
            locale: None,
            _model: PhantomData,
        }
    }

    /// Returns the client this handle sends through.
    #[must_use]
    pub const fn client(&self) -> &'a RestClient {
        self.client
    }

    /// Returns the resource's descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &'static ResourceDescriptor {
        R::DESCRIPTOR
    }

    /// Returns the locale set on this handle.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Sets the locale used by locale-scoped routes.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = Some(locale.into());
    }

    /// Removes the locale from this handle.
    pub fn clear_locale(&mut self) {
        self.locale = None;
    }

    /// Returns the handle's locale, or `inline` when given.
    ///
    /// An inline locale applies to one call only.
    #[must_use]
    pub fn effective_locale<'l>(&'l self, inline: Option<&'l str>) -> Option<&'l str> {
        inline
            .filter(|l| !l.is_empty())
            .or_else(|| self.locale().filter(|l| !l.is_empty()))
    }

    /// Returns the qualified name of `operation` for this resource.
    #[must_use]
    pub fn operation_name(&self, operation: ResourceOperation) -> String {
        R::DESCRIPTOR.operation_name(operation)
    }

    /// Resolves the route for `operation`, using the client's chain context.
    ///
    /// # Errors
    ///
    /// See [`resolve`](crate::rest::resolve).
    pub fn resolve(
        &self,
        operation: ResourceOperation,
        params: &PathParams,
        locale: Option<&str>,
    ) -> Result<ResolvedRoute, ResourceError> {
        self.client.resolve(R::DESCRIPTOR, operation, params, locale)
    }

    /// Sends a built request and records the id of anything it created.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] if the transport fails.
    pub async fn dispatch(
        &self,
        route: &ResolvedRoute,
        request: HttpRequest,
    ) -> Result<HttpResponse, ResourceError> {
        let descriptor = R::DESCRIPTOR;
        let response = self
            .client
            .send(&descriptor.operation_name(route.operation), request)
            .await?;

        if route.operation.creates() {
            if let Some(id) = response.id_of(descriptor.object_name) {
                self.client.record_id(descriptor.kind, id);
            }
        }

        Ok(response)
    }

    /// Resolves, wraps `fields` under `envelope`, and sends.
    ///
    /// # Errors
    ///
    /// Returns any validation, serialization, or transport error.
    pub async fn send_json<T: Serialize + ?Sized>(
        &self,
        operation: ResourceOperation,
        params: &PathParams,
        locale: Option<&str>,
        envelope: &str,
        fields: &T,
    ) -> Result<HttpResponse, ResourceError> {
        let route = self.resolve(operation, params, locale)?;
        let request = RequestBuilder::new(&route)
            .envelope(envelope, fields)?
            .build()?;
        self.dispatch(&route, request).await
    }

    /// Lists resources.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the route cannot be resolved or the
    /// transport fails.
    pub async fn find_all(&self, params: &ListParams) -> Result<HttpResponse, ResourceError> {
        self.find_all_with(&PathParams::new(), params).await
    }

    /// Lists resources with explicit path parameters (e.g. a parent id).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the route cannot be resolved or the
    /// transport fails.
    pub async fn find_all_with(
        &self,
        path_params: &PathParams,
        params: &ListParams,
    ) -> Result<HttpResponse, ResourceError> {
        let route = self.resolve(ResourceOperation::FindAll, path_params, self.locale())?;
        let request = RequestBuilder::new(&route).query(params)?.build()?;
        self.dispatch(&route, request).await
    }

    /// Finds one resource. `id` falls back to the chained id of this kind.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if no id is available.
    pub async fn find(&self, id: Option<u64>) -> Result<HttpResponse, ResourceError> {
        let params = PathParams::new().with_opt("id", id);
        let route = self.resolve(ResourceOperation::Find, &params, self.locale())?;
        let request = RequestBuilder::new(&route).build()?;
        self.dispatch(&route, request).await
    }

    /// Creates a resource with `fields` wrapped in the object envelope.
    ///
    /// The id in the response is recorded in the chain context.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the route cannot be resolved, the fields
    /// cannot be serialized, or the transport fails.
    pub async fn create<T: Serialize + ?Sized>(
        &self,
        params: &PathParams,
        fields: &T,
    ) -> Result<HttpResponse, ResourceError> {
        self.send_json(
            ResourceOperation::Create,
            params,
            self.locale(),
            R::DESCRIPTOR.object_name,
            fields,
        )
        .await
    }

    /// Updates a resource. `id` falls back to the chained id of this kind.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if no id is available, the fields cannot be
    /// serialized, or the transport fails.
    pub async fn update<T: Serialize + ?Sized>(
        &self,
        id: Option<u64>,
        fields: &T,
    ) -> Result<HttpResponse, ResourceError> {
        let params = PathParams::new().with_opt("id", id);
        self.send_json(
            ResourceOperation::Update,
            &params,
            self.locale(),
            R::DESCRIPTOR.object_name,
            fields,
        )
        .await
    }

    /// Deletes a resource. `id` falls back to the chained id of this kind.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if no id is available.
    pub async fn delete(&self, id: Option<u64>) -> Result<HttpResponse, ResourceError> {
        self.delete_with(&PathParams::new().with_opt("id", id)).await
    }

    /// Deletes a resource addressed by explicit path parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if a placeholder cannot be
    /// filled.
    pub async fn delete_with(&self, params: &PathParams) -> Result<HttpResponse, ResourceError> {
        let route = self.resolve(ResourceOperation::Delete, params, self.locale())?;
        let request = RequestBuilder::new(&route).build()?;
        self.dispatch(&route, request).await
    }

    /// Changes the source locale with a flat `{"<object>_locale": locale}`
    /// body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameters`] if `locale` is empty or no
    /// id is available.
    pub async fn update_source_locale(
        &self,
        id: Option<u64>,
        locale: &str,
    ) -> Result<HttpResponse, ResourceError> {
        let descriptor = R::DESCRIPTOR;
        RequestBuilder::ensure_present(
            &descriptor.operation_name(ResourceOperation::UpdateSourceLocale),
            &[("locale", !locale.is_empty())],
        )?;

        let params = PathParams::new().with_opt("id", id);
        let route = self.resolve(ResourceOperation::UpdateSourceLocale, &params, None)?;
        let mut body = serde_json::Map::new();
        body.insert(descriptor.source_locale_field(), json!(locale));
        let request = RequestBuilder::new(&route)
            .flat_body(body.into())
            .build()?;
        self.dispatch(&route, request).await
    }

    /// Decodes the single model in a response.
    #[must_use]
    pub fn decode(response: &HttpResponse) -> Option<R> {
        response.resource(R::DESCRIPTOR.object_name)
    }

    /// Decodes the model list in a response.
    #[must_use]
    pub fn decode_list(response: &HttpResponse) -> Option<Vec<R>> {
        response.resources(R::DESCRIPTOR.list_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::{Category, ARTICLES, ARTICLE_ATTACHMENTS};

    #[test]
    fn test_placeholder_kinds() {
        assert_eq!(
            ResourceKind::for_placeholder("id", ResourceKind::Section),
            Some(ResourceKind::Section)
        );
        assert_eq!(
            ResourceKind::for_placeholder("articleId", ResourceKind::ArticleLabel),
            Some(ResourceKind::Article)
        );
        assert_eq!(
            ResourceKind::for_placeholder("categoryId", ResourceKind::Section),
            Some(ResourceKind::Category)
        );
        assert_eq!(
            ResourceKind::for_placeholder("locale", ResourceKind::Article),
            None
        );
    }

    #[test]
    fn test_descriptor_names() {
        assert_eq!(ARTICLES.resource_name(), "help_center/articles");
        assert_eq!(
            ARTICLES.operation_name(ResourceOperation::Create),
            "Articles::create"
        );
        assert_eq!(ARTICLES.source_locale_field(), "article_locale");
        assert!(ARTICLES.is_locale_scoped(ResourceOperation::Find));
        assert!(!ARTICLES.is_locale_scoped(ResourceOperation::Delete));
    }

    #[test]
    fn test_sub_resource_lookup() {
        assert_eq!(
            ARTICLES.sub_resource("article_labels"),
            Some(ResourceKind::ArticleLabel)
        );
        assert_eq!(ARTICLES.sub_resource("sections"), None);
        assert_eq!(ARTICLE_ATTACHMENTS.sub_resource("labels"), None);
    }

    #[test]
    fn test_decode_uses_descriptor_keys() {
        let single = HttpResponse::ok(json!({"category": {"id": 7, "name": "FAQ"}}));
        let category = Resource::<Category>::decode(&single).unwrap();
        assert_eq!(category.id, Some(7));

        let list = HttpResponse::ok(json!({"categories": [{"id": 1}, {"id": 2}]}));
        assert_eq!(Resource::<Category>::decode_list(&list).unwrap().len(), 2);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ResourceKind::ArticleAttachment.to_string(), "article_attachment");
    }
}
