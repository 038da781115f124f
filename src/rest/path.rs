//! Route tables and path resolution for Help Center resources.
//!
//! Every resource owns a table of [`RouteTemplate`]s. A template is a path
//! pattern with `{placeholder}` tokens, for example
//! `help_center/{locale}/sections/{sectionId}/articles.json`. The token
//! `{resource}` is special: it expands to the resource's path prefix, which is
//! `help_center/<collection>` or, for locale-scoped operations with a locale
//! set, `help_center/<locale>/<collection>`.
//!
//! # Resolution
//!
//! [`resolve`] fills every placeholder from, in order:
//!
//! 1. the explicit [`PathParams`] passed by the caller
//! 2. the [`ChainContext`] entry for the resource kind the placeholder names
//!    (`articleId`, `sectionId`, `categoryId`, or `id` for the resource itself)
//!
//! `{locale}` is taken from the params or the locale argument and is never
//! chained. Every unresolved placeholder is reported in one
//! [`ResourceError::MissingParameters`].
//!
//! Resolution is a pure function of its arguments. The locale override is
//! passed in rather than stored on the descriptor, so a call can never leave a
//! modified prefix behind for the next one.
//!
//! # Example
//!
//! ```rust
//! use help_center::rest::{resolve, ChainContext, PathParams, ResourceKind, ResourceOperation};
//! use help_center::rest::resources::SECTIONS;
//!
//! let chain = ChainContext::new().with_parent(ResourceKind::Category, 12);
//! let route = resolve(&SECTIONS, ResourceOperation::Create, &PathParams::new(), &chain, None).unwrap();
//!
//! assert_eq!(route.path, "help_center/categories/12/sections.json");
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::clients::HttpMethod;
use crate::rest::{ChainContext, ResourceDescriptor, ResourceError, ResourceKind};

/// Operations that can be performed on a Help Center resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List resources (GET `{resource}.json`).
    FindAll,
    /// Find a single resource by ID (GET `{resource}/{id}.json`).
    Find,
    /// Create a new resource (POST `{resource}.json`).
    Create,
    /// Update an existing resource (PUT `{resource}/{id}.json`).
    Update,
    /// Delete a resource (DELETE `{resource}/{id}.json`).
    Delete,
    /// Change the source locale of a translatable resource.
    UpdateSourceLocale,
    /// Upload an attachment that is not yet tied to an article.
    CreateUnassociated,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::FindAll | Self::Find => HttpMethod::Get,
            Self::Create | Self::CreateUnassociated => HttpMethod::Post,
            Self::Update | Self::UpdateSourceLocale => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FindAll => "findAll",
            Self::Find => "find",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::UpdateSourceLocale => "updateSourceLocale",
            Self::CreateUnassociated => "createUnassociated",
        }
    }

    /// Returns `true` for operations whose response carries a new id.
    #[must_use]
    pub const fn creates(&self) -> bool {
        matches!(self, Self::Create | Self::CreateUnassociated)
    }
}

/// A route for one operation of one resource.
///
/// # Example
///
/// ```rust
/// use help_center::rest::{ResourceOperation, RouteTemplate};
/// use help_center::HttpMethod;
///
/// const ARTICLE_CREATE: RouteTemplate = RouteTemplate::new(
///     ResourceOperation::Create,
///     HttpMethod::Post,
///     "help_center/{locale}/sections/{sectionId}/articles.json",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTemplate {
    /// The operation this route is used for.
    pub operation: ResourceOperation,
    /// The HTTP method for this route.
    pub http_method: HttpMethod,
    /// The path template with `{placeholder}` tokens.
    pub template: &'static str,
}

impl RouteTemplate {
    /// Creates a new `RouteTemplate`.
    #[must_use]
    pub const fn new(
        operation: ResourceOperation,
        http_method: HttpMethod,
        template: &'static str,
    ) -> Self {
        Self {
            operation,
            http_method,
            template,
        }
    }

    /// Returns the placeholder names of this template, in order.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&'static str> {
        segments(self.template)
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name),
                Segment::Literal(_) => None,
            })
            .collect()
    }
}

/// Generic CRUD routes shared by resources that inherit defaults.
pub const DEFAULT_ROUTES: &[RouteTemplate] = &[
    RouteTemplate::new(ResourceOperation::FindAll, HttpMethod::Get, "{resource}.json"),
    RouteTemplate::new(ResourceOperation::Find, HttpMethod::Get, "{resource}/{id}.json"),
    RouteTemplate::new(ResourceOperation::Create, HttpMethod::Post, "{resource}.json"),
    RouteTemplate::new(ResourceOperation::Update, HttpMethod::Put, "{resource}/{id}.json"),
    RouteTemplate::new(ResourceOperation::Delete, HttpMethod::Delete, "{resource}/{id}.json"),
];

/// Explicit path parameters for one call.
///
/// Empty values count as absent, so the resolver falls through to the chain
/// context for them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathParams {
    values: BTreeMap<String, String>,
}

impl PathParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.values.insert(key.into(), value.to_string());
        self
    }

    /// Adds a parameter if `value` is `Some`.
    #[must_use]
    pub fn with_opt<V: Display>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Returns the value for `key`, ignoring empty strings.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// The outcome of resolving a route: a concrete method and path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// The operation that was resolved.
    pub operation: ResourceOperation,
    /// The HTTP method to use.
    pub http_method: HttpMethod,
    /// The path relative to the API base path.
    pub path: String,
}

/// Looks up the route for an operation.
///
/// The descriptor's own routes win over [`DEFAULT_ROUTES`]; the defaults are
/// only consulted when the descriptor inherits them.
///
/// # Errors
///
/// Returns [`ResourceError::RouteNotFound`] if neither table has the operation.
pub fn find_route(
    descriptor: &ResourceDescriptor,
    operation: ResourceOperation,
) -> Result<&RouteTemplate, ResourceError> {
    let inherited: &[RouteTemplate] = if descriptor.inherits_defaults {
        DEFAULT_ROUTES
    } else {
        &[]
    };

    descriptor
        .routes
        .iter()
        .chain(inherited)
        .find(|route| route.operation == operation)
        .ok_or(ResourceError::RouteNotFound {
            resource: descriptor.name,
            operation: operation.as_str(),
        })
}

/// Returns the path prefix `{resource}` expands to for one call.
#[must_use]
pub fn resource_prefix(
    descriptor: &ResourceDescriptor,
    operation: ResourceOperation,
    locale: Option<&str>,
) -> String {
    match locale.filter(|l| !l.is_empty()) {
        Some(locale) if descriptor.is_locale_scoped(operation) => format!(
            "help_center/{}/{}",
            urlencoding::encode(locale),
            descriptor.collection
        ),
        _ => descriptor.resource_name(),
    }
}

/// Resolves the route for `operation` into a concrete path.
///
/// # Errors
///
/// Returns [`ResourceError::RouteNotFound`] if the resource has no route for
/// the operation, or [`ResourceError::MissingParameters`] naming every
/// placeholder that neither `params` nor `chain` could fill.
pub fn resolve(
    descriptor: &ResourceDescriptor,
    operation: ResourceOperation,
    params: &PathParams,
    chain: &ChainContext,
    locale: Option<&str>,
) -> Result<ResolvedRoute, ResourceError> {
    let route = find_route(descriptor, operation)?;
    let locale = locale.filter(|l| !l.is_empty());

    let mut path = String::with_capacity(route.template.len() + 32);
    let mut missing: Vec<String> = Vec::new();

    for segment in segments(route.template) {
        match segment {
            Segment::Literal(text) => path.push_str(text),
            Segment::Placeholder("resource") => {
                path.push_str(&resource_prefix(descriptor, operation, locale));
            }
            Segment::Placeholder(name) => {
                match placeholder_value(name, descriptor.kind, params, chain, locale) {
                    Some(value) => path.push_str(&urlencoding::encode(&value)),
                    None if !missing.iter().any(|m| m == name) => missing.push(name.to_string()),
                    None => {}
                }
            }
        }
    }

    if !missing.is_empty() {
        return Err(ResourceError::MissingParameters {
            operation: descriptor.operation_name(operation),
            missing,
        });
    }

    Ok(ResolvedRoute {
        operation,
        http_method: route.http_method,
        path,
    })
}

fn placeholder_value(
    name: &str,
    own_kind: ResourceKind,
    params: &PathParams,
    chain: &ChainContext,
    locale: Option<&str>,
) -> Option<String> {
    if let Some(value) = params.get(name) {
        return Some(value.to_string());
    }
    if name == "locale" {
        return locale.map(str::to_string);
    }
    ResourceKind::for_placeholder(name, own_kind)
        .and_then(|kind| chain.last_id(kind))
        .map(|id| id.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'t> {
    Literal(&'t str),
    Placeholder(&'t str),
}

/// Splits a template into literal text and `{name}` placeholders.
///
/// An unmatched `{` is kept as literal text.
fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            break;
        };
        if open > 0 {
            out.push(Segment::Literal(&rest[..open]));
        }
        out.push(Segment::Placeholder(&rest[open + 1..close]));
        rest = &rest[close + 1..];
    }
    if !rest.is_empty() {
        out.push(Segment::Literal(rest));
    }

    out
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<RouteTemplate>();
    assert_send_sync::<ResolvedRoute>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const THINGS_ROUTES: &[RouteTemplate] = &[RouteTemplate::new(
        ResourceOperation::Create,
        HttpMethod::Post,
        "help_center/{locale}/sections/{sectionId}/things.json",
    )];

    static THINGS: ResourceDescriptor = ResourceDescriptor {
        name: "Things",
        kind: ResourceKind::Article,
        object_name: "thing",
        collection: "things",
        list_key: "things",
        routes: THINGS_ROUTES,
        inherits_defaults: true,
        locale_scoped: &[ResourceOperation::Find],
        sub_resources: &[],
    };

    static BARE: ResourceDescriptor = ResourceDescriptor {
        name: "Bare",
        kind: ResourceKind::ArticleAttachment,
        object_name: "bare",
        collection: "bare",
        list_key: "bare",
        routes: &[],
        inherits_defaults: false,
        locale_scoped: &[],
        sub_resources: &[],
    };

    #[test]
    fn test_segments_split_literals_and_placeholders() {
        assert_eq!(
            segments("{resource}/{id}.json"),
            vec![
                Segment::Placeholder("resource"),
                Segment::Literal("/"),
                Segment::Placeholder("id"),
                Segment::Literal(".json"),
            ]
        );
        assert_eq!(segments("plain/{open"), vec![Segment::Literal("plain/{open")]);
    }

    #[test]
    fn test_route_template_lists_placeholders() {
        assert_eq!(THINGS_ROUTES[0].placeholders(), vec!["locale", "sectionId"]);
    }

    #[test]
    fn test_override_wins_over_default() {
        let route = find_route(&THINGS, ResourceOperation::Create).unwrap();
        assert_eq!(route.template, "help_center/{locale}/sections/{sectionId}/things.json");

        let route = find_route(&THINGS, ResourceOperation::Delete).unwrap();
        assert_eq!(route.template, "{resource}/{id}.json");
    }

    #[test]
    fn test_route_not_found_without_inherited_defaults() {
        let result = find_route(&BARE, ResourceOperation::Update);
        assert!(matches!(
            result,
            Err(ResourceError::RouteNotFound { resource: "Bare", operation: "update" })
        ));
    }

    #[test]
    fn test_explicit_param_wins_over_chain() {
        let chain = ChainContext::new().with_parent(ResourceKind::Article, 1);
        let params = PathParams::new().with("id", 99);

        let route = resolve(&THINGS, ResourceOperation::Find, &params, &chain, None).unwrap();
        assert_eq!(route.path, "help_center/things/99.json");
        assert_eq!(route.http_method, HttpMethod::Get);
    }

    #[test]
    fn test_chained_value_fills_missing_placeholder() {
        let chain = ChainContext::new().with_parent(ResourceKind::Section, 5);
        let params = PathParams::new().with("locale", "en-us");

        let route = resolve(&THINGS, ResourceOperation::Create, &params, &chain, None).unwrap();
        assert_eq!(route.path, "help_center/en-us/sections/5/things.json");
    }

    #[test]
    fn test_all_missing_placeholders_reported_together() {
        let result = resolve(
            &THINGS,
            ResourceOperation::Create,
            &PathParams::new(),
            &ChainContext::new(),
            None,
        );

        match result {
            Err(ResourceError::MissingParameters { operation, missing }) => {
                assert_eq!(operation, "Things::create");
                assert_eq!(missing, vec!["locale", "sectionId"]);
            }
            other => panic!("expected MissingParameters, got {other:?}"),
        }
    }

    #[test]
    fn test_locale_argument_fills_locale_placeholder_but_is_never_chained() {
        let chain = ChainContext::new().with_parent(ResourceKind::Section, 5);
        let route = resolve(
            &THINGS,
            ResourceOperation::Create,
            &PathParams::new(),
            &chain,
            Some("fr"),
        )
        .unwrap();
        assert_eq!(route.path, "help_center/fr/sections/5/things.json");
    }

    #[test]
    fn test_empty_param_counts_as_missing() {
        let params = PathParams::new().with("id", "");
        let result = resolve(
            &THINGS,
            ResourceOperation::Delete,
            &params,
            &ChainContext::new(),
            None,
        );

        assert!(matches!(
            result,
            Err(ResourceError::MissingParameters { missing, .. }) if missing == vec!["id"]
        ));
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let params = PathParams::new().with("locale", "en us/x").with("sectionId", 3);
        let route = resolve(
            &THINGS,
            ResourceOperation::Create,
            &params,
            &ChainContext::new(),
            None,
        )
        .unwrap();

        assert_eq!(route.path, "help_center/en%20us%2Fx/sections/3/things.json");
    }

    #[test]
    fn test_locale_prefix_only_for_scoped_operations() {
        let params = PathParams::new().with("id", 4);
        let chain = ChainContext::new();

        let find = resolve(&THINGS, ResourceOperation::Find, &params, &chain, Some("de")).unwrap();
        assert_eq!(find.path, "help_center/de/things/4.json");

        let delete =
            resolve(&THINGS, ResourceOperation::Delete, &params, &chain, Some("de")).unwrap();
        assert_eq!(delete.path, "help_center/things/4.json");
    }

    #[test]
    fn test_prefix_unchanged_after_success_and_failure() {
        let chain = ChainContext::new();
        let params = PathParams::new().with("id", 4);

        resolve(&THINGS, ResourceOperation::Find, &params, &chain, Some("de")).unwrap();
        assert_eq!(THINGS.resource_name(), "help_center/things");

        let failed = resolve(&THINGS, ResourceOperation::Find, &PathParams::new(), &chain, Some("de"));
        assert!(failed.is_err());
        assert_eq!(THINGS.resource_name(), "help_center/things");

        let next = resolve(&THINGS, ResourceOperation::Find, &params, &chain, None).unwrap();
        assert_eq!(next.path, "help_center/things/4.json");
    }

    #[test]
    fn test_operation_names_and_methods() {
        assert_eq!(ResourceOperation::FindAll.as_str(), "findAll");
        assert_eq!(
            ResourceOperation::UpdateSourceLocale.default_http_method(),
            HttpMethod::Put
        );
        assert!(ResourceOperation::CreateUnassociated.creates());
        assert!(!ResourceOperation::Update.creates());
    }
}
