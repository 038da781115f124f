//! Help Center resource implementations.
//!
//! Each resource has a static descriptor, a model type, parameter types for
//! its writes, and a handle returned by [`RestClient`](crate::RestClient):
//!
//! | Handle                 | Descriptor              | Model          |
//! |------------------------|-------------------------|----------------|
//! | [`Articles`]           | [`ARTICLES`]            | [`Article`]    |
//! | [`Sections`]           | [`SECTIONS`]            | [`Section`]    |
//! | [`Categories`]         | [`CATEGORIES`]          | [`Category`]   |
//! | [`ArticleLabels`]      | [`ARTICLE_LABELS`]      | [`Label`]      |
//! | [`ArticleAttachments`] | [`ARTICLE_ATTACHMENTS`] | [`Attachment`] |
//!
//! # Chaining
//!
//! ```rust,ignore
//! use help_center::rest::resources::{NewCategory, NewSection};
//!
//! // POST help_center/categories.json
//! client.categories().create(&NewCategory::new("A")).await?;
//!
//! // POST help_center/categories/<id from the previous response>/sections.json
//! client.sections().create(&NewSection::new("B")).await?;
//! ```

mod article_attachments;
mod article_labels;
mod articles;
mod categories;
mod common;
mod sections;

pub use article_attachments::{ArticleAttachments, Attachment, ARTICLE_ATTACHMENTS};
pub use article_labels::{ArticleLabels, Label, NewLabel, ARTICLE_LABELS};
pub use articles::{Article, ArticleTranslation, Articles, NewArticle, Translation, ARTICLES};
pub use categories::{Categories, Category, CategoryUpdate, NewCategory, CATEGORIES};
pub use common::{ListParams, SortBy, SortOrder};
pub use sections::{NewSection, Section, SectionUpdate, Sections, SECTIONS};
