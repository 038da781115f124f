//! Chained parameters between calls.
//!
//! A [`ChainContext`] remembers the last id seen for each [`ResourceKind`], so
//! that a nested call can omit its parent id:
//!
//! ```rust
//! use help_center::rest::{ChainContext, ResourceKind};
//!
//! let mut chain = ChainContext::new();
//! chain.record_id(ResourceKind::Category, 12);
//! chain.record_id(ResourceKind::Category, 13);
//!
//! assert_eq!(chain.last_id(ResourceKind::Category), Some(13));
//! assert_eq!(chain.last_id(ResourceKind::Section), None);
//! ```
//!
//! Only one id is kept per kind and the last write wins. Callers that create
//! siblings under different parents in interleaved order must pass parent ids
//! explicitly.

use std::collections::HashMap;

use crate::rest::{ResourceDescriptor, ResourceError, ResourceKind};

/// Last-known ids per resource kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainContext {
    ids: HashMap<ResourceKind, u64>,
}

impl ChainContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the context with `id` recorded for `kind`.
    ///
    /// Use this to build a deterministic chain in tests or before handing a
    /// context to [`RestClient::with_chain`](crate::clients::RestClient::with_chain).
    #[must_use]
    pub fn with_parent(mut self, kind: ResourceKind, id: u64) -> Self {
        self.record_id(kind, id);
        self
    }

    /// Records `id` as the last id for `kind`, replacing any previous one.
    pub fn record_id(&mut self, kind: ResourceKind, id: u64) {
        tracing::debug!(kind = %kind, id, "Recording chained id");
        self.ids.insert(kind, id);
    }

    /// Returns the last id recorded for `kind`.
    #[must_use]
    pub fn last_id(&self, kind: ResourceKind) -> Option<u64> {
        self.ids.get(&kind).copied()
    }

    /// Forgets every recorded id.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Returns the number of kinds with a recorded id.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Navigates from a parent resource into one of its sub-resources.
    ///
    /// Records `id` as the parent's id and returns the sub-resource's kind.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidSubResource`] if `sub_resource` is not
    /// registered on `parent`. Nothing is recorded in that case.
    pub fn navigate(
        &mut self,
        parent: &ResourceDescriptor,
        id: u64,
        sub_resource: &str,
    ) -> Result<ResourceKind, ResourceError> {
        let kind =
            parent
                .sub_resource(sub_resource)
                .ok_or_else(|| ResourceError::InvalidSubResource {
                    resource: parent.name,
                    sub_resource: sub_resource.to_string(),
                })?;
        self.record_id(parent.kind, id);
        Ok(kind)
    }
}
