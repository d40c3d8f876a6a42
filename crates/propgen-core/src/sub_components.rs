//! Ordered set of sub-component tags seen for one component.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Sub-component tags in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubComponentRegistry {
    tags: IndexSet<String>,
}

impl SubComponentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tag; returns `false` if it was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.tags.insert(tag.into())
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Position of a tag in insertion order.
    #[must_use]
    pub fn position(&self, tag: &str) -> Option<usize> {
        self.tags.get_index_of(tag)
    }
}

impl<S: Into<String>> FromIterator<S> for SubComponentRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}
