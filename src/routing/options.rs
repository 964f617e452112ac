//! Link generation options.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Cacheability metadata collected while generating a link.
///
/// Alias resolvers add to it as they look paths up; the caller renders it
/// alongside the generated link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheMetadata {
    /// Cache tags the generated link depends on.
    pub cache_tags: BTreeSet<String>,
    /// Request-derived contexts that vary the generated link.
    pub cache_contexts: BTreeSet<String>,
}

impl CacheMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cache_tags<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cache_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn add_cache_contexts<I, S>(&mut self, contexts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cache_contexts.extend(contexts.into_iter().map(Into::into));
        self
    }

    /// Fold another set of metadata into this one.
    pub fn merge(&mut self, other: &CacheMetadata) -> &mut Self {
        self.cache_tags.extend(other.cache_tags.iter().cloned());
        self.cache_contexts.extend(other.cache_contexts.iter().cloned());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cache_tags.is_empty() && self.cache_contexts.is_empty()
    }
}

/// Options for outbound (link generation) resolution.
///
/// Passed by `&mut` through the subpath resolver to every alias lookup, so
/// metadata written by the alias resolver ends up with the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundOptions {
    /// Absolute/external links are never alias-rewritten.
    #[serde(default)]
    pub absolute: bool,

    /// Metadata bubbled up from alias lookups.
    #[serde(default)]
    pub metadata: CacheMetadata,
}

impl OutboundOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absolute() -> Self {
        Self {
            absolute: true,
            ..Self::default()
        }
    }
}
