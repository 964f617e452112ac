//! Static in-memory alias table.

use std::collections::HashMap;
use std::convert::Infallible;

use crate::alias::AliasResolver;
use crate::config::schema::AliasConfig;
use crate::routing::options::OutboundOptions;
use crate::routing::segments;

/// Exact-match alias map built once from configuration.
///
/// Immutable after construction, so it can be shared across threads without
/// locks.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    /// alias -> canonical path
    inbound: HashMap<String, String>,
    /// canonical path -> alias (first registered alias wins)
    outbound: HashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `[[aliases]]` entries.
    pub fn from_config(aliases: &[AliasConfig]) -> Self {
        let mut table = Self::new();
        for entry in aliases {
            table.insert(&entry.alias, &entry.path);
        }
        table
    }

    /// Register `alias` for `canonical`.
    ///
    /// Both paths are stored normalized (`/a/b`), the form the subpath
    /// resolver looks prefixes up in. A canonical path can carry several
    /// aliases; outbound lookups keep returning the first one.
    pub fn insert(&mut self, alias: impl AsRef<str>, canonical: impl AsRef<str>) {
        let alias = segments::normalize(alias.as_ref());
        let canonical = segments::normalize(canonical.as_ref());
        self.outbound
            .entry(canonical.clone())
            .or_insert_with(|| alias.clone());
        self.inbound.insert(alias, canonical);
    }

    pub fn with_alias(mut self, alias: impl AsRef<str>, canonical: impl AsRef<str>) -> Self {
        self.insert(alias, canonical);
        self
    }

    pub fn len(&self) -> usize {
        self.inbound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inbound.is_empty()
    }
}

impl AliasResolver for AliasTable {
    type Error = Infallible;

    fn resolve_inbound_alias(&self, alias_path: &str) -> Result<String, Self::Error> {
        Ok(self
            .inbound
            .get(alias_path)
            .cloned()
            .unwrap_or_else(|| alias_path.to_string()))
    }

    /// Matched lookups tag the link with `path_alias:<alias>`.
    fn resolve_outbound_alias(
        &self,
        canonical_path: &str,
        options: &mut OutboundOptions,
    ) -> Result<String, Self::Error> {
        match self.outbound.get(canonical_path) {
            Some(alias) => {
                options
                    .metadata
                    .add_cache_tags([format!("path_alias:{alias}")]);
                Ok(alias.clone())
            }
            None => Ok(canonical_path.to_string()),
        }
    }
}
