//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use subpath_alias::alias::{AliasResolver, AliasTable};
use subpath_alias::routing::OutboundOptions;

/// The alias table used throughout the tests.
pub fn fixture_table() -> AliasTable {
    AliasTable::new()
        .with_alias("/content/first-node", "/node/1")
        .with_alias("/content/first-node-test", "/node/1/test")
        .with_alias("/malicious-path", "/admin")
}

/// Wraps an alias table and records every path it is asked about.
#[derive(Default)]
pub struct RecordingResolver {
    pub table: AliasTable,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl RecordingResolver {
    pub fn new(table: AliasTable) -> Self {
        Self {
            table,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }

    fn record(&self, path: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(path.to_string());
    }
}

impl AliasResolver for RecordingResolver {
    type Error = Infallible;

    fn resolve_inbound_alias(&self, alias_path: &str) -> Result<String, Self::Error> {
        self.record(alias_path);
        self.table.resolve_inbound_alias(alias_path)
    }

    fn resolve_outbound_alias(
        &self,
        canonical_path: &str,
        options: &mut OutboundOptions,
    ) -> Result<String, Self::Error> {
        self.record(canonical_path);
        self.table.resolve_outbound_alias(canonical_path, options)
    }
}

/// Storage failure raised by [`FailingResolver`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("alias storage unavailable for {0}")]
pub struct StorageError(pub String);

/// Fails every lookup for paths in `broken`, otherwise identity.
pub struct FailingResolver {
    pub broken: Vec<String>,
}

impl AliasResolver for FailingResolver {
    type Error = StorageError;

    fn resolve_inbound_alias(&self, alias_path: &str) -> Result<String, Self::Error> {
        if self.broken.iter().any(|b| b == alias_path) {
            return Err(StorageError(alias_path.to_string()));
        }
        Ok(alias_path.to_string())
    }

    fn resolve_outbound_alias(
        &self,
        canonical_path: &str,
        _options: &mut OutboundOptions,
    ) -> Result<String, Self::Error> {
        self.resolve_inbound_alias(canonical_path)
    }
}

/// Outbound resolver that tags every lookup on the shared options.
pub struct TaggingResolver {
    pub aliases: HashMap<String, String>,
}

impl AliasResolver for TaggingResolver {
    type Error = Infallible;

    fn resolve_inbound_alias(&self, alias_path: &str) -> Result<String, Self::Error> {
        Ok(alias_path.to_string())
    }

    fn resolve_outbound_alias(
        &self,
        canonical_path: &str,
        options: &mut OutboundOptions,
    ) -> Result<String, Self::Error> {
        options
            .metadata
            .add_cache_tags([format!("lookup:{canonical_path}")]);
        Ok(self
            .aliases
            .get(canonical_path)
            .cloned()
            .unwrap_or_else(|| canonical_path.to_string()))
    }
}
