//! Exact-match alias resolution.
//!
//! # Responsibilities
//! - Translate an alias to its canonical path (inbound)
//! - Translate a canonical path to its alias (outbound)
//!
//! # Design Decisions
//! - Exact match only; sub-paths are the subpath resolver's job
//! - Identity when nothing is registered, never an error
//! - Lookup failures (storage, I/O) surface through the associated `Error`
//!   type and are handed back to the caller untouched

pub mod table;

use std::sync::Arc;

use crate::routing::options::OutboundOptions;

pub use table::AliasTable;

/// Exact-match bidirectional path aliasing.
pub trait AliasResolver: Send + Sync {
    /// Error raised by the underlying lookup.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return the canonical path for `alias_path`, or `alias_path` itself.
    fn resolve_inbound_alias(&self, alias_path: &str) -> Result<String, Self::Error>;

    /// Return the alias for `canonical_path`, or `canonical_path` itself.
    ///
    /// The resolver may record metadata on `options`.
    fn resolve_outbound_alias(
        &self,
        canonical_path: &str,
        options: &mut OutboundOptions,
    ) -> Result<String, Self::Error>;
}

impl<T: AliasResolver + ?Sized> AliasResolver for &T {
    type Error = T::Error;

    fn resolve_inbound_alias(&self, alias_path: &str) -> Result<String, Self::Error> {
        (**self).resolve_inbound_alias(alias_path)
    }

    fn resolve_outbound_alias(
        &self,
        canonical_path: &str,
        options: &mut OutboundOptions,
    ) -> Result<String, Self::Error> {
        (**self).resolve_outbound_alias(canonical_path, options)
    }
}

impl<T: AliasResolver + ?Sized> AliasResolver for Arc<T> {
    type Error = T::Error;

    fn resolve_inbound_alias(&self, alias_path: &str) -> Result<String, Self::Error> {
        (**self).resolve_inbound_alias(alias_path)
    }

    fn resolve_outbound_alias(
        &self,
        canonical_path: &str,
        options: &mut OutboundOptions,
    ) -> Result<String, Self::Error> {
        (**self).resolve_outbound_alias(canonical_path, options)
    }
}
