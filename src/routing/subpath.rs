//! Sub-path alias resolution.
//!
//! # Responsibilities
//! - Resolve `/alias/extra/segments` by finding the deepest aliased ancestor
//! - Do the same for outbound links, canonical → alias
//! - Skip paths that an earlier processor already rewrote
//!
//! # Design Decisions
//! - Stateless per call; shareable across threads when collaborators are
//! - Fails open: no aliased ancestor means the path comes back unchanged
//! - A single-segment path is never delegated (it has no ancestor)
//! - Delegate errors are returned as-is

use crate::alias::AliasResolver;
use crate::language::{NoLanguagePrefix, StripLanguagePrefix};
use crate::observability::metrics::{self, Direction, Outcome};
use crate::routing::options::OutboundOptions;
use crate::routing::segments;

/// Resolves sub-paths of aliased paths in both directions.
#[derive(Debug, Clone)]
pub struct SubpathResolver<R, S = NoLanguagePrefix> {
    aliases: R,
    language: S,
    metrics_enabled: bool,
}

impl<R: AliasResolver> SubpathResolver<R> {
    /// Create a resolver with no language prefix handling.
    pub fn new(aliases: R) -> Self {
        Self {
            aliases,
            language: NoLanguagePrefix,
            metrics_enabled: true,
        }
    }
}

impl<R: AliasResolver, S: StripLanguagePrefix> SubpathResolver<R, S> {
    /// Swap in a language prefix strategy for the inbound guard.
    pub fn with_language_prefix<T: StripLanguagePrefix>(self, language: T) -> SubpathResolver<R, T> {
        SubpathResolver {
            aliases: self.aliases,
            language,
            metrics_enabled: self.metrics_enabled,
        }
    }

    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.metrics_enabled = enabled;
        self
    }

    /// The underlying exact-match resolver.
    pub fn aliases(&self) -> &R {
        &self.aliases
    }

    /// Resolve an incoming path to its canonical form.
    ///
    /// `request_path` is the path the request originally arrived with. If,
    /// once its language prefix is stripped, it no longer equals `path`, an
    /// earlier stage has rewritten the path and it is returned untouched.
    pub fn resolve_inbound(&self, path: &str, request_path: &str) -> Result<String, R::Error> {
        let bare = self.language.strip_language_prefix(request_path);
        if bare != path {
            tracing::debug!(
                path = %path,
                request_path = %request_path,
                "Path already processed, skipping sub-path lookup"
            );
            self.record(Direction::Inbound, Outcome::ShortCircuit, 0);
            return Ok(path.to_string());
        }

        let aliases = &self.aliases;
        self.peel(Direction::Inbound, path, |prefix| {
            aliases.resolve_inbound_alias(prefix)
        })
    }

    /// Resolve a canonical path to its user-facing form for link generation.
    ///
    /// The same `options` handle is passed to every alias lookup.
    pub fn resolve_outbound(
        &self,
        path: &str,
        options: &mut OutboundOptions,
    ) -> Result<String, R::Error> {
        if options.absolute {
            self.record(Direction::Outbound, Outcome::Absolute, 0);
            return Ok(path.to_string());
        }

        let aliases = &self.aliases;
        self.peel(Direction::Outbound, path, |prefix| {
            aliases.resolve_outbound_alias(prefix, options)
        })
    }

    /// Peel trailing segments one at a time and ask `delegate` about the
    /// remaining prefix until it answers with something else.
    fn peel<F>(&self, direction: Direction, path: &str, mut delegate: F) -> Result<String, R::Error>
    where
        F: FnMut(&str) -> Result<String, R::Error>,
    {
        let mut remainder = segments::split(path);
        let mut peeled: Vec<&str> = Vec::with_capacity(remainder.len());
        let mut calls = 0u64;

        while let Some(last) = remainder.pop() {
            peeled.push(last);
            if remainder.is_empty() {
                break;
            }

            let prefix = segments::join(&remainder);
            calls += 1;
            let resolved = delegate(&prefix)?;
            if resolved != prefix {
                peeled.reverse();
                let result = format!("{}/{}", resolved.trim_end_matches('/'), peeled.join("/"));
                tracing::debug!(
                    direction = %direction,
                    path = %path,
                    prefix = %prefix,
                    resolved = %result,
                    delegate_calls = calls,
                    "Resolved sub-path"
                );
                self.record(direction, Outcome::Matched, calls);
                return Ok(result);
            }
        }

        tracing::trace!(direction = %direction, path = %path, delegate_calls = calls, "No aliased ancestor");
        self.record(direction, Outcome::Unmatched, calls);
        Ok(path.to_string())
    }

    fn record(&self, direction: Direction, outcome: Outcome, delegate_calls: u64) {
        if self.metrics_enabled {
            metrics::record_resolution(direction, outcome, delegate_calls);
        }
    }
}
