//! Language prefix stripping strategies.

use crate::language::{LanguagePrefixProvider, RequestContext};
use crate::routing::segments;

/// Strips a leading language segment from a raw request path.
///
/// Implementations return a path with one leading slash and no trailing
/// slash.
pub trait StripLanguagePrefix: Send + Sync {
    fn strip_language_prefix(&self, raw_path: &str) -> String;
}

impl<T: StripLanguagePrefix + ?Sized> StripLanguagePrefix for &T {
    fn strip_language_prefix(&self, raw_path: &str) -> String {
        (**self).strip_language_prefix(raw_path)
    }
}

impl<T: StripLanguagePrefix + ?Sized> StripLanguagePrefix for Box<T> {
    fn strip_language_prefix(&self, raw_path: &str) -> String {
        (**self).strip_language_prefix(raw_path)
    }
}

/// No language awareness; only normalizes slashes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLanguagePrefix;

impl StripLanguagePrefix for NoLanguagePrefix {
    fn strip_language_prefix(&self, raw_path: &str) -> String {
        segments::normalize(raw_path)
    }
}

/// Drops the first segment only if it equals some language's configured
/// prefix.
///
/// A path whose first segment matches no prefix comes back unchanged
/// (normalized), including single-segment paths.
#[derive(Debug, Clone)]
pub struct MatchingLanguagePrefix<P> {
    provider: P,
}

impl<P: LanguagePrefixProvider> MatchingLanguagePrefix<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: LanguagePrefixProvider> StripLanguagePrefix for MatchingLanguagePrefix<P> {
    fn strip_language_prefix(&self, raw_path: &str) -> String {
        let trimmed = segments::trim_slashes(raw_path);
        let (first, rest) = trimmed.split_once('/').unwrap_or((trimmed, ""));
        if first.is_empty() {
            return "/".to_string();
        }

        let matched = self
            .provider
            .languages()
            .iter()
            .any(|l| !l.prefix.is_empty() && l.prefix == first);

        if matched {
            tracing::trace!(prefix = %first, path = %raw_path, "Stripped language prefix");
            segments::normalize(rest)
        } else {
            segments::normalize(trimmed)
        }
    }
}

/// Drops the first segment whenever the current language has a prefix,
/// without checking that the segment is that prefix.
#[derive(Debug, Clone)]
pub struct CurrentLanguagePrefix<P, C> {
    provider: P,
    context: C,
}

impl<P: LanguagePrefixProvider, C: RequestContext> CurrentLanguagePrefix<P, C> {
    pub fn new(provider: P, context: C) -> Self {
        Self { provider, context }
    }
}

impl<P: LanguagePrefixProvider, C: RequestContext> StripLanguagePrefix
    for CurrentLanguagePrefix<P, C>
{
    fn strip_language_prefix(&self, raw_path: &str) -> String {
        let trimmed = segments::trim_slashes(raw_path);
        let language_id = self.context.current_language_id();
        let has_prefix = self
            .provider
            .prefix_for_language(&language_id)
            .is_some_and(|p| !p.is_empty());

        if !has_prefix {
            return segments::normalize(trimmed);
        }

        let rest = trimmed.split_once('/').map_or("", |(_, rest)| rest);
        tracing::trace!(language = %language_id, path = %raw_path, "Dropped leading segment");
        segments::normalize(rest)
    }
}
