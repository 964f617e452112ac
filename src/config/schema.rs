//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SubpathConfig {
    /// Language prefix handling for the inbound guard.
    pub language: LanguageConfig,

    /// Static exact-match alias table.
    pub aliases: Vec<AliasConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// How the inbound guard strips a language prefix from the request path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixStrategy {
    /// Drop the first segment only if it is a configured prefix.
    #[default]
    Matching,
    /// Drop the first segment whenever the current language has a prefix.
    Current,
    /// No language prefixes.
    None,
}

/// Language configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Prefix stripping strategy.
    pub strategy: PrefixStrategy,

    /// Current (negotiated) language id, used by the `current` strategy.
    pub current: Option<String>,

    /// Configured languages and their prefixes.
    pub languages: Vec<Language>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            strategy: PrefixStrategy::Matching,
            current: None,
            languages: Vec::new(),
        }
    }
}

/// One alias entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AliasConfig {
    /// User-facing path (e.g. "/content/first-node").
    pub alias: String,

    /// Canonical system path (e.g. "/node/1").
    pub path: String,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Record resolution metrics.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}
