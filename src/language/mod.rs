//! Language prefix awareness.
//!
//! # Data Flow
//! ```text
//! raw request path ("/fr/content/first-node/edit")
//!     → prefix.rs (strategy: matching | current | none)
//!         ↳ LanguagePrefixProvider (configured prefixes)
//!         ↳ RequestContext (current language, "current" strategy only)
//!     → bare path ("/content/first-node/edit")
//! ```
//!
//! # Design Decisions
//! - Collaborators are injected, never looked up globally
//! - Matching strategy is the default: it never drops a segment that is not
//!   a configured prefix
//! - Output always has one leading slash and no trailing slash

pub mod prefix;
pub mod table;

use serde::{Deserialize, Serialize};

pub use prefix::{
    CurrentLanguagePrefix, MatchingLanguagePrefix, NoLanguagePrefix, StripLanguagePrefix,
};
pub use table::{FixedLanguage, LanguageTable};

/// A configured language and its URL prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Language identifier (e.g. "en").
    pub id: String,

    /// URL prefix; empty means the language has no prefix.
    #[serde(default)]
    pub prefix: String,
}

impl Language {
    pub fn new(id: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prefix: prefix.into(),
        }
    }
}

/// Source of configured language prefixes.
pub trait LanguagePrefixProvider: Send + Sync {
    /// Prefix configured for `language_id`. `None` or an empty string means
    /// no prefix.
    fn prefix_for_language(&self, language_id: &str) -> Option<String>;

    /// All configured languages.
    fn languages(&self) -> Vec<Language>;
}

/// Per-request context.
pub trait RequestContext: Send + Sync {
    /// Identifier of the language negotiated for the current request.
    fn current_language_id(&self) -> String;
}
