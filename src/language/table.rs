//! Config-backed language collaborators.

use crate::language::{Language, LanguagePrefixProvider, RequestContext};

/// Language prefixes loaded from the `[language]` config section.
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    languages: Vec<Language>,
}

impl LanguageTable {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }
}

impl LanguagePrefixProvider for LanguageTable {
    fn prefix_for_language(&self, language_id: &str) -> Option<String> {
        self.languages
            .iter()
            .find(|l| l.id == language_id)
            .map(|l| l.prefix.clone())
    }

    fn languages(&self) -> Vec<Language> {
        self.languages.clone()
    }
}

/// Request context with a fixed negotiated language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLanguage(pub String);

impl FixedLanguage {
    pub fn new(language_id: impl Into<String>) -> Self {
        Self(language_id.into())
    }
}

impl RequestContext for FixedLanguage {
    fn current_language_id(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_lookup() {
        let table = LanguageTable::new(vec![Language::new("en", ""), Language::new("fr", "fr")]);
        assert_eq!(table.prefix_for_language("fr").as_deref(), Some("fr"));
        assert_eq!(table.prefix_for_language("en").as_deref(), Some(""));
        assert_eq!(table.prefix_for_language("de"), None);
        assert_eq!(table.languages().len(), 2);
    }

    #[test]
    fn test_fixed_language() {
        assert_eq!(FixedLanguage::new("fr").current_language_id(), "fr");
    }
}
