//! Resolver construction from configuration.

use crate::alias::AliasTable;
use crate::config::schema::{PrefixStrategy, SubpathConfig};
use crate::language::{
    CurrentLanguagePrefix, FixedLanguage, LanguageTable, MatchingLanguagePrefix, NoLanguagePrefix,
    StripLanguagePrefix,
};
use crate::routing::subpath::SubpathResolver;

/// Resolver with the language strategy chosen at runtime.
pub type ConfiguredResolver = SubpathResolver<AliasTable, Box<dyn StripLanguagePrefix>>;

/// Build the language prefix stripper selected by `config.language.strategy`.
///
/// `current_language` overrides `language.current` for the `current`
/// strategy.
pub fn build_language_prefix(
    config: &SubpathConfig,
    current_language: Option<&str>,
) -> Box<dyn StripLanguagePrefix> {
    let languages = LanguageTable::new(config.language.languages.clone());
    match config.language.strategy {
        PrefixStrategy::Matching => Box::new(MatchingLanguagePrefix::new(languages)),
        PrefixStrategy::Current => {
            let current = current_language
                .map(str::to_string)
                .or_else(|| config.language.current.clone())
                .unwrap_or_default();
            Box::new(CurrentLanguagePrefix::new(languages, FixedLanguage(current)))
        }
        PrefixStrategy::None => Box::new(NoLanguagePrefix),
    }
}

/// Build a ready resolver backed by the config's static alias table.
pub fn build_resolver(config: &SubpathConfig, current_language: Option<&str>) -> ConfiguredResolver {
    let aliases = AliasTable::from_config(&config.aliases);
    tracing::info!(
        aliases = aliases.len(),
        strategy = ?config.language.strategy,
        "Sub-path resolver ready"
    );

    SubpathResolver::new(aliases)
        .with_language_prefix(build_language_prefix(config, current_language))
        .with_metrics(config.observability.metrics_enabled)
}
