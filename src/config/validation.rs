//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Alias and canonical paths are well-formed
//! - Language ids and prefixes are unambiguous
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SubpathConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{PrefixStrategy, SubpathConfig};
use crate::routing::segments;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} '{path}' must start with '/'")]
    MissingLeadingSlash { field: &'static str, path: String },

    #[error("{field} '{path}' contains an empty segment")]
    EmptySegment { field: &'static str, path: String },

    #[error("{field} '{path}' must not end with '/'")]
    TrailingSlash { field: &'static str, path: String },

    #[error("{field} must not be the root path")]
    RootPath { field: &'static str },

    #[error("alias '{0}' is registered more than once")]
    DuplicateAlias(String),

    #[error("language id '{0}' is configured more than once")]
    DuplicateLanguage(String),

    #[error("language prefix '{0}' is used by more than one language")]
    DuplicatePrefix(String),

    #[error("language prefix '{0}' must be a single path segment")]
    InvalidPrefix(String),

    #[error("strategy 'current' requires language.current to be set")]
    MissingCurrentLanguage,

    #[error("current language '{0}' is not configured")]
    UnknownCurrentLanguage(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &SubpathConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen_aliases = HashSet::new();
    for entry in &config.aliases {
        check_path("alias", &entry.alias, &mut errors);
        check_path("path", &entry.path, &mut errors);
        if !seen_aliases.insert(segments::normalize(&entry.alias)) {
            errors.push(ValidationError::DuplicateAlias(entry.alias.clone()));
        }
    }

    let language = &config.language;
    let mut ids = HashSet::new();
    let mut prefixes = HashSet::new();
    for lang in &language.languages {
        if !ids.insert(lang.id.as_str()) {
            errors.push(ValidationError::DuplicateLanguage(lang.id.clone()));
        }
        if lang.prefix.is_empty() {
            continue;
        }
        if lang.prefix.contains('/') {
            errors.push(ValidationError::InvalidPrefix(lang.prefix.clone()));
        }
        if !prefixes.insert(lang.prefix.as_str()) {
            errors.push(ValidationError::DuplicatePrefix(lang.prefix.clone()));
        }
    }

    if language.strategy == PrefixStrategy::Current {
        match &language.current {
            None => errors.push(ValidationError::MissingCurrentLanguage),
            Some(id) if !ids.contains(id.as_str()) => {
                errors.push(ValidationError::UnknownCurrentLanguage(id.clone()));
            }
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_path(field: &'static str, path: &str, errors: &mut Vec<ValidationError>) {
    if !path.starts_with('/') {
        errors.push(ValidationError::MissingLeadingSlash {
            field,
            path: path.to_string(),
        });
    }
    if segments::trim_slashes(path).is_empty() {
        errors.push(ValidationError::RootPath { field });
    } else if segments::has_empty_segment(path) {
        errors.push(ValidationError::EmptySegment {
            field,
            path: path.to_string(),
        });
    } else if path.ends_with('/') {
        errors.push(ValidationError::TrailingSlash {
            field,
            path: path.to_string(),
        });
    }
}
