//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SubpathConfig (validated, immutable)
//!     → routing::builder (alias table, language strategy)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::AliasConfig;
pub use schema::LanguageConfig;
pub use schema::ObservabilityConfig;
pub use schema::PrefixStrategy;
pub use schema::SubpathConfig;
