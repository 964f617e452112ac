//! Sub-path alias resolution.
//!
//! Resolves paths below an aliased path: with `/content/first-node` aliased
//! to `/node/1`, `/content/first-node/edit` resolves to `/node/1/edit`, and
//! links to `/node/1/edit` render as `/content/first-node/edit`.

pub mod alias;
pub mod config;
pub mod language;
pub mod observability;
pub mod routing;

pub use alias::{AliasResolver, AliasTable};
pub use config::SubpathConfig;
pub use routing::{OutboundOptions, SubpathResolver};
