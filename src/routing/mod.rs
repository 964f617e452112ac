//! Sub-path routing subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound (request dispatch):
//!     path, request path
//!     → language prefix stripped from request path (guard)
//!     → subpath.rs peels trailing segments
//!     → AliasResolver resolves the longest aliased ancestor
//!     → canonical ancestor + peeled segments
//!
//! Outbound (link generation):
//!     canonical path, &mut OutboundOptions
//!     → absolute links bypass
//!     → same peel loop against the outbound direction
//! ```
//!
//! # Design Decisions
//! - Prefix matching only over whole segments
//! - Deterministic: same input always resolves the same way
//! - Deepest aliased ancestor wins

pub mod builder;
pub mod options;
pub mod segments;
pub mod subpath;

pub use builder::{build_resolver, ConfiguredResolver};
pub use options::{CacheMetadata, OutboundOptions};
pub use subpath::SubpathResolver;
