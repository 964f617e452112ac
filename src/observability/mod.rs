//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Resolver, config loader:
//!     → logging.rs (structured log events)
//!     → metrics.rs (resolution and delegate-call counters)
//! ```
//!
//! # Design Decisions
//! - Structured logging for machine parsing
//! - Metrics are cheap (facade no-ops without a recorder)

pub mod logging;
pub mod metrics;
