//! Metrics collection.
//!
//! # Metrics
//! - `subpath_resolutions_total` (counter): resolutions by direction and
//!   outcome (`matched`, `unmatched`, `short_circuit`, `absolute`)
//! - `subpath_delegate_calls_total` (counter): alias lookups by direction
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the embedding application
//!   installs the exporter
//! - Without an installed recorder every call is a no-op

use metrics::counter;

/// Resolution direction, used as a metric label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Inbound => "inbound",
            Direction::Outbound => "outbound",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a resolution call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An ancestor prefix had an alias.
    Matched,
    /// No ancestor had an alias; path returned unchanged.
    Unmatched,
    /// Inbound guard tripped; path already rewritten upstream.
    ShortCircuit,
    /// Outbound link was absolute.
    Absolute,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Matched => "matched",
            Outcome::Unmatched => "unmatched",
            Outcome::ShortCircuit => "short_circuit",
            Outcome::Absolute => "absolute",
        }
    }
}

/// Record a finished resolution.
pub fn record_resolution(direction: Direction, outcome: Outcome, delegate_calls: u64) {
    counter!(
        "subpath_resolutions_total",
        "direction" => direction.as_str(),
        "outcome" => outcome.as_str()
    )
    .increment(1);

    if delegate_calls > 0 {
        counter!("subpath_delegate_calls_total", "direction" => direction.as_str())
            .increment(delegate_calls);
    }
}
