//! Logging facilities for Horizon Datepicker.
//!
//! The picker is instrumented with the `tracing` crate. Nothing is printed
//! unless the embedding application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_datepicker::input=trace")
//!     .init();
//! ```

/// Span names used throughout Horizon Datepicker for tracing.
pub mod span_names {
    /// Deferred task processing span.
    pub const DEFERRED: &str = "horizon_datepicker::deferred";
    /// Keystroke handling span.
    pub const KEYSTROKE: &str = "horizon_datepicker::keystroke";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Picker state mutations (selected, cursor and active dates, panel).
    pub const STATE: &str = "horizon_datepicker::state";
    /// View registration and view switching.
    pub const REGISTRY: &str = "horizon_datepicker::registry";
    /// Text input buffer and parser decisions.
    pub const INPUT: &str = "horizon_datepicker::input";
    /// Keyboard, wheel and pointer navigation.
    pub const NAVIGATION: &str = "horizon_datepicker::navigation";
    /// Signal emission.
    pub const SIGNAL: &str = "horizon_datepicker::signal";
    /// Deferred task queue.
    pub const TASK: &str = "horizon_datepicker::task";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to bracket multi-step operations (a keystroke, a deferred flush) so
/// that the events they emit are grouped.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new span for `operation`.
    pub fn new(operation: &'static str) -> Self {
        let span = tracing::debug_span!(target: "horizon_datepicker::perf", "perf", operation);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new(span_names::DEFERRED);
    }

    #[test]
    fn test_targets_share_prefix() {
        for target in [
            targets::STATE,
            targets::REGISTRY,
            targets::INPUT,
            targets::NAVIGATION,
            targets::SIGNAL,
            targets::TASK,
        ] {
            assert!(target.starts_with("horizon_datepicker::"));
        }
    }
}
