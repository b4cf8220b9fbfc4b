//! crates/logset-sink/src/tracing_sink.rs
//! Sink forwarding lines into the `tracing` ecosystem.
//!
//! This keeps the facade's two-gate surface while letting a program that
//! already runs a `tracing` subscriber collect the facade's output through
//! the same pipeline as its structured events.

use std::fmt;

use tracing::Level;

use crate::sink::LogSink;

/// Sink that re-emits each line as a `tracing` event.
///
/// Every line is forwarded under the `logset` target at the configured
/// [`Level`] (INFO by default). The facade has already applied its gating
/// by the time a line reaches the sink, so subscriber-side filtering is
/// additive: a line survives only if both the gate and the subscriber's
/// filter let it through.
///
/// # Examples
///
/// ```no_run
/// use logset_sink::{LogSink, TracingSink};
/// use tracing::Level;
///
/// let sink = TracingSink::with_level(Level::DEBUG);
/// sink.write_line(format_args!("rotating {}", "daemon.log"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TracingSink {
    level: Level,
}

impl TracingSink {
    /// Creates a sink that forwards lines as INFO events.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_level(Level::INFO)
    }

    /// Creates a sink forwarding lines at the given [`Level`].
    #[must_use]
    pub const fn with_level(level: Level) -> Self {
        Self { level }
    }

    /// Returns the [`Level`] used for forwarded events.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for TracingSink {
    fn write_line(&self, args: fmt::Arguments<'_>) {
        // The event macros require a const level, so dispatch per variant.
        match self.level {
            Level::ERROR => tracing::error!(target: "logset", "{args}"),
            Level::WARN => tracing::warn!(target: "logset", "{args}"),
            Level::INFO => tracing::info!(target: "logset", "{args}"),
            Level::DEBUG => tracing::debug!(target: "logset", "{args}"),
            Level::TRACE => tracing::trace!(target: "logset", "{args}"),
        }
    }
}
