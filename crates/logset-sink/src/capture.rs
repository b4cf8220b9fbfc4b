//! crates/logset-sink/src/capture.rs
//! In-memory sink for asserting on emitted lines in tests.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::sink::LogSink;

/// Sink that records every rendered line in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the facade
/// and keep another for assertions. Lines are stored without a trailing
/// newline; the capture is about payloads, not byte-exact framing.
///
/// # Examples
///
/// ```
/// use logset_sink::{CaptureSink, LogSink};
///
/// let sink = CaptureSink::new();
/// let observer = sink.clone();
///
/// sink.write_line(format_args!("rotated {}", "access.log"));
///
/// assert_eq!(observer.lines(), vec!["rotated access.log".to_string()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    /// Creates an empty capture sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every line recorded so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of recorded lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Reports whether no line has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards all recorded lines.
    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogSink for CaptureSink {
    fn write_line(&self, args: fmt::Arguments<'_>) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(args.to_string());
    }
}
