//! crates/logset-sink/src/writer.rs
//! Sink backed by an arbitrary `io::Write` implementor.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use crate::line_mode::LineMode;
use crate::sink::LogSink;

/// Streaming sink that renders formatted lines into an [`io::Write`]
/// target.
///
/// The writer is guarded by a mutex so concurrent emitters never interleave
/// within a line; relative ordering across threads is whatever the lock
/// hands out. Each write honours the configured [`LineMode`],
/// newline-terminated by default.
///
/// I/O errors from the underlying writer are discarded: the facade's
/// contract is that emission never fails from the caller's point of view,
/// and a best-effort console or file destination has nowhere useful to
/// report a short write anyway. Wrap the writer yourself before
/// constructing the sink if a different policy is needed.
///
/// # Examples
///
/// Collect lines into a [`Vec<u8>`] with newline terminators:
///
/// ```
/// use logset_sink::{LogSink, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.write_line(format_args!("scanned {} entries", 12));
/// sink.write_line(format_args!("done"));
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "scanned 12 entries\ndone\n");
/// ```
///
/// Render without trailing newlines:
///
/// ```
/// use logset_sink::{LineMode, LogSink, WriterSink};
///
/// let sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// sink.write_line(format_args!("ready"));
///
/// assert_eq!(sink.into_inner(), b"ready".to_vec());
/// ```
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
    line_mode: LineMode,
}

impl<W> WriterSink<W> {
    /// Creates a sink that appends a newline after each line.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            line_mode,
        }
    }

    /// Returns the configured [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterSink<io::Stderr> {
    /// Creates a newline-terminated sink writing to standard error.
    ///
    /// Standard error is the facade's process-wide default destination.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl WriterSink<io::Stdout> {
    /// Creates a newline-terminated sink writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> Default for WriterSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> LogSink for WriterSink<W>
where
    W: Write + Send,
{
    fn write_line(&self, args: fmt::Arguments<'_>) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let result = if self.line_mode.append_newline() {
            writeln!(writer, "{args}")
        } else {
            writer.write_fmt(args)
        };
        // Destination failures stay with the sink; emission never errors.
        let _ = result;
    }
}
