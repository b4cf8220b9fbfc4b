#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logset-sink/src/lib.rs
//!
//! # Overview
//!
//! `logset-sink` provides the write capability consumed by the `logset`
//! facade: a destination that accepts an already-formatted line and puts it
//! somewhere (a file, a console stream, an in-memory buffer, a tracing
//! subscriber). The facade decides *whether* a message is emitted; a sink
//! decides *where* the line goes and what to do when the destination
//! misbehaves.
//!
//! # Design
//!
//! The crate exposes the [`LogSink`] trait, a single infallible
//! `write_line` operation taking [`std::fmt::Arguments`]. Sinks take
//! `&self` and provide their own interior mutability so a shared facade can
//! be written to from any number of threads. Three implementations ship
//! here:
//!
//! - [`WriterSink`], a mutex-guarded wrapper around any
//!   [`std::io::Write`] implementor, with [`LineMode`] controlling the
//!   trailing newline.
//! - [`CaptureSink`], a cheaply clonable in-memory recorder used by tests
//!   to assert on emitted lines.
//! - `TracingSink` (behind the `tracing` feature), which forwards each line
//!   as a `tracing` event.
//!
//! # Invariants
//!
//! - [`LogSink::write_line`] never reports failure to the caller; the
//!   failure policy (drop, panic, retry) belongs to the sink
//!   implementation.
//! - A sink serialises its own writes, so concurrent callers never observe
//!   a line interleaved character-by-character.
//! - [`LineMode::WithNewline`] is the default everywhere: the facade is
//!   line-oriented.
//!
//! # Errors
//!
//! None. I/O errors raised by an underlying writer are discarded by
//! [`WriterSink`]; a sink with a different policy implements [`LogSink`]
//! itself.
//!
//! # Examples
//!
//! Collect lines into a buffer and inspect them:
//!
//! ```
//! use logset_sink::{CaptureSink, LogSink};
//!
//! let sink = CaptureSink::new();
//! sink.write_line(format_args!("copied {} files", 3));
//!
//! assert_eq!(sink.lines(), vec!["copied 3 files".to_string()]);
//! ```
//!
//! # See also
//!
//! - The `logset` crate for the gating facade that drives these sinks.

mod capture;
mod line_mode;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_sink;
mod writer;

pub use capture::CaptureSink;
pub use line_mode::LineMode;
pub use sink::LogSink;
#[cfg(feature = "tracing")]
pub use tracing_sink::TracingSink;
pub use writer::WriterSink;
