//! crates/logset-sink/src/sink.rs
//! The write capability consumed by the logging facade.

use std::fmt;

/// A destination for formatted log lines.
///
/// A sink receives the already-formatted payload of one message and writes
/// it somewhere. The trait is deliberately small: the facade has decided
/// the message should be emitted before a sink ever sees it, so a sink has
/// no gating responsibilities and no way to veto a line.
///
/// # Contract
///
/// - `write_line` is infallible from the caller's point of view. Whatever
///   the sink does about a failing destination (drop the line, panic, queue
///   a retry) is its own policy and must not leak back to the emitter.
/// - Implementations take `&self` and are `Send + Sync`; a sink shared by
///   many threads serialises its own writes so each line lands intact.
///
/// # Examples
///
/// A sink that counts lines instead of storing them:
///
/// ```
/// use std::fmt;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use logset_sink::LogSink;
///
/// #[derive(Default)]
/// struct CountingSink(AtomicUsize);
///
/// impl LogSink for CountingSink {
///     fn write_line(&self, _args: fmt::Arguments<'_>) {
///         self.0.fetch_add(1, Ordering::Relaxed);
///     }
/// }
///
/// let sink = CountingSink::default();
/// sink.write_line(format_args!("one"));
/// sink.write_line(format_args!("two"));
/// assert_eq!(sink.0.load(Ordering::Relaxed), 2);
/// ```
pub trait LogSink: Send + Sync {
    /// Writes one formatted line to the destination.
    fn write_line(&self, args: fmt::Arguments<'_>);
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn write_line(&self, args: fmt::Arguments<'_>) {
        (**self).write_line(args);
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn write_line(&self, args: fmt::Arguments<'_>) {
        (**self).write_line(args);
    }
}

impl<S: LogSink + ?Sized> LogSink for std::sync::Arc<S> {
    fn write_line(&self, args: fmt::Arguments<'_>) {
        (**self).write_line(args);
    }
}
