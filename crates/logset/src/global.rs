//! crates/logset/src/global.rs
//! The process-wide default LogSet and its free-function wrappers.
//!
//! Simple programs that do not need per-subsystem gating use these
//! functions instead of carrying a [`LogSet`] around. They all delegate to
//! one `static` instance, constructed in its pristine state before first
//! use and never torn down. Programs that want independent gating
//! construct their own sets with [`LogSet::new`] and reserve the default
//! purely for convenience call sites.

use std::fmt;

use logset_sink::LogSink;

use crate::set::LogSet;

/// The default `LogSet` backing the crate's free functions.
static DEFAULT: LogSet = LogSet::new();

/// Returns the process-wide default [`LogSet`].
///
/// Useful when an API wants a `&LogSet` and the caller has not set up an
/// instance of its own.
#[must_use]
pub fn default_set() -> &'static LogSet {
    &DEFAULT
}

/// Returns the default set's two emission operations as standalone
/// callables.
///
/// Basic usage is to generate the pair once and use the returned functions
/// as needed:
///
/// ```
/// let capture = logset_sink::CaptureSink::new();
/// logset::set_logger(Some(Box::new(capture.clone())));
///
/// let (verbose, debug) = logset::generate();
///
/// // No logging is on by default.
/// verbose(format_args!("not logged"));
///
/// logset::log_debug();
/// debug(format_args!("debugging messages are logged"));
/// verbose(format_args!("verbose messages are, too"));
///
/// assert_eq!(capture.len(), 2);
/// # logset::set_logger(None);
/// ```
///
/// Binding the gates to command-line flags is a separate, explicit step:
/// parse a [`GateFlags`](crate::GateFlags) (behind the `clap` feature) and
/// apply it to the default set.
#[must_use]
pub fn generate() -> (
    impl Fn(fmt::Arguments<'_>),
    impl Fn(fmt::Arguments<'_>),
) {
    (
        |args: fmt::Arguments<'_>| DEFAULT.verbose(args),
        |args: fmt::Arguments<'_>| DEFAULT.debug(args),
    )
}

/// Turns on verbose logging on the default set
/// (verbose messages are emitted, debugging messages are not).
pub fn log_verbose() {
    DEFAULT.log_verbose();
}

/// Turns on debugging log messages on the default set
/// (both verbose and debugging messages are emitted).
pub fn log_debug() {
    DEFAULT.log_debug();
}

/// Turns off both verbose and debug logging on the default set.
pub fn log_none() {
    DEFAULT.log_none();
}

/// Turns on debugging messages only on the default set
/// (verbose messages are not emitted).
pub fn log_debug_only() {
    DEFAULT.log_debug_only();
}

/// Logs a message through the default set if verbose messages are turned
/// on. See [`LogSet::verbose`] for the fallback rule.
pub fn verbose(args: fmt::Arguments<'_>) {
    DEFAULT.verbose(args);
}

/// Logs a message through the default set if debugging messages are turned
/// on.
pub fn debug(args: fmt::Arguments<'_>) {
    DEFAULT.debug(args);
}

/// Replaces the default set's sink. `None` reverts to the process default
/// destination (standard error).
pub fn set_logger(sink: Option<Box<dyn LogSink>>) {
    DEFAULT.set_logger(sink);
}

/// Pauses logging on the default set. See [`LogSet::pause`] for the
/// pairing contract — it is as sharp-edged here as on any other set.
pub fn pause() {
    DEFAULT.pause();
}

/// Resumes logging on the default set. Call it promptly after [`pause`].
pub fn resume() {
    DEFAULT.resume();
}
