//! crates/logset/src/set.rs
//! The LogSet: gate state, sink binding, and the pause/resume wait gate.

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Condvar, Mutex, OnceLock, PoisonError};

use logset_sink::{LogSink, WriterSink};

use crate::gate::GateState;

/// State behind the pause/resume lock: the pause flag and the bound sink
/// live under one mutex so a sink swap bracketed by
/// [`pause`](LogSet::pause)/[`resume`](LogSet::resume) can never race an
/// in-flight write.
struct Inner {
    paused: bool,
    sink: Option<Box<dyn LogSink>>,
}

/// A self-contained set of logging gates and their destination.
///
/// A `LogSet` bundles the verbose and debug gates, the once-set `changed`
/// marker governing the fallback rule, an optional custom sink, and the
/// lock used for pause/resume. Large programs hold one per subsystem to
/// gate output independently; simple programs use the process-wide default
/// behind the crate's free functions.
///
/// # Gating
///
/// [`debug`](Self::debug) emits exactly when the debug gate is open.
/// [`verbose`](Self::verbose) emits when the verbose gate is open — or,
/// for a pristine set whose gates were never switched, when the debug gate
/// alone is open. Turning on debugging without ever touching the gates
/// still gets you verbose output; the first explicit transition (any of
/// the `log_*` methods, including re-asserting the off state) takes the
/// gates literally from then on, permanently.
///
/// # Concurrency
///
/// Any number of threads may emit concurrently; each line is written under
/// the set's lock so lines land intact, with no ordering promise across
/// threads. Gate switches are single atomic stores and are *not*
/// synchronised against concurrent emission — serialise configuration
/// changes yourself, typically by doing them during startup.
///
/// # Examples
///
/// ```
/// use logset::LogSet;
/// use logset_sink::CaptureSink;
///
/// let set = LogSet::new();
/// let capture = CaptureSink::new();
/// set.set_logger(Some(Box::new(capture.clone())));
///
/// set.log_debug();
/// logset::verbose!(set, "verbose is implied while debugging");
/// logset::debug!(set, "finished in {}ms", 12);
///
/// assert_eq!(capture.len(), 2);
/// ```
pub struct LogSet {
    /// Encoded [`GateState`]; both gates always change in one store.
    gates: AtomicU8,
    /// Set by the first gate transition, never cleared.
    changed: AtomicBool,
    inner: Mutex<Inner>,
    resumed: Condvar,
}

impl LogSet {
    /// Creates a pristine `LogSet`: both gates closed, fallback rule armed,
    /// no sink bound, not paused.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            gates: AtomicU8::new(GateState::None.as_u8()),
            changed: AtomicBool::new(false),
            inner: Mutex::new(Inner {
                paused: false,
                sink: None,
            }),
            resumed: Condvar::new(),
        }
    }

    /// Returns the current state of the gate pair.
    #[must_use]
    pub fn gate_state(&self) -> GateState {
        GateState::from_u8(self.gates.load(Ordering::Relaxed))
    }

    /// Reports whether any gate transition has run on this set.
    ///
    /// Once true the fallback rule is disabled and [`verbose`](Self::verbose)
    /// consults the verbose gate literally. This never reverts to false.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.changed.load(Ordering::Relaxed)
    }

    /// Turns on verbose logging (verbose messages are emitted, debugging
    /// messages are not).
    pub fn log_verbose(&self) {
        self.switch(GateState::Verbose);
    }

    /// Turns on debugging log messages (both verbose and debugging
    /// messages are emitted).
    pub fn log_debug(&self) {
        self.switch(GateState::Debug);
    }

    /// Turns off both verbose and debug logging.
    pub fn log_none(&self) {
        self.switch(GateState::None);
    }

    /// Turns on debugging messages only (verbose messages are not
    /// emitted).
    pub fn log_debug_only(&self) {
        self.switch(GateState::DebugOnly);
    }

    /// Writes the gate pair directly, leaving the fallback rule armed.
    ///
    /// This is the integration point for command-line flag binding: parsed
    /// `--verbose`/`--debug` switches land in the same gate fields as the
    /// transitions above, but without marking the set as changed. A set
    /// configured only through flags therefore keeps the
    /// debug-implies-verbose fallback.
    pub fn apply_flags(&self, verbose: bool, debug: bool) {
        self.gates
            .store(GateState::from_flags(verbose, debug).as_u8(), Ordering::Relaxed);
    }

    /// Logs a message if verbose messages are turned on.
    ///
    /// On a pristine set the debug gate alone also opens this path; see the
    /// type-level docs for the fallback rule. When gated off the call
    /// returns immediately without formatting or touching the lock. May
    /// block while the set is [paused](Self::pause).
    pub fn verbose(&self, args: fmt::Arguments<'_>) {
        let state = self.gate_state();
        if state.verbose() || (!self.has_changed() && state.debug()) {
            self.write(args);
        }
    }

    /// Logs a message if debugging messages are turned on.
    ///
    /// Consults the debug gate literally; the fallback rule never applies
    /// here. When gated off the call returns immediately. May block while
    /// the set is [paused](Self::pause).
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        if self.gate_state().debug() {
            self.write(args);
        }
    }

    /// Replaces the sink used for emitted lines.
    ///
    /// `None` reverts to the process default destination (standard error).
    /// Takes effect for subsequent emissions; a write already in flight
    /// holds the lock until it completes and is unaffected. To swap a
    /// sink's underlying destination without losing lines, bracket the
    /// swap with [`pause`](Self::pause) and [`resume`](Self::resume).
    pub fn set_logger(&self, sink: Option<Box<dyn LogSink>>) {
        self.lock_inner().sink = sink;
    }

    /// Pauses logging: emission on this set blocks until
    /// [`resume`](Self::resume) is called.
    ///
    /// Aside from being an excellent source of deadlocks, this allows log
    /// destinations to be rotated without losing lines:
    ///
    /// ```
    /// use logset::LogSet;
    /// use logset_sink::WriterSink;
    ///
    /// fn change_log_file(set: &LogSet, file: std::fs::File) {
    ///     set.pause();
    ///     set.set_logger(Some(Box::new(WriterSink::new(file))));
    ///     set.resume();
    /// }
    /// ```
    ///
    /// # Panics
    ///
    /// `pause` and `resume` must be called in strict alternation starting
    /// with `pause`; pausing an already paused set panics. This edge is
    /// deliberate — guarding against unbalanced calls would require exactly
    /// the locking discipline this primitive already is. A `pause` never
    /// matched by a `resume` blocks every future emission on the set, also
    /// by design: guarantee the pairing on every exit path, including error
    /// paths.
    pub fn pause(&self) {
        let mut inner = self.lock_inner();
        assert!(!inner.paused, "LogSet::pause called on an already paused set");
        inner.paused = true;
    }

    /// Resumes logging, waking every emitter blocked by
    /// [`pause`](Self::pause). Call it promptly after pausing.
    ///
    /// # Panics
    ///
    /// Panics when the set is not paused; see [`pause`](Self::pause) for
    /// the pairing contract.
    pub fn resume(&self) {
        let mut inner = self.lock_inner();
        assert!(inner.paused, "LogSet::resume called on a set that is not paused");
        inner.paused = false;
        self.resumed.notify_all();
    }

    /// Stores a gate transition and disarms the fallback rule.
    fn switch(&self, state: GateState) {
        self.gates.store(state.as_u8(), Ordering::Relaxed);
        self.changed.store(true, Ordering::Relaxed);
    }

    /// Writes one line through the bound sink, waiting out any pause.
    fn write(&self, args: fmt::Arguments<'_>) {
        let mut inner = self.lock_inner();
        while inner.paused {
            inner = self
                .resumed
                .wait(inner)
                .unwrap_or_else(PoisonError::into_inner);
        }
        match inner.sink.as_deref() {
            Some(sink) => sink.write_line(args),
            None => default_sink().write_line(args),
        }
    }

    /// Acquires the pause/sink lock, surviving poisoning: a panicked
    /// emitter must not silence every other thread for good.
    fn lock_inner(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LogSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("LogSet");
        debug
            .field("gate_state", &self.gate_state())
            .field("changed", &self.has_changed());
        // Avoid blocking inside Debug when the lock is contended or paused.
        if let Ok(inner) = self.inner.try_lock() {
            debug
                .field("paused", &inner.paused)
                .field("has_sink", &inner.sink.is_some());
        }
        debug.finish_non_exhaustive()
    }
}

/// The process default destination: a newline-terminated stderr sink.
fn default_sink() -> &'static WriterSink<io::Stderr> {
    static DEFAULT_SINK: OnceLock<WriterSink<io::Stderr>> = OnceLock::new();
    DEFAULT_SINK.get_or_init(WriterSink::stderr)
}
