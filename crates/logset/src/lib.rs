#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logset/src/lib.rs
//!
//! # Overview
//!
//! `logset` is a minimal leveled-logging facade: two named severity gates
//! ("verbose" and "debug") in front of a line-oriented sink, toggleable at
//! runtime, optionally bound to command-line flags, and pausable so the
//! destination can be rotated without losing lines. There are exactly two
//! gates and no severity hierarchy beyond them — programs that need
//! structured logging want a different tool.
//!
//! Basic usage is to generate the default set's emission functions once
//! and use them as needed:
//!
//! ```
//! # let capture = logset_sink::CaptureSink::new();
//! # logset::set_logger(Some(Box::new(capture.clone())));
//! let (verbose, debug) = logset::generate();
//!
//! // No logging is on by default.
//! verbose(format_args!("this message is not logged"));
//! debug(format_args!("this one is not, either"));
//!
//! // Turn on debug logging: both gates open.
//! logset::log_debug();
//! debug(format_args!("debugging messages are logged"));
//! verbose(format_args!("verbose messages are, too"));
//!
//! // Turn on verbose logging only.
//! logset::log_verbose();
//! verbose(format_args!("verbose messages are logged"));
//! debug(format_args!("debugging messages are not"));
//!
//! # assert_eq!(capture.len(), 3);
//! # logset::set_logger(None);
//! ```
//!
//! Larger programs construct one [`LogSet`] per subsystem and gate each
//! independently; the [`verbose!`] and [`debug!`] macros keep printf-style
//! call sites:
//!
//! ```
//! use logset::LogSet;
//! use logset_sink::CaptureSink;
//!
//! let transfer_log = LogSet::new();
//! let capture = CaptureSink::new();
//! transfer_log.set_logger(Some(Box::new(capture.clone())));
//!
//! transfer_log.log_verbose();
//! logset::verbose!(transfer_log, "sent {} blocks", 42);
//! logset::debug!(transfer_log, "not emitted; debug gate is closed");
//!
//! assert_eq!(capture.lines(), vec!["sent 42 blocks".to_string()]);
//! ```
//!
//! # Design
//!
//! The whole crate is the [`LogSet`] state machine. The gate pair is one
//! of four states ([`GateState`]) held in a single atomic cell, so the two
//! booleans can never tear apart. A pristine set treats an open debug gate
//! as implying verbose output; the first explicit gate transition takes
//! the gates literally from then on (see [`LogSet::verbose`]). The sink is
//! an external collaborator behind the `logset-sink` crate's `LogSink`
//! trait; emission formats the line and hands it over, or falls back to
//! standard error when no sink is bound.
//!
//! [`LogSet::pause`] and [`LogSet::resume`] bracket sink rotation:
//! emitters block on a wait gate for the duration, so no line lands in a
//! half-rotated destination. The pairing contract is sharp-edged by
//! design; read the method docs before using it.
//!
//! # Invariants
//!
//! - The gate pair always equals the target of the most recent transition;
//!   there are no intermediate states.
//! - The fallback rule applies only while a set is pristine; any
//!   transition (including re-asserting the off state) disarms it
//!   permanently.
//! - An unbound sink never drops lines; emission falls back to the process
//!   default destination.
//! - Each emitted line is written under the set's lock and lands intact;
//!   ordering across threads is unspecified.
//!
//! # Errors
//!
//! None, deliberately. Gate control and emission always succeed from the
//! caller's point of view; destination failures stay with the sink
//! (`logset-sink` documents each implementation's policy). Pause/resume
//! misuse panics rather than returning an error — see [`LogSet::pause`].
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`GateState`].
//! - `clap`: [`GateFlags`], `--verbose`/`--debug` switches that write
//!   straight into a set's gates.
//! - `tracing`: enables `logset-sink`'s forwarding sink so facade output
//!   can join a tracing subscriber's pipeline.
//!
//! # See also
//!
//! - The `logset-sink` crate for the sink capability and its
//!   implementations.

mod gate;
mod global;
#[macro_use]
mod macros;
mod set;

#[cfg(feature = "clap")]
mod flags;

pub use gate::GateState;
pub use global::{
    debug, default_set, generate, log_debug, log_debug_only, log_none, log_verbose, pause, resume,
    set_logger, verbose,
};
pub use set::LogSet;

#[cfg(feature = "clap")]
pub use flags::GateFlags;
