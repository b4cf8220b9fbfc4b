//! crates/logset/src/flags.rs
//! Command-line binding for the two gates (feature `clap`).
//!
//! This is glue around the state machine, not part of it: parsed switches
//! are written straight into the gate fields via
//! [`LogSet::apply_flags`], bypassing the `log_*` transitions. The set is
//! therefore not marked as changed, and a program configured only through
//! its command line keeps the debug-implies-verbose fallback.

use crate::set::LogSet;

/// `--verbose`/`--debug` switches for embedding in a clap command line.
///
/// Flatten the struct into a parser, then apply the parsed pair to a set:
///
/// ```
/// use clap::Parser;
/// use logset::{GateFlags, LogSet};
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     gates: GateFlags,
/// }
///
/// let cli = Cli::parse_from(["prog", "--debug"]);
/// let set = LogSet::new();
/// cli.gates.apply(&set);
///
/// assert!(set.gate_state().debug());
/// assert!(!set.has_changed());
/// ```
#[derive(Clone, Copy, Debug, Default, clap::Args)]
pub struct GateFlags {
    /// Log verbosely.
    #[arg(long)]
    pub verbose: bool,

    /// Log debugging messages.
    #[arg(long)]
    pub debug: bool,
}

impl GateFlags {
    /// Writes the parsed pair into `set`'s gates.
    ///
    /// The `log_*` transitions may still be called afterwards to change
    /// behaviour at runtime; they overwrite the flag-derived state.
    pub fn apply(&self, set: &LogSet) {
        set.apply_flags(self.verbose, self.debug);
    }

    /// Writes the parsed pair into the process default set's gates.
    pub fn apply_to_default(&self) {
        self.apply(crate::default_set());
    }
}
