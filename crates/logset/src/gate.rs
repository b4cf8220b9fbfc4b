//! crates/logset/src/gate.rs
//! The four-state gate machine behind the verbose and debug switches.

/// Combined state of the verbose and debug gates.
///
/// The public surface of the facade talks about two independent-looking
/// booleans, but the pair is only ever assigned together, so it is stored
/// as one enumerated value. That makes the state machine explicit and
/// rules out torn half-states when the encoding sits in an atomic cell:
/// every transition is a single store of one of these four discriminants.
///
/// # Examples
///
/// ```
/// use logset::GateState;
///
/// assert!(GateState::Debug.verbose());
/// assert!(GateState::Debug.debug());
/// assert!(!GateState::DebugOnly.verbose());
/// assert_eq!(GateState::from_flags(true, false), GateState::Verbose);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum GateState {
    /// Neither gate is open; nothing is emitted.
    None = 0,
    /// Verbose messages are emitted, debugging messages are not.
    Verbose = 1,
    /// Both verbose and debugging messages are emitted.
    Debug = 2,
    /// Debugging messages are emitted, verbose messages are not.
    DebugOnly = 3,
}

impl GateState {
    /// Reports whether the verbose gate is open in this state.
    #[must_use]
    pub const fn verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Reports whether the debug gate is open in this state.
    #[must_use]
    pub const fn debug(self) -> bool {
        matches!(self, Self::Debug | Self::DebugOnly)
    }

    /// Maps a pair of gate flags to the state carrying them.
    #[must_use]
    pub const fn from_flags(verbose: bool, debug: bool) -> Self {
        match (verbose, debug) {
            (false, false) => Self::None,
            (true, false) => Self::Verbose,
            (true, true) => Self::Debug,
            (false, true) => Self::DebugOnly,
        }
    }

    /// Encodes the state for storage in an atomic cell.
    pub(crate) const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decodes a raw value previously produced by [`GateState::as_u8`].
    ///
    /// Only the four encodings above ever round-trip through the atomics;
    /// anything else maps to [`GateState::None`].
    pub(crate) const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Verbose,
            2 => Self::Debug,
            3 => Self::DebugOnly,
            _ => Self::None,
        }
    }
}

impl Default for GateState {
    fn default() -> Self {
        Self::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_flags_match_state_names() {
        assert!(!GateState::None.verbose());
        assert!(!GateState::None.debug());
        assert!(GateState::Verbose.verbose());
        assert!(!GateState::Verbose.debug());
        assert!(GateState::Debug.verbose());
        assert!(GateState::Debug.debug());
        assert!(!GateState::DebugOnly.verbose());
        assert!(GateState::DebugOnly.debug());
    }

    #[test]
    fn from_flags_covers_all_pairs() {
        assert_eq!(GateState::from_flags(false, false), GateState::None);
        assert_eq!(GateState::from_flags(true, false), GateState::Verbose);
        assert_eq!(GateState::from_flags(true, true), GateState::Debug);
        assert_eq!(GateState::from_flags(false, true), GateState::DebugOnly);
    }

    #[test]
    fn raw_encoding_round_trips() {
        for state in [
            GateState::None,
            GateState::Verbose,
            GateState::Debug,
            GateState::DebugOnly,
        ] {
            assert_eq!(GateState::from_u8(state.as_u8()), state);
        }
    }

    #[test]
    fn unknown_raw_values_decode_to_none() {
        assert_eq!(GateState::from_u8(4), GateState::None);
        assert_eq!(GateState::from_u8(u8::MAX), GateState::None);
    }

    #[test]
    fn default_state_is_none() {
        assert_eq!(GateState::default(), GateState::None);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn gate_state_serde_round_trip() {
            for state in [
                GateState::None,
                GateState::Verbose,
                GateState::Debug,
                GateState::DebugOnly,
            ] {
                let json = serde_json::to_string(&state).expect("serialize");
                let decoded: GateState = serde_json::from_str(&json).expect("deserialize");
                assert_eq!(state, decoded);
            }
        }
    }
}
