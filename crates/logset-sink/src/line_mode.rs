//! crates/logset-sink/src/line_mode.rs
//! Newline policy for writer-backed sinks.

/// Controls whether a [`WriterSink`](crate::WriterSink) appends a trailing
/// newline when writing lines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each rendered line.
    WithNewline,
    /// Emit the rendered line without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline.
    ///
    /// [`LineMode::WithNewline`] is the facade's default: every diagnostic
    /// lands on its own line. Exposing the behaviour as a method avoids
    /// requiring callers to pattern-match on the enum when mirroring the
    /// sink's newline policy elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use logset_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl Default for LineMode {
    fn default() -> Self {
        Self::WithNewline
    }
}

impl From<bool> for LineMode {
    /// Converts a boolean newline flag into a [`LineMode`].
    ///
    /// `true` maps to [`LineMode::WithNewline`] while `false` selects
    /// [`LineMode::WithoutNewline`], letting call sites that already carry
    /// the preference as a boolean adopt the enum without branching.
    ///
    /// # Examples
    ///
    /// ```
    /// use logset_sink::LineMode;
    ///
    /// assert_eq!(LineMode::from(true), LineMode::WithNewline);
    /// assert_eq!(LineMode::from(false), LineMode::WithoutNewline);
    /// ```
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    /// Converts a [`LineMode`] back into a boolean newline flag.
    ///
    /// Delegates to [`LineMode::append_newline`] so the mapping stays
    /// consistent if further variants are ever introduced.
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_appends_newline() {
        assert_eq!(LineMode::default(), LineMode::WithNewline);
    }

    #[test]
    fn bool_round_trip() {
        for mode in [LineMode::WithNewline, LineMode::WithoutNewline] {
            let flag: bool = mode.into();
            assert_eq!(LineMode::from(flag), mode);
        }
    }
}
