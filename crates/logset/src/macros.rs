//! crates/logset/src/macros.rs
//! Printf-style emission macros for LogSets and the process default.

/// Logs a verbose message with `std::fmt` formatting.
///
/// With a [`LogSet`](crate::LogSet) expression first, emits through that
/// set; with a bare format string, emits through the process default set.
/// Gating (including the debug-implies-verbose fallback on a pristine set)
/// is applied before any formatting work happens.
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
/// set.log_verbose();
/// logset::verbose!(set, "pulled {} updates", 3);
///
/// assert_eq!(capture.lines(), vec!["pulled 3 updates".to_string()]);
/// ```
#[macro_export]
macro_rules! verbose {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::verbose(::core::format_args!($fmt $(, $arg)*))
    };
    ($set:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        ($set).verbose(::core::format_args!($fmt $(, $arg)*))
    };
}

/// Logs a debugging message with `std::fmt` formatting.
///
/// With a [`LogSet`](crate::LogSet) expression first, emits through that
/// set; with a bare format string, emits through the process default set.
/// The debug gate is consulted literally.
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
/// set.log_debug_only();
/// logset::debug!(set, "retrying after {:?}", std::time::Duration::from_millis(50));
/// logset::verbose!(set, "not emitted: fallback is disarmed");
///
/// assert_eq!(capture.len(), 1);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::debug(::core::format_args!($fmt $(, $arg)*))
    };
    ($set:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        ($set).debug(::core::format_args!($fmt $(, $arg)*))
    };
}
