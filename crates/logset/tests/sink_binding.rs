//! Integration tests for sink binding and replacement.
//!
//! `set_logger` swaps the destination for subsequent emissions; `None`
//! reverts to the process default destination (standard error, which these
//! tests observe only indirectly: the custom sink must stop receiving).

use logset::LogSet;
use logset_sink::{CaptureSink, LineMode, WriterSink};

// ============================================================================
// Binding And Replacement
// ============================================================================

/// Verifies a bound sink receives emitted lines.
#[test]
fn bound_sink_receives_lines() {
    let set = LogSet::new();
    let capture = CaptureSink::new();
    set.set_logger(Some(Box::new(capture.clone())));
    set.log_verbose();

    logset::verbose!(set, "hello {}", "sink");

    assert_eq!(capture.lines(), vec!["hello sink".to_string()]);
}

/// Verifies replacing the sink routes subsequent lines to the new one
/// only.
#[test]
fn replacement_takes_effect_immediately() {
    let set = LogSet::new();
    let first = CaptureSink::new();
    let second = CaptureSink::new();
    set.log_verbose();

    set.set_logger(Some(Box::new(first.clone())));
    logset::verbose!(set, "to first");

    set.set_logger(Some(Box::new(second.clone())));
    logset::verbose!(set, "to second");

    assert_eq!(first.lines(), vec!["to first".to_string()]);
    assert_eq!(second.lines(), vec!["to second".to_string()]);
}

/// Verifies the round trip: unbinding with `None` reverts to the default
/// destination, so the custom sink stops receiving.
#[test]
fn unbinding_reverts_to_default_destination() {
    let set = LogSet::new();
    let capture = CaptureSink::new();
    set.log_verbose();

    set.set_logger(Some(Box::new(capture.clone())));
    logset::verbose!(set, "captured");

    set.set_logger(None);
    logset::verbose!(set, "to stderr, not captured");

    assert_eq!(capture.lines(), vec!["captured".to_string()]);
}

// ============================================================================
// Writer-Backed Sinks
// ============================================================================

/// Verifies a writer-backed sink terminates each line by default.
#[test]
fn writer_sink_is_line_oriented() {
    let set = LogSet::new();
    set.log_debug();

    // Shared handle so the buffer stays observable after binding.
    let sink = std::sync::Arc::new(WriterSink::new(Vec::new()));
    set.set_logger(Some(Box::new(std::sync::Arc::clone(&sink))));

    logset::verbose!(set, "one");
    logset::debug!(set, "two");

    set.set_logger(None);
    let sink = std::sync::Arc::into_inner(sink).expect("set released its handle");
    let output = String::from_utf8(sink.into_inner()).expect("utf-8");
    assert_eq!(output, "one\ntwo\n");
}

/// Verifies the newline policy is the sink's, not the facade's.
#[test]
fn line_mode_is_honoured() {
    let set = LogSet::new();
    set.log_verbose();

    let sink = std::sync::Arc::new(WriterSink::with_line_mode(
        Vec::new(),
        LineMode::WithoutNewline,
    ));
    set.set_logger(Some(Box::new(std::sync::Arc::clone(&sink))));

    logset::verbose!(set, "a");
    logset::verbose!(set, "b");

    set.set_logger(None);
    let sink = std::sync::Arc::into_inner(sink).expect("set released its handle");
    assert_eq!(sink.into_inner(), b"ab".to_vec());
}
