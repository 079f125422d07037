//! Console message stream
//!
//! Observers and payment methods produce customer-facing text (SMS lines,
//! panel updates, transaction confirmations). Those lines are side-effect
//! output, not part of any return-value contract, so they go through the
//! [`MessageSink`] capability and can be redirected to the real console, a
//! buffer or a test collector without touching core semantics.

use std::cell::RefCell;
use std::fmt;

/// A sink for customer-facing console lines
pub trait MessageSink: fmt::Debug {
    fn emit(&self, line: &str);
}

/// Sink that writes to stdout
///
/// The default sink for interactive runs.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub const fn new() -> Self {
        Self
    }
}

impl MessageSink for ConsoleSink {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}

/// Sink that collects lines in memory
///
/// Used by tests to assert on emitted messages and their order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: RefCell<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines emitted so far, in emission order
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl MessageSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_preserves_order() {
        let sink = MemorySink::new();
        sink.emit("first");
        sink.emit("second");
        assert_eq!(sink.lines(), vec!["first", "second"]);

        sink.clear();
        assert!(sink.lines().is_empty());
    }
}
