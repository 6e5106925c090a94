//! In-memory [`EventSink`] for tests.
//!
//! A [`MemorySink`] is cheap to clone; every clone appends to and reads from
//! the same buffer, so a test can hand one clone to the simulation and keep
//! another to inspect what was printed.

use super::EventSink;
use crate::domain::{Event, EventLine};
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<EventLine>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line emitted so far, in order.
    pub fn lines(&self) -> Vec<EventLine> {
        self.lines.lock().clone()
    }

    /// Lines rendered exactly as they would be printed.
    pub fn rendered(&self) -> Vec<String> {
        self.lines.lock().iter().map(ToString::to_string).collect()
    }

    /// Lines for one kind of event.
    pub fn events(&self, event: Event) -> Vec<EventLine> {
        self.lines
            .lock()
            .iter()
            .filter(|line| line.event == event)
            .copied()
            .collect()
    }
}

impl EventSink for MemorySink {
    fn emit(&mut self, line: &EventLine) -> io::Result<()> {
        self.lines.lock().push(*line);
        Ok(())
    }
}
