//! # Status Reporting
//!
//! [`StatusReporter`] turns philosopher events into `<elapsed_ms> <id> <event>`
//! lines and hands them to an [`EventSink`]. All output goes through one lock,
//! so lines from different philosophers never interleave and their timestamps
//! never run backwards.
//!
//! Once the stop signal is claimed, ordinary events are dropped. The death
//! event is emitted with `force` set: it is printed after the flag it
//! triggered, and because it takes the same lock, it is the last line.

pub mod mock;

use crate::domain::{Event, EventLine};
use crate::framework::{Clock, StopSignal};
use parking_lot::Mutex;
use std::io::{self, Write};
use tracing::warn;

/// Destination for rendered event lines.
pub trait EventSink: Send {
    fn emit(&mut self, line: &EventLine) -> io::Result<()>;
}

/// Writes each line to standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl EventSink for StdoutSink {
    fn emit(&mut self, line: &EventLine) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

pub struct StatusReporter {
    clock: Clock,
    sink: Mutex<Box<dyn EventSink>>,
}

impl StatusReporter {
    pub fn new(clock: Clock, sink: Box<dyn EventSink>) -> Self {
        Self {
            clock,
            sink: Mutex::new(sink),
        }
    }

    /// Emits `event` for `philosopher` unless the simulation has stopped.
    ///
    /// `force` bypasses the stop check; it is reserved for the death line.
    /// Returns whether the line was emitted.
    pub fn report(&self, stop: &StopSignal, philosopher: u32, event: Event, force: bool) -> bool {
        let mut sink = self.sink.lock();
        if stop.is_stopped() && !force {
            return false;
        }
        let line = EventLine {
            elapsed_ms: self.clock.now_ms(),
            philosopher,
            event,
        };
        if let Err(e) = sink.emit(&line) {
            warn!(philosopher, error = %e, "Failed to write status line");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MemorySink;
    use super::*;
    use crate::framework::StopReason;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_report_stamps_elapsed_time() {
        let clock = Clock::start();
        let sink = MemorySink::new();
        let reporter = StatusReporter::new(clock, Box::new(sink.clone()));
        let stop = StopSignal::new();

        tokio::time::advance(Duration::from_millis(42)).await;
        assert!(reporter.report(&stop, 3, Event::Eating, false));

        assert_eq!(sink.rendered(), vec!["42 3 is eating".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_suppresses_all_but_forced() {
        let clock = Clock::start();
        let sink = MemorySink::new();
        let reporter = StatusReporter::new(clock, Box::new(sink.clone()));
        let stop = StopSignal::new();

        reporter.report(&stop, 1, Event::TookFork, false);
        stop.claim(StopReason::Starved { philosopher: 2 });

        assert!(!reporter.report(&stop, 1, Event::Eating, false));
        assert!(reporter.report(&stop, 2, Event::Died, true));
        assert!(!reporter.report(&stop, 3, Event::Sleeping, false));

        assert_eq!(
            sink.rendered(),
            vec!["0 1 has taken a fork".to_string(), "0 2 died".to_string()]
        );
    }
}
