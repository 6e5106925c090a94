//! # The Table
//!
//! [`Table`] is the state every task shares: the configuration, the clock, the
//! stop signal, the fork ring, the meal ledger and the status reporter. It is
//! built once, wrapped in an `Arc`, and handed to every actor.
//!
//! Each concern has its own guard. The stop signal, the ledger and the output
//! lock are independent, and every fork is locked on its own, so reading the
//! flag never waits behind a philosopher updating its meal.

pub mod forks;
pub mod ledger;

pub use forks::*;
pub use ledger::*;

use crate::domain::{Event, MealRecord, SimulationConfig};
use crate::framework::{Clock, SimulationError, StopReason, StopSignal};
use crate::reporter::{EventSink, StatusReporter};
use tracing::debug;

pub struct Table {
    config: SimulationConfig,
    clock: Clock,
    stop: StopSignal,
    forks: ForkRing,
    ledger: MealLedger,
    reporter: StatusReporter,
}

impl Table {
    /// Lays the table: one fork and one record per philosopher. The clock
    /// starts here, so every philosopher's deadline counts from this moment.
    ///
    /// # Errors
    /// [`SimulationError::Allocation`] if the forks or records cannot be
    /// allocated. Anything already built is dropped before returning.
    pub fn new(config: SimulationConfig, sink: Box<dyn EventSink>) -> Result<Self, SimulationError> {
        let forks = ForkRing::new(config.philosophers)?;
        let ledger = MealLedger::new(config.philosophers)?;
        let clock = Clock::start();
        Ok(Self {
            config,
            clock,
            stop: StopSignal::new(),
            forks,
            ledger,
            reporter: StatusReporter::new(clock, sink),
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn stop(&self) -> &StopSignal {
        &self.stop
    }

    pub fn forks(&self) -> &ForkRing {
        &self.forks
    }

    pub fn ledger(&self) -> &MealLedger {
        &self.ledger
    }

    pub fn is_over(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Claims the stop signal. See [`StopSignal::claim`].
    pub fn end(&self, reason: StopReason) -> bool {
        self.stop.claim(reason)
    }

    /// Prints an event unless the simulation is over.
    pub fn report(&self, philosopher: u32, event: Event) -> bool {
        self.reporter.report(&self.stop, philosopher, event, false)
    }

    /// Prints the death line, even though the stop signal is already set.
    pub fn report_death(&self, philosopher: u32) {
        self.reporter.report(&self.stop, philosopher, Event::Died, true);
    }

    /// Takes both of `philosopher`'s forks in parity order, reporting each one.
    ///
    /// Returns `None` if the simulation stops while waiting; any fork already
    /// taken is released before returning. Also `None` for a lone philosopher,
    /// who has no second fork to take.
    pub async fn acquire_both(&self, philosopher: u32) -> Option<HeldForks> {
        let seat = self.forks.seat(philosopher);
        let [first, second] = seat.acquisition_order(philosopher)?;

        let first = self.forks.take(first, &self.stop).await?;
        self.report(philosopher, Event::TookFork);
        let second = match self.forks.take(second, &self.stop).await {
            Some(guard) => guard,
            None => {
                debug!(philosopher, fork = first.index(), "Stopped while holding one fork");
                return None;
            }
        };
        self.report(philosopher, Event::TookFork);

        Some(if first.index() == seat.left {
            HeldForks::new(first, second)
        } else {
            HeldForks::new(second, first)
        })
    }

    /// Puts both forks back, right first.
    pub fn release_both(&self, held: HeldForks) {
        drop(held);
    }

    /// A consistent copy of every philosopher's record.
    pub fn snapshot(&self) -> Vec<MealRecord> {
        self.ledger.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::mock::MemorySink;
    use std::sync::Arc;
    use std::time::Duration;

    fn table(philosophers: u32) -> (Arc<Table>, MemorySink) {
        let sink = MemorySink::new();
        let config = SimulationConfig::new(philosophers, 800, 200, 200, None).unwrap();
        let table = Table::new(config, Box::new(sink.clone())).unwrap();
        (Arc::new(table), sink)
    }

    #[tokio::test(start_paused = true)]
    async fn test_acquire_both_reports_each_fork() {
        let (table, sink) = table(3);

        let held = table.acquire_both(2).await.unwrap();

        assert_eq!(held.indices(), vec![1, 2]);
        assert_eq!(sink.events(Event::TookFork).len(), 2);
        assert!(!table.forks().is_free(1));
        assert!(!table.forks().is_free(2));

        table.release_both(held);
        assert!(table.forks().is_free(1));
        assert!(table.forks().is_free(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_neighbour_waits_for_shared_fork() {
        let (table, _sink) = table(3);
        let held = table.acquire_both(1).await.unwrap();

        let neighbour = {
            let table = table.clone();
            tokio::spawn(async move { table.acquire_both(2).await.map(|h| h.indices()) })
        };
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!neighbour.is_finished());

        table.release_both(held);
        assert_eq!(neighbour.await.unwrap(), Some(vec![1, 2]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_releases_partial_acquisition() {
        let (table, sink) = table(3);
        // Philosopher 3 (odd) wants fork 0 first, then fork 2.
        let blocker = table.forks().take(2, table.stop()).await.unwrap();

        let waiter = {
            let table = table.clone();
            tokio::spawn(async move { table.acquire_both(3).await.is_some() })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!table.forks().is_free(0));

        table.end(StopReason::Interrupted);
        assert!(!waiter.await.unwrap());
        assert!(table.forks().is_free(0));
        assert_eq!(sink.events(Event::TookFork).len(), 1);
        drop(blocker);
    }

    #[tokio::test]
    async fn test_lone_philosopher_cannot_acquire_both() {
        let (table, sink) = table(1);
        assert!(table.acquire_both(1).await.is_none());
        assert!(sink.lines().is_empty());
    }
}
