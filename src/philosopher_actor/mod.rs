//! # Philosopher Actor
//!
//! One task per philosopher, cycling think → take forks → eat → sleep until
//! the stop signal is claimed. The cycle itself lives in [`actions`]; this
//! module owns the loop, the start-up stagger and the single-philosopher case.
//!
//! A philosopher never ends the simulation itself. It only notices that the
//! monitor (or the orchestrator) has, at the next step boundary or inside the
//! current wait, and leaves with no fork held.

pub mod actions;

use crate::framework::{wait_for, TableActor};
use crate::table::Table;
use actions::Step;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Philosopher {
    id: u32,
}

impl Philosopher {
    /// `id` is 1-based and must not exceed the table size.
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// One full cycle. Returns `Err(Stopped)` as soon as the run ends.
    async fn cycle(&self, table: &Table) -> Step {
        let held = actions::take_forks(table, self.id).await?;
        actions::eat(table, self.id, held).await?;
        actions::sleep(table, self.id).await?;
        actions::think(table, self.id).await
    }
}

#[async_trait]
impl TableActor for Philosopher {
    type Context = Table;

    fn name(&self) -> String {
        format!("philosopher-{}", self.id)
    }

    async fn run(self, table: Arc<Table>) {
        let id = self.id;
        debug!(philosopher = id, "Seated");

        // Even seats start a little late to spread out the first grab for forks.
        if id % 2 == 0 && wait_for(table.config().stagger(), table.stop()).await.was_interrupted() {
            return;
        }

        if table.config().philosophers == 1 {
            actions::dine_alone(&table, id).await;
        } else {
            while !table.is_over() {
                if self.cycle(&table).await.is_err() {
                    break;
                }
            }
        }

        let record = table.ledger().get(id);
        info!(philosopher = id, meals = record.meals, state = ?record.state, "Left the table");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Event, PhilosopherState, SimulationConfig};
    use crate::framework::StopReason;
    use crate::reporter::mock::MemorySink;
    use std::time::Duration;

    fn table(config: SimulationConfig) -> (Arc<Table>, MemorySink) {
        let sink = MemorySink::new();
        let table = Table::new(config, Box::new(sink.clone())).unwrap();
        (Arc::new(table), sink)
    }

    #[tokio::test(start_paused = true)]
    async fn test_cycle_reports_in_order() {
        let config = SimulationConfig::new(2, 800, 200, 100, None).unwrap();
        let (table, sink) = table(config);

        let philosopher = tokio::spawn(Philosopher::new(1).run(table.clone()));
        tokio::time::sleep(Duration::from_millis(360)).await;
        table.end(StopReason::Interrupted);
        philosopher.await.unwrap();

        assert_eq!(
            sink.rendered(),
            vec![
                "0 1 has taken a fork",
                "0 1 has taken a fork",
                "0 1 is eating",
                "200 1 is sleeping",
                "300 1 is thinking",
                // Thinking pauses 50ms, then the next meal starts.
                "350 1 has taken a fork",
                "350 1 has taken a fork",
                "350 1 is eating",
            ]
        );
        let record = table.ledger().get(1);
        assert_eq!(record.meals, 2);
        assert_eq!(record.last_meal_ms, 350);
    }

    #[tokio::test(start_paused = true)]
    async fn test_even_philosopher_staggers_start() {
        let config = SimulationConfig::new(2, 800, 200, 200, None).unwrap();
        let (table, sink) = table(config);

        let philosopher = tokio::spawn(Philosopher::new(2).run(table.clone()));
        tokio::time::sleep(Duration::from_millis(50)).await;
        table.end(StopReason::Interrupted);
        philosopher.await.unwrap();

        let first = sink.lines()[0];
        assert_eq!(first.elapsed_ms, 20);
        assert_eq!(first.event, Event::TookFork);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_during_meal_releases_forks() {
        let config = SimulationConfig::new(3, 800, 200, 200, None).unwrap();
        let (table, sink) = table(config);

        let philosopher = tokio::spawn(Philosopher::new(1).run(table.clone()));
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!table.forks().is_free(0));

        table.end(StopReason::Interrupted);
        philosopher.await.unwrap();

        assert!(table.forks().is_free(0));
        assert!(table.forks().is_free(1));
        assert!(sink.events(Event::Sleeping).is_empty());
        assert_eq!(table.ledger().get(1).state, PhilosopherState::Sleeping);
    }

    #[tokio::test(start_paused = true)]
    async fn test_lone_philosopher_takes_one_fork_and_waits() {
        let config = SimulationConfig::new(1, 100, 50, 50, None).unwrap();
        let (table, sink) = table(config);

        Philosopher::new(1).run(table.clone()).await;

        assert_eq!(sink.rendered(), vec!["0 1 has taken a fork"]);
        assert_eq!(table.clock().now_ms(), 200);
        assert!(table.forks().is_free(0));
        assert_eq!(table.ledger().get(1).meals, 0);
    }
}
