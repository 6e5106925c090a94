//! # Monitor Actor
//!
//! An independent task that sweeps every philosopher's record at a fixed
//! interval and ends the simulation when one of two things happens:
//!
//! - **Death**: a philosopher has gone longer than `time_to_die` since its
//!   last meal started. The monitor claims the stop signal with
//!   [`StopReason::Starved`]; only the claim's winner prints the death line
//!   and marks the philosopher `Dead`.
//! - **Completion**: a meal quota is configured and every philosopher has
//!   reached it. The monitor claims the signal with [`StopReason::AllFull`]
//!   and nothing is printed.
//!
//! Each sweep reads all records under one lock together with the current
//! time, so a meal pair is never seen half-updated. Between sweeps the
//! monitor waits one interval, and it leaves as soon as the signal is set by
//! anyone, itself or the orchestrator.

use crate::domain::{MealRecord, PhilosopherState};
use crate::framework::{duration_ms, wait_for, StopReason, TableActor};
use crate::table::Table;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// What a single sweep found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Everybody is alive and at least one philosopher is short of the quota.
    Running,
    /// A philosopher starved. `reported` is false if another task had already
    /// ended the run, in which case nothing was printed.
    Starved { philosopher: u32, reported: bool },
    /// Every philosopher met the quota.
    AllFull,
}

impl Verdict {
    pub fn is_final(self) -> bool {
        self != Verdict::Running
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Monitor;

impl Monitor {
    pub fn new() -> Self {
        Self
    }

    /// Runs one death sweep followed by one completion check.
    pub fn sweep(&self, table: &Table) -> Verdict {
        let (now_ms, records) = table.ledger().sweep(table.clock());
        if let Some(verdict) = check_death(table, now_ms, &records) {
            return verdict;
        }
        if check_all_full(table, &records) {
            return Verdict::AllFull;
        }
        Verdict::Running
    }
}

/// Finds the first philosopher past its deadline, if any.
///
/// The first task to claim the stop signal prints the death; anyone finding
/// the flag already set treats the run as handled and reports nothing.
pub fn check_death(table: &Table, now_ms: u64, records: &[MealRecord]) -> Option<Verdict> {
    let die_ms = duration_ms(table.config().time_to_die);
    let starving = records.iter().find(|record| record.hungry_for(now_ms) > die_ms)?;
    let philosopher = starving.id;

    let reported = table.end(StopReason::Starved { philosopher });
    if reported {
        table.report_death(philosopher);
        table.ledger().set_state(philosopher, PhilosopherState::Dead);
        info!(
            philosopher,
            hungry_ms = starving.hungry_for(now_ms),
            meals = starving.meals,
            "Philosopher starved"
        );
    }
    Some(Verdict::Starved { philosopher, reported })
}

/// Returns `true` if a quota is set and every philosopher has met it.
///
/// Philosophers who reach the quota while the run is still live are marked
/// `Full` as they are found. When everybody is full the stop signal is
/// claimed with [`StopReason::AllFull`].
pub fn check_all_full(table: &Table, records: &[MealRecord]) -> bool {
    let Some(quota) = table.config().meals_required else {
        return false;
    };

    let mut all_full = true;
    for record in records {
        if record.meals < quota {
            all_full = false;
            break;
        }
        if record.state != PhilosopherState::Full && !table.is_over() {
            table.ledger().set_state(record.id, PhilosopherState::Full);
        }
    }
    if !all_full {
        return false;
    }

    if table.end(StopReason::AllFull) {
        info!(quota, "Every philosopher is full");
    }
    true
}

#[async_trait]
impl TableActor for Monitor {
    type Context = Table;

    fn name(&self) -> String {
        "monitor".to_string()
    }

    async fn run(self, table: Arc<Table>) {
        let interval = table.config().monitor_interval;
        debug!(?interval, "Monitor started");
        loop {
            let verdict = self.sweep(&table);
            if verdict.is_final() {
                debug!(?verdict, "Monitor finished");
                return;
            }
            if wait_for(interval, table.stop()).await.was_interrupted() {
                debug!(reason = ?table.stop().reason(), "Monitor saw the run end");
                return;
            }
        }
    }
}
