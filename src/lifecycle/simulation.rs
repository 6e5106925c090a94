use crate::domain::{MealRecord, SimulationConfig};
use crate::framework::{SimulationError, StopReason, TableActor};
use crate::monitor_actor::Monitor;
use crate::philosopher_actor::Philosopher;
use crate::reporter::EventSink;
use crate::table::Table;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, info_span, Instrument};

/// How a run that finished cleanly ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A philosopher died; its death line was printed.
    Starved { philosopher: u32 },
    /// Every philosopher reached the meal quota.
    AllFull,
    /// Stopped on request before either condition.
    Interrupted,
}

/// Final state of a finished run.
#[derive(Debug, Clone)]
pub struct Summary {
    pub outcome: Outcome,
    /// Milliseconds from the table opening to the last task joining.
    pub elapsed_ms: u64,
    pub records: Vec<MealRecord>,
}

/// Cloneable handle that can end a running simulation from outside.
#[derive(Clone)]
pub struct StopHandle {
    table: Arc<Table>,
}

impl StopHandle {
    /// Ends the run with [`StopReason::Interrupted`]. Returns `false` if it had
    /// already ended.
    pub fn interrupt(&self) -> bool {
        self.table.end(StopReason::Interrupted)
    }

    pub fn is_stopped(&self) -> bool {
        self.table.is_over()
    }
}

/// The orchestrator for one dining-philosophers run.
///
/// `Simulation` is responsible for:
/// - **Setup**: laying the [`Table`] (forks, records, clock) from a validated config
/// - **Spawning**: one task per philosopher, then the monitor
/// - **Joining**: waiting for every task, turning a failed task into an abort
/// - **Teardown**: dropping the table once nothing else holds it
///
/// # Example
///
/// ```ignore
/// let config = SimulationConfig::new(5, 800, 200, 200, Some(7))?;
/// let simulation = Simulation::start(config, Box::new(StdoutSink))?;
/// let summary = simulation.wait().await?;
/// ```
pub struct Simulation {
    table: Arc<Table>,
    tasks: JoinSet<String>,
}

impl Simulation {
    /// Lays the table and spawns every task. Must be called inside a Tokio runtime.
    ///
    /// # Errors
    /// [`SimulationError::Allocation`] if the table cannot be built; no task is
    /// spawned in that case.
    pub fn start(config: SimulationConfig, sink: Box<dyn EventSink>) -> Result<Self, SimulationError> {
        info!(
            philosophers = config.philosophers,
            time_to_die = ?config.time_to_die,
            time_to_eat = ?config.time_to_eat,
            time_to_sleep = ?config.time_to_sleep,
            meals_required = ?config.meals_required,
            "Starting simulation"
        );
        let table = Arc::new(Table::new(config, sink)?);
        let mut tasks = JoinSet::new();

        for id in 1..=table.config().philosophers {
            spawn_actor(&mut tasks, Philosopher::new(id), &table);
        }
        spawn_actor(&mut tasks, Monitor::new(), &table);

        Ok(Self { table, tasks })
    }

    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            table: self.table.clone(),
        }
    }

    /// Waits for every task to finish and reports how the run ended.
    ///
    /// If a task fails, the run is aborted: the stop signal is claimed so the
    /// remaining tasks wind down, all of them are still joined, and the first
    /// failure is returned.
    pub async fn wait(mut self) -> Result<Summary, SimulationError> {
        let mut failure = None;
        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(name) => debug!(task = %name, "Task joined"),
                Err(e) => {
                    error!(error = %e, "Table task failed");
                    self.table.end(StopReason::Aborted {
                        reason: e.to_string(),
                    });
                    if failure.is_none() {
                        failure = Some(SimulationError::TaskFailed(e));
                    }
                }
            }
        }

        let elapsed_ms = self.table.clock().now_ms();
        let records = self.table.snapshot();
        let reason = self.table.stop().reason();
        drop(self.table);
        debug!(elapsed_ms, "Table cleared");

        if let Some(e) = failure {
            return Err(e);
        }
        if let Some(reason) = &reason {
            info!(%reason, "Stop signal claimed");
        }
        let outcome = match reason {
            Some(StopReason::Starved { philosopher }) => Outcome::Starved { philosopher },
            Some(StopReason::AllFull) => Outcome::AllFull,
            Some(StopReason::Interrupted) => Outcome::Interrupted,
            Some(StopReason::Aborted { reason }) => return Err(SimulationError::Aborted(reason)),
            None => {
                return Err(SimulationError::Aborted(
                    "every task exited before the run ended".to_string(),
                ))
            }
        };
        info!(?outcome, elapsed_ms, "Simulation finished");
        Ok(Summary {
            outcome,
            elapsed_ms,
            records,
        })
    }

    /// Starts a simulation and waits for it to finish.
    pub async fn run(config: SimulationConfig, sink: Box<dyn EventSink>) -> Result<Summary, SimulationError> {
        Self::start(config, sink)?.wait().await
    }
}

fn spawn_actor<A>(tasks: &mut JoinSet<String>, actor: A, table: &Arc<Table>)
where
    A: TableActor<Context = Table>,
{
    let name = actor.name();
    let span = info_span!("actor", name = %name);
    let table = table.clone();
    tasks.spawn(
        async move {
            actor.run(table).await;
            name
        }
        .instrument(span),
    );
}
