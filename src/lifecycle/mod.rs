//! # Simulation Lifecycle & Orchestration
//!
//! Individual actors are simple; the orchestration around them is where a run
//! can leak a task or a fork. This module builds the shared table, spawns the
//! actors and joins them.
//!
//! **Key Responsibilities:**
//! 1. **Setup** - Build the [`Table`](crate::table::Table) from a validated config
//! 2. **Spawning** - One task per philosopher, then the monitor, each in its own span
//! 3. **Joining** - Wait for every task; a failed task aborts the run
//! 4. **Teardown** - Release the forks and records once all tasks are gone
//! 5. **Observability Setup** - Initialize tracing via [`setup_tracing`]
//!
//! ## Shutdown
//!
//! Nothing is cancelled from outside. Every actor watches the stop signal and
//! leaves on its own, dropping any fork it holds, so shutdown is:
//!
//! 1. **Claim the stop signal** - the monitor (death/quota), a [`StopHandle`], or
//!    the orchestrator itself after a task failure
//! 2. **Actors notice** - inside their current wait or at the next step boundary
//! 3. **Join** - [`Simulation::wait`] drains the task set
//! 4. **Drop the table** - the last reference goes with the orchestrator

pub mod simulation;
pub mod tracing;

pub use self::simulation::*;
pub use self::tracing::setup_tracing;
