//! The steps of a philosopher's cycle.
//!
//! Each step checks the stop signal before it starts and waits through
//! [`wait_for`], so it returns [`Stopped`] as soon as the simulation ends and
//! the caller can leave the loop with `?`.

use crate::domain::{Event, PhilosopherState};
use crate::framework::{duration_ms, wait_for};
use crate::table::{HeldForks, Table};
use tracing::{debug, trace};

/// The simulation ended part-way through a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stopped;

pub type Step<T = ()> = Result<T, Stopped>;

/// Takes both forks. Anything taken is released if the run ends meanwhile.
pub async fn take_forks(table: &Table, philosopher: u32) -> Step<HeldForks> {
    let held = table.acquire_both(philosopher).await.ok_or(Stopped)?;
    if table.is_over() {
        table.release_both(held);
        return Err(Stopped);
    }
    Ok(held)
}

/// Eats while holding `held`, then puts the forks down.
///
/// The meal is stamped (timestamp and count together) before the wait, so the
/// deadline restarts when eating starts, not when it ends.
pub async fn eat(table: &Table, philosopher: u32, held: HeldForks) -> Step {
    if table.is_over() {
        table.release_both(held);
        return Err(Stopped);
    }
    table.report(philosopher, Event::Eating);
    let record = table.ledger().record_meal(philosopher, table.clock());
    debug!(philosopher, meals = record.meals, at_ms = record.last_meal_ms, "Eating");

    let waited = wait_for(table.config().time_to_eat, table.stop()).await;
    table.release_both(held);
    table.ledger().set_state(philosopher, PhilosopherState::Sleeping);
    if waited.was_interrupted() {
        return Err(Stopped);
    }
    Ok(())
}

pub async fn sleep(table: &Table, philosopher: u32) -> Step {
    if table.is_over() {
        return Err(Stopped);
    }
    table.report(philosopher, Event::Sleeping);
    if wait_for(table.config().time_to_sleep, table.stop()).await.was_interrupted() {
        return Err(Stopped);
    }
    Ok(())
}

/// Reports thinking, then pauses for
/// [`think_pause`](crate::domain::SimulationConfig::think_pause) if one applies.
///
/// The pause is skipped when it would carry the philosopher to its deadline.
pub async fn think(table: &Table, philosopher: u32) -> Step {
    if table.is_over() {
        return Err(Stopped);
    }
    table.report(philosopher, Event::Thinking);
    table.ledger().set_state(philosopher, PhilosopherState::Thinking);

    let hungry_ms = table.ledger().hungry_for(philosopher, table.clock());
    let Some(pause) = table.config().think_pause(hungry_ms) else {
        return Ok(());
    };
    let die_ms = duration_ms(table.config().time_to_die);
    if hungry_ms + duration_ms(pause) >= die_ms {
        trace!(philosopher, hungry_ms, "Skipping think pause");
        return Ok(());
    }
    if wait_for(pause, table.stop()).await.was_interrupted() {
        return Err(Stopped);
    }
    Ok(())
}

/// A lone philosopher: one fork, no neighbour, no meal.
///
/// It picks up the only fork and holds it for twice the death timeout, by
/// which point the monitor has long since declared it dead.
pub async fn dine_alone(table: &Table, philosopher: u32) {
    let seat = table.forks().seat(philosopher);
    let Some(fork) = table.forks().take(seat.left, table.stop()).await else {
        return;
    };
    table.report(philosopher, Event::TookFork);
    wait_for(table.config().time_to_die * 2, table.stop()).await;
    drop(fork);
}
