//! Interruptible waits.
//!
//! Every timed phase (eating, sleeping, thinking, the stagger and the lone
//! philosopher's wait) goes through [`wait_for`]. It races the timer against
//! the [`StopSignal`], so a phase never outlives the simulation by more than
//! the timer's own resolution.

use super::stop::StopSignal;
use std::time::Duration;
use tokio::time::sleep;

/// How a [`wait_for`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waited {
    /// The full duration elapsed.
    Elapsed,
    /// The stop signal fired first.
    Interrupted,
}

impl Waited {
    pub fn was_interrupted(self) -> bool {
        self == Waited::Interrupted
    }
}

/// Waits for `duration`, or until `stop` is claimed, whichever comes first.
pub async fn wait_for(duration: Duration, stop: &StopSignal) -> Waited {
    if stop.is_stopped() {
        return Waited::Interrupted;
    }
    tokio::select! {
        biased;
        _ = stop.stopped() => Waited::Interrupted,
        _ = sleep(duration) => Waited::Elapsed,
    }
}
