//! # Simulation Errors
//!
//! Failures that end a run abnormally. Starvation is not an error: it is the
//! expected way for a run to end and is reported through
//! [`StopReason::Starved`](super::StopReason::Starved) instead.

use std::collections::TryReserveError;
use tokio::task::JoinError;

/// Errors that abort a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Allocation failed for {what}: {source}")]
    Allocation {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },
    #[error("Table task failed: {0}")]
    TaskFailed(#[source] JoinError),
    #[error("Simulation aborted: {0}")]
    Aborted(String),
}

impl SimulationError {
    pub fn allocation(what: &'static str, source: TryReserveError) -> Self {
        Self::Allocation { what, source }
    }
}
