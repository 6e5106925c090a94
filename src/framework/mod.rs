//! Concurrency building blocks the simulation is assembled from.
//!
//! # Main Components
//!
//! - [`Clock`] - Monotonic millisecond clock anchored at the simulation start
//! - [`StopSignal`] - The claim-once termination flag and its [`StopReason`]
//! - [`wait_for`] - Timed wait that wakes early when the stop signal fires
//! - [`TableActor`] - Trait implemented by every spawned task
//! - [`SimulationError`] - Failures that abort a run

pub mod actor;
pub mod clock;
pub mod error;
pub mod stop;
pub mod wait;

pub use actor::TableActor;
pub use clock::{duration_ms, Clock};
pub use error::SimulationError;
pub use stop::{StopReason, StopSignal};
pub use wait::{wait_for, Waited};
