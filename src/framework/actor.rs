//! # Table Actors
//!
//! Every task the simulation spawns (one per philosopher, plus the monitor)
//! implements [`TableActor`]. The orchestrator only knows this trait, so it can
//! spawn, name and join all tasks the same way.
//!
//! Like the context injection of a resource actor, the shared state is handed
//! to [`TableActor::run`] rather than stored at construction, which keeps the
//! actor values themselves small and cheap to build before the table exists.

use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait TableActor: Send + Sized + 'static {
    /// Shared state the actor runs against.
    type Context: Send + Sync + 'static;

    /// Name used for the task's tracing span and in failure reports.
    fn name(&self) -> String;

    /// Runs the actor until the simulation's stop signal is claimed.
    async fn run(self, ctx: Arc<Self::Context>);
}
