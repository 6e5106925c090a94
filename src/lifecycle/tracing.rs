//! # Observability & Tracing
//!
//! Diagnostics use the `tracing` crate and are written to **stderr**. Standard
//! output is reserved for the event lines, so `RUST_LOG=debug` never changes
//! what a consumer of the `<ms> <id> <event>` stream sees.
//!
//! ## What Gets Traced
//!
//! - **Run lifecycle**: start with the full configuration, finish with the outcome
//! - **Actors**: every task runs in an `actor` span named `philosopher-N` or `monitor`
//! - **Meals**: each meal at `debug`, skipped think pauses at `trace`
//! - **Termination**: the starved philosopher or the completed quota, failed tasks
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcome only
//! RUST_LOG=info philo 5 800 200 200
//!
//! # Every meal, with the philosopher span inline
//! RUST_LOG=debug philo 4 410 200 200 3
//!
//! # Filter to the monitor
//! RUST_LOG=philo_table::monitor_actor=debug philo 4 310 200 100
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
