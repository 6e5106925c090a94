//! # Philo Table
//!
//! > **The dining philosophers, as a set of cooperating Tokio tasks.**
//!
//! N philosophers sit around a table with one fork between each pair of
//! neighbours. Each one loops through taking both forks, eating, sleeping and
//! thinking. A monitor watches them all: if anyone goes longer than
//! `time_to_die` without starting a meal, it prints that philosopher's death
//! and ends the run; if a meal quota is set and everybody reaches it, the run
//! ends quietly.
//!
//! ## 🏗️ Design
//!
//! - **One task per philosopher, plus a monitor**: all implement
//!   [`TableActor`](framework::TableActor) and are spawned the same way.
//! - **One termination flag**: a claim-once [`StopSignal`](framework::StopSignal).
//!   The first claim decides the outcome, later claims are no-ops.
//! - **No deadlock**: even philosophers take their left fork first, odd ones
//!   their right, so the ring of "everybody holds one fork" can never close.
//! - **Cooperative shutdown**: every wait (for a fork or for time) also waits on
//!   the stop signal, so tasks leave promptly and drop whatever they hold.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Clock, stop signal, interruptible wait and the actor trait. Nothing here
//! knows about forks or meals.
//!
//! ### 2. The Data ([`domain`])
//! [`SimulationConfig`](domain::SimulationConfig), per-philosopher
//! [`MealRecord`](domain::MealRecord)s and the printable [`Event`](domain::Event)s.
//!
//! ### 3. The Shared State ([`table`], [`reporter`])
//! The [`Table`](table::Table): fork ring, meal ledger, stop signal and the
//! status reporter that prints `<ms> <id> <event>` lines.
//!
//! ### 4. The Actors ([`philosopher_actor`], [`monitor_actor`])
//! The eat/sleep/think loop and the starvation/completion watcher.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`cli`])
//! [`Simulation`](lifecycle::Simulation) spawns and joins everything; [`cli`]
//! turns command-line arguments into a validated config.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Five philosophers who never starve
//! cargo run -- 5 800 200 200
//!
//! # Stop when everybody has eaten 7 times, with diagnostics on stderr
//! RUST_LOG=info cargo run -- 5 800 200 200 7
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod cli;
pub mod domain;
pub mod framework;
pub mod lifecycle;
pub mod monitor_actor;
pub mod philosopher_actor;
pub mod reporter;
pub mod table;
