//! # philo
//!
//! Runs one dining-philosophers simulation and prints its events to stdout.
//!
//! ```bash
//! philo 5 800 200 200        # runs until someone starves
//! philo 5 800 200 200 7      # stops once everybody has eaten 7 times
//! RUST_LOG=debug philo 4 410 200 200 3
//! ```
//!
//! Exit status: 0 when the run ends by starvation or by the meal quota, 1 on
//! bad arguments or an aborted run, 130 when interrupted with Ctrl-C.

use philo_table::cli::{self, CliError};
use philo_table::domain::SimulationConfig;
use philo_table::lifecycle::{setup_tracing, Outcome, Simulation};
use philo_table::reporter::StdoutSink;
use std::process::ExitCode;
use tracing::{error, info, warn};

fn main() -> ExitCode {
    setup_tracing();

    let config = match cli::parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(CliError::Info(e)) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            if e.has_message() {
                eprintln!("Error: {}", e);
            }
            if e.wants_usage() {
                eprintln!("{}", cli::usage());
            }
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start the runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };
    runtime.block_on(run(config))
}

async fn run(config: SimulationConfig) -> ExitCode {
    let simulation = match Simulation::start(config, Box::new(StdoutSink)) {
        Ok(simulation) => simulation,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stop = simulation.stop_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() && stop.interrupt() {
            warn!("Interrupted, clearing the table");
        }
    });

    match simulation.wait().await {
        Ok(summary) => {
            info!(outcome = ?summary.outcome, elapsed_ms = summary.elapsed_ms, "Done");
            match summary.outcome {
                Outcome::Starved { .. } | Outcome::AllFull => ExitCode::SUCCESS,
                Outcome::Interrupted => ExitCode::from(130),
            }
        }
        Err(e) => {
            error!(error = %e, "Simulation aborted");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
