//! Command-line front end: positional arguments in, validated
//! [`SimulationConfig`] out.

use crate::domain::{ConfigError, SimulationConfig};
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::time::Duration;
use thiserror::Error;

/// Tokio timers fire on a 1ms grid, so shorter polling intervals are refused.
const MIN_MONITOR_INTERVAL_US: u64 = 1000;

const SYNOPSIS: &str = "./philo number_of_philosophers time_to_die time_to_eat time_to_sleep \
[number_of_times_each_philosopher_must_eat]";

/// Usage text printed after an argument error.
pub fn usage() -> String {
    format!("Usage: {}\nAll time arguments should be in milliseconds.", SYNOPSIS)
}

/// Dining philosophers simulation.
#[derive(Debug, Parser)]
#[command(name = "philo", version, override_usage = SYNOPSIS, allow_negative_numbers = true)]
pub struct Cli {
    /// Philosophers at the table, which is also the number of forks
    pub number_of_philosophers: u32,

    /// Milliseconds a philosopher survives without starting a meal
    pub time_to_die: u64,

    /// Milliseconds a meal takes
    pub time_to_eat: u64,

    /// Milliseconds a philosopher sleeps after eating
    pub time_to_sleep: u64,

    /// Stop once every philosopher has eaten this many times
    pub number_of_times_each_philosopher_must_eat: Option<u32>,

    /// Monitor polling interval in microseconds, at least 1000 (the timer
    /// resolution)
    #[arg(
        long,
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(MIN_MONITOR_INTERVAL_US..)
    )]
    pub monitor_interval_us: u64,
}

#[derive(Debug, Error)]
pub enum CliError {
    /// `--help` or `--version`; not a failure.
    #[error("{0}")]
    Info(clap::Error),

    /// Too few or too many arguments. Only the usage text is printed.
    #[error("{0}")]
    ArgumentCount(clap::Error),

    #[error("Invalid arguments.")]
    Invalid(clap::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CliError {
    /// Whether an `Error: ...` line should be printed before the usage text.
    pub fn has_message(&self) -> bool {
        !matches!(self, CliError::Info(_) | CliError::ArgumentCount(_))
    }

    /// Whether the usage text should follow the error message.
    pub fn wants_usage(&self) -> bool {
        !matches!(
            self,
            CliError::Info(_) | CliError::Config(ConfigError::TooManyPhilosophers(_))
        )
    }
}

impl Cli {
    pub fn into_config(self) -> Result<SimulationConfig, ConfigError> {
        let config = SimulationConfig::new(
            self.number_of_philosophers,
            self.time_to_die,
            self.time_to_eat,
            self.time_to_sleep,
            self.number_of_times_each_philosopher_must_eat,
        )?;
        Ok(config.with_monitor_interval(Duration::from_micros(self.monitor_interval_us)))
    }
}

/// Parses `args` (program name first) into a validated configuration.
pub fn parse_args<I, T>(args: I) -> Result<SimulationConfig, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => CliError::Info(e),
        ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument => {
            CliError::ArgumentCount(e)
        }
        _ => CliError::Invalid(e),
    })?;
    Ok(cli.into_config()?)
}
