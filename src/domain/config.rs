use std::time::Duration;
use thiserror::Error;

/// Upper bound on the number of philosophers at one table.
pub const MAX_PHILOSOPHERS: u32 = 200;

/// Default granularity of the monitor's polling sweep.
pub const DEFAULT_MONITOR_INTERVAL: Duration = Duration::from_millis(1);

/// Errors raised while validating a simulation configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// A required value is zero.
    #[error("Invalid arguments: {0} must be a positive integer")]
    NotPositive(&'static str),

    /// More philosophers than the table supports.
    #[error("Number of philosophers cannot exceed {max}.", max = MAX_PHILOSOPHERS)]
    TooManyPhilosophers(u32),
}

/// Validated, immutable settings for one simulation run.
///
/// Build it with [`SimulationConfig::new`]; the fields are public for reading
/// but every constructor path goes through validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub philosophers: u32,
    pub time_to_die: Duration,
    pub time_to_eat: Duration,
    pub time_to_sleep: Duration,
    /// Meals every philosopher must eat before the run ends. `None` disables
    /// the completion check.
    pub meals_required: Option<u32>,
    pub monitor_interval: Duration,
}

impl SimulationConfig {
    /// Validates raw millisecond values.
    ///
    /// # Errors
    /// - [`ConfigError::NotPositive`] if any value (or the quota, when given) is zero
    /// - [`ConfigError::TooManyPhilosophers`] above [`MAX_PHILOSOPHERS`]
    pub fn new(
        philosophers: u32,
        time_to_die_ms: u64,
        time_to_eat_ms: u64,
        time_to_sleep_ms: u64,
        meals_required: Option<u32>,
    ) -> Result<Self, ConfigError> {
        if philosophers == 0 {
            return Err(ConfigError::NotPositive("number_of_philosophers"));
        }
        if time_to_die_ms == 0 {
            return Err(ConfigError::NotPositive("time_to_die"));
        }
        if time_to_eat_ms == 0 {
            return Err(ConfigError::NotPositive("time_to_eat"));
        }
        if time_to_sleep_ms == 0 {
            return Err(ConfigError::NotPositive("time_to_sleep"));
        }
        if meals_required == Some(0) {
            return Err(ConfigError::NotPositive(
                "number_of_times_each_philosopher_must_eat",
            ));
        }
        if philosophers > MAX_PHILOSOPHERS {
            return Err(ConfigError::TooManyPhilosophers(philosophers));
        }

        Ok(Self {
            philosophers,
            time_to_die: Duration::from_millis(time_to_die_ms),
            time_to_eat: Duration::from_millis(time_to_eat_ms),
            time_to_sleep: Duration::from_millis(time_to_sleep_ms),
            meals_required,
            monitor_interval: DEFAULT_MONITOR_INTERVAL,
        })
    }

    /// Replaces the monitor polling interval. Anything shorter than the
    /// default is raised to it, since the timer cannot wake sooner.
    pub fn with_monitor_interval(mut self, interval: Duration) -> Self {
        self.monitor_interval = interval.max(DEFAULT_MONITOR_INTERVAL);
        self
    }

    /// Delay before an even-numbered philosopher's first cycle.
    pub fn stagger(&self) -> Duration {
        self.time_to_eat / 10
    }

    /// Pause a philosopher takes while thinking, given how long ago its last
    /// meal started.
    ///
    /// With an odd number of philosophers at most `(N - 1) / 2` can eat at
    /// once, so the table turns over in three meal slots. Each philosopher
    /// waits until three meals have passed since its own last one started,
    /// which lets a hungrier neighbour take the shared fork first. The
    /// target is anchored on the meal timestamp, so late timer wake-ups do
    /// not add up from one cycle to the next.
    ///
    /// With an even number the pause is half the amount eating outlasts
    /// sleeping, at least 1ms, and only when eating is the longer phase.
    ///
    /// Neither is needed for deadlock safety. The caller still skips the
    /// pause when it would carry the philosopher to its death deadline.
    pub fn think_pause(&self, hungry_ms: u64) -> Option<Duration> {
        if self.philosophers <= 1 {
            return None;
        }
        let eat_ms = self.time_to_eat.as_millis() as u64;
        let sleep_ms = self.time_to_sleep.as_millis() as u64;
        let pause_ms = if self.philosophers % 2 == 1 {
            (3 * eat_ms).saturating_sub(hungry_ms)
        } else if eat_ms > sleep_ms {
            ((eat_ms - sleep_ms) / 2).max(1)
        } else {
            0
        };
        (pause_ms > 0).then(|| Duration::from_millis(pause_ms))
    }
}
