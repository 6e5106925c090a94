use std::fmt;

/// Something a philosopher did that is worth printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    TookFork,
    Eating,
    Sleeping,
    Thinking,
    Died,
}

impl Event {
    /// The text printed for this event.
    pub fn message(self) -> &'static str {
        match self {
            Event::TookFork => "has taken a fork",
            Event::Eating => "is eating",
            Event::Sleeping => "is sleeping",
            Event::Thinking => "is thinking",
            Event::Died => "died",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A timestamped event, rendered as `<elapsed_ms> <philosopher> <event>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventLine {
    pub elapsed_ms: u64,
    pub philosopher: u32,
    pub event: Event,
}

impl fmt::Display for EventLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.elapsed_ms, self.philosopher, self.event)
    }
}
