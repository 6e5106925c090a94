/// Where a philosopher is in its cycle.
///
/// `Dead` and `Full` are terminal and only ever assigned by the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhilosopherState {
    Thinking,
    Eating,
    Sleeping,
    Dead,
    Full,
}

impl PhilosopherState {
    pub fn is_terminal(self) -> bool {
        matches!(self, PhilosopherState::Dead | PhilosopherState::Full)
    }
}

/// One philosopher's mutable record.
///
/// The last meal timestamp and the meal count always change together, so
/// they live in one value and are read and written as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealRecord {
    /// 1-based philosopher id.
    pub id: u32,
    pub meals: u32,
    /// Milliseconds since the simulation start at which the last meal began.
    pub last_meal_ms: u64,
    pub state: PhilosopherState,
}

impl MealRecord {
    /// A philosopher that has not eaten yet; its deadline counts from the start.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            meals: 0,
            last_meal_ms: 0,
            state: PhilosopherState::Thinking,
        }
    }

    /// Milliseconds since the last meal started, as seen at `now_ms`.
    pub fn hungry_for(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.last_meal_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = MealRecord::new(3);
        assert_eq!(record.id, 3);
        assert_eq!(record.meals, 0);
        assert_eq!(record.state, PhilosopherState::Thinking);
        assert_eq!(record.hungry_for(120), 120);
    }

    #[test]
    fn test_hungry_for_saturates() {
        let record = MealRecord {
            last_meal_ms: 500,
            ..MealRecord::new(1)
        };
        assert_eq!(record.hungry_for(400), 0);
    }

    #[test]
    fn test_terminal_states() {
        assert!(PhilosopherState::Dead.is_terminal());
        assert!(PhilosopherState::Full.is_terminal());
        assert!(!PhilosopherState::Eating.is_terminal());
    }
}
