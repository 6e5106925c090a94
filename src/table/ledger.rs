use crate::domain::{MealRecord, PhilosopherState};
use crate::framework::{Clock, SimulationError};
use parking_lot::Mutex;

/// Every philosopher's [`MealRecord`], behind one lock.
///
/// The owning philosopher writes its meal pair and its cycle state; the
/// monitor reads everything in one sweep and assigns the terminal states.
/// Nothing here is ever held across an `.await`.
pub struct MealLedger {
    records: Mutex<Vec<MealRecord>>,
}

impl MealLedger {
    /// Creates a record per philosopher, ids `1..=count`.
    pub fn new(count: u32) -> Result<Self, SimulationError> {
        let mut records = Vec::new();
        records
            .try_reserve_exact(count as usize)
            .map_err(|e| SimulationError::allocation("philosopher records", e))?;
        records.extend((1..=count).map(MealRecord::new));
        Ok(Self {
            records: Mutex::new(records),
        })
    }

    /// Stamps the start of a meal: `last_meal_ms = now`, `meals += 1`, state
    /// `Eating`, in one step. Returns the updated record.
    pub fn record_meal(&self, philosopher: u32, clock: &Clock) -> MealRecord {
        let mut records = self.records.lock();
        let record = &mut records[index(philosopher)];
        record.last_meal_ms = clock.now_ms();
        record.meals += 1;
        if !record.state.is_terminal() {
            record.state = PhilosopherState::Eating;
        }
        *record
    }

    /// Moves a philosopher to `state`. Terminal states stick: once `Dead` or
    /// `Full`, a record is not moved back into the cycle.
    pub fn set_state(&self, philosopher: u32, state: PhilosopherState) {
        let mut records = self.records.lock();
        let record = &mut records[index(philosopher)];
        if !record.state.is_terminal() {
            record.state = state;
        }
    }

    /// Milliseconds since `philosopher` last started eating.
    pub fn hungry_for(&self, philosopher: u32, clock: &Clock) -> u64 {
        let records = self.records.lock();
        records[index(philosopher)].hungry_for(clock.now_ms())
    }

    pub fn get(&self, philosopher: u32) -> MealRecord {
        self.records.lock()[index(philosopher)]
    }

    /// A consistent copy of all records together with the time it was taken.
    pub fn sweep(&self, clock: &Clock) -> (u64, Vec<MealRecord>) {
        let records = self.records.lock();
        (clock.now_ms(), records.clone())
    }

    pub fn snapshot(&self) -> Vec<MealRecord> {
        self.records.lock().clone()
    }
}

fn index(philosopher: u32) -> usize {
    philosopher as usize - 1
}
