//! # Fork Ring
//!
//! N exclusive slots arranged in a cycle. Philosopher `id` (1-based) sits
//! between slot `id - 1` (its left fork) and slot `id % N` (its right fork),
//! so every slot is shared by two neighbours. With a single philosopher there
//! is no right fork at all.
//!
//! Slots are plain indices into a vector; the cycle is the adjacency rule, not
//! a pointer graph. Each slot is a [`tokio::sync::Mutex`] held through an owned
//! guard, so a fork is released whenever its guard drops, on every exit path.

use crate::framework::{SimulationError, StopSignal};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// The forks one philosopher may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub left: usize,
    pub right: Option<usize>,
}

impl Seat {
    /// Slots in the order this philosopher locks them.
    ///
    /// Even ids go left then right, odd ids right then left. Neighbours never
    /// share an order, which rules out the ring of philosophers each holding
    /// one fork and waiting on the next.
    /// `None` for a lone philosopher, who has no second fork.
    pub fn acquisition_order(&self, philosopher: u32) -> Option<[usize; 2]> {
        let right = self.right?;
        Some(if philosopher % 2 == 0 {
            [self.left, right]
        } else {
            [right, self.left]
        })
    }
}

/// A fork currently held by a philosopher.
#[derive(Debug)]
pub struct ForkGuard {
    index: usize,
    _guard: OwnedMutexGuard<()>,
}

impl ForkGuard {
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Both forks held for a meal. Dropping it releases right, then left.
#[derive(Debug, Default)]
pub struct HeldForks {
    left: Option<ForkGuard>,
    right: Option<ForkGuard>,
}

impl HeldForks {
    pub(crate) fn new(left: ForkGuard, right: ForkGuard) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
        }
    }

    /// Indices of the held slots, left first.
    pub fn indices(&self) -> Vec<usize> {
        self.left
            .iter()
            .chain(self.right.iter())
            .map(ForkGuard::index)
            .collect()
    }
}

impl Drop for HeldForks {
    fn drop(&mut self) {
        drop(self.right.take());
        drop(self.left.take());
    }
}

pub struct ForkRing {
    slots: Vec<Arc<Mutex<()>>>,
}

impl ForkRing {
    /// Creates `count` free forks.
    ///
    /// # Errors
    /// [`SimulationError::Allocation`] if the slot vector cannot be reserved.
    pub fn new(count: u32) -> Result<Self, SimulationError> {
        let count = count as usize;
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(count)
            .map_err(|e| SimulationError::allocation("forks", e))?;
        slots.extend((0..count).map(|_| Arc::new(Mutex::new(()))));
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Forks adjacent to philosopher `philosopher` (1-based).
    pub fn seat(&self, philosopher: u32) -> Seat {
        let n = self.slots.len();
        let left = (philosopher as usize - 1) % n;
        let right = (n > 1).then(|| philosopher as usize % n);
        Seat { left, right }
    }

    /// Waits for slot `index`, giving up if the simulation stops first.
    ///
    /// Returns `None` when interrupted; nothing is held in that case.
    pub async fn take(&self, index: usize, stop: &StopSignal) -> Option<ForkGuard> {
        let slot = self.slots[index].clone();
        tokio::select! {
            biased;
            _ = stop.stopped() => None,
            guard = slot.lock_owned() => Some(ForkGuard { index, _guard: guard }),
        }
    }

    /// Returns `true` if nobody holds slot `index` right now.
    pub fn is_free(&self, index: usize) -> bool {
        self.slots[index].try_lock().is_ok()
    }
}
