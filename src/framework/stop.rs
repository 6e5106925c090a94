//! # Termination Flag
//!
//! [`StopSignal`] is the single flag that ends a simulation. It starts unset,
//! can be claimed exactly once, and never goes back. The claim stores the
//! [`StopReason`], so whoever claims first decides how the run ended and every
//! later claim is a no-op.
//!
//! The cell is a [`tokio::sync::watch`] channel: reads borrow the current
//! value, a claim is a `send_if_modified` that only modifies an empty cell, and
//! waiters park on `wait_for` until a reason appears.

use std::fmt;
use tokio::sync::watch;

/// Why the simulation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// A philosopher went longer than `time_to_die` without eating.
    Starved { philosopher: u32 },
    /// Every philosopher reached the meal quota.
    AllFull,
    /// A task failed and the run was torn down.
    Aborted { reason: String },
    /// An external stop request (Ctrl-C, test harness).
    Interrupted,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Starved { philosopher } => write!(f, "philosopher {} starved", philosopher),
            StopReason::AllFull => write!(f, "all philosophers are full"),
            StopReason::Aborted { reason } => write!(f, "aborted: {}", reason),
            StopReason::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// Shared, claim-once termination flag.
#[derive(Debug)]
pub struct StopSignal {
    cell: watch::Sender<Option<StopReason>>,
}

impl StopSignal {
    pub fn new() -> Self {
        let (cell, _) = watch::channel(None);
        Self { cell }
    }

    /// Returns `true` once any task has claimed the flag.
    pub fn is_stopped(&self) -> bool {
        self.cell.borrow().is_some()
    }

    /// The stored reason, if the flag has been claimed.
    pub fn reason(&self) -> Option<StopReason> {
        self.cell.borrow().clone()
    }

    /// Sets the flag if nobody has yet.
    ///
    /// Returns `true` only for the caller that performed the transition. The
    /// check and the write happen under the channel's lock, so two tasks
    /// claiming in the same instant cannot both win.
    pub fn claim(&self, reason: StopReason) -> bool {
        self.cell.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(reason);
            true
        })
    }

    /// Resolves once the flag is set. Returns immediately if it already is.
    pub async fn stopped(&self) {
        let mut rx = self.cell.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = rx.wait_for(Option::is_some).await;
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_first_claim_wins() {
        let stop = StopSignal::new();
        assert!(!stop.is_stopped());
        assert_eq!(stop.reason(), None);

        assert!(stop.claim(StopReason::Starved { philosopher: 3 }));
        assert!(!stop.claim(StopReason::AllFull));
        assert!(!stop.claim(StopReason::Interrupted));

        assert!(stop.is_stopped());
        assert_eq!(stop.reason(), Some(StopReason::Starved { philosopher: 3 }));
    }

    #[tokio::test]
    async fn test_concurrent_claims_have_one_winner() {
        let stop = Arc::new(StopSignal::new());
        let mut handles = vec![];
        for philosopher in 1..=32 {
            let stop = stop.clone();
            handles.push(tokio::spawn(async move {
                stop.claim(StopReason::Starved { philosopher })
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopped_wakes_waiter() {
        let stop = Arc::new(StopSignal::new());
        let waiter = {
            let stop = stop.clone();
            tokio::spawn(async move { stop.stopped().await })
        };

        tokio::time::sleep(Duration::from_millis(5)).await;
        assert!(!waiter.is_finished());

        stop.claim(StopReason::Interrupted);
        waiter.await.unwrap();
    }

    #[tokio::test]
    async fn test_stopped_returns_when_already_set() {
        let stop = StopSignal::new();
        stop.claim(StopReason::AllFull);
        stop.stopped().await;
    }
}
