//! # Delayed Settings
//!
//! Two-step timelocked configuration: a setter proposes a value that only
//! becomes current once an `accept` arrives at or after `ready_at`.
//!
//! ```text
//! propose(v) ──→ [pending v, ready_at = now + delay] ──accept (now ≥ ready_at)──→ current = v
//!      ↑                   │
//!      └── propose(w) ─────┘ (overwrites)
//! ```

use crate::error::{RouterError, RouterResult};
use serde::{Deserialize, Serialize};
use shared_types::Timestamp;

/// A proposed value and the earliest time it may be committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingChange<T> {
    pub new_value: T,
    pub ready_at: Timestamp,
}

/// A committed value with at most one pending replacement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedSlot<T> {
    current: T,
    pending: Option<PendingChange<T>>,
}

impl<T: Clone + PartialEq> DelayedSlot<T> {
    pub fn new(current: T) -> Self {
        Self {
            current,
            pending: None,
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn pending(&self) -> Option<&PendingChange<T>> {
        self.pending.as_ref()
    }

    /// Schedules `value` to become current after `delay`.
    ///
    /// # Errors
    /// - `AlreadySet` if `value` is already current or already pending
    pub fn propose(&mut self, value: T, now: Timestamp, delay: u64) -> RouterResult<()> {
        let already_pending = self
            .pending
            .as_ref()
            .is_some_and(|p| p.new_value == value);
        if self.current == value || already_pending {
            return Err(RouterError::AlreadySet);
        }
        self.pending = Some(PendingChange {
            new_value: value,
            ready_at: now.saturating_add(delay),
        });
        Ok(())
    }

    /// Commits the pending value, returning it.
    ///
    /// # Errors
    /// - `NotReady` if nothing is pending or `now < ready_at`
    pub fn accept(&mut self, now: Timestamp) -> RouterResult<T> {
        match self.pending.take() {
            Some(change) if now >= change.ready_at => {
                self.current = change.new_value.clone();
                Ok(change.new_value)
            }
            other => {
                let ready_at = other.as_ref().map(|c| c.ready_at);
                self.pending = other;
                Err(RouterError::NotReady { ready_at, now })
            }
        }
    }
}
