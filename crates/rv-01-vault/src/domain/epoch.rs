//! # Epoch Clock
//!
//! Pure arithmetic over wall-clock time and a fixed epoch duration. The
//! clock is anchored lazily: `start` is recorded on the first deposit and
//! never moves afterwards.

use serde::{Deserialize, Serialize};
use shared_types::{Epoch, Timestamp};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochClock {
    duration: u64,
    start: Option<Timestamp>,
}

impl EpochClock {
    pub fn new(duration: u64) -> Self {
        Self {
            duration,
            start: None,
        }
    }

    /// Fixes epoch zero at `now` if not already anchored.
    pub fn anchor(&mut self, now: Timestamp) {
        if self.start.is_none() {
            self.start = Some(now);
        }
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn start(&self) -> Option<Timestamp> {
        self.start
    }

    /// Epoch containing `ts`. Timestamps before the anchor (or an
    /// unanchored clock) map to epoch zero.
    pub fn epoch_at(&self, ts: Timestamp) -> Epoch {
        match self.start {
            Some(start) if self.duration > 0 => ts.saturating_sub(start) / self.duration,
            _ => 0,
        }
    }

    pub fn epoch_start(&self, epoch: Epoch) -> Timestamp {
        let start = self.start.unwrap_or_default();
        start.saturating_add(epoch.saturating_mul(self.duration))
    }

    pub fn current_epoch_start(&self, now: Timestamp) -> Timestamp {
        self.epoch_start(self.epoch_at(now))
    }

    pub fn next_epoch_start(&self, now: Timestamp) -> Timestamp {
        self.epoch_start(self.epoch_at(now) + 1)
    }

    /// `None` while still in epoch zero.
    pub fn previous_epoch_start(&self, now: Timestamp) -> Option<Timestamp> {
        self.epoch_at(now)
            .checked_sub(1)
            .map(|epoch| self.epoch_start(epoch))
    }
}
