//! # Cumulative Slash State
//!
//! Per `(subnetwork, operator)` pair: the latest capture timestamp already
//! slashed, and a trace of the running total keyed by execution time.
//!
//! A capture at `t` may only seize what has not already been seized since
//! `t`:
//!
//! ```text
//! slashable(t) = stake(t) - min(cumulative - cumulative_at(t), stake(t))
//! ```
//!
//! New deposits raise `stake(t')` for later captures, so slashability
//! recharges against fresh backing.

use crate::error::SlasherResult;
use shared_types::math;
use shared_types::{Checkpoints, Timestamp, U256};

#[derive(Clone, Debug, Default)]
pub struct CumulativeSlash {
    latest_slashed_capture_timestamp: Timestamp,
    cumulative: Checkpoints,
}

impl CumulativeSlash {
    pub fn latest_slashed_capture_timestamp(&self) -> Timestamp {
        self.latest_slashed_capture_timestamp
    }

    pub fn total(&self) -> U256 {
        self.cumulative.latest()
    }

    pub fn total_at(&self, ts: Timestamp) -> U256 {
        self.cumulative.upper_lookup(ts)
    }

    /// Stake still slashable for a capture at `capture`, given `stake` at
    /// that time.
    pub fn slashable(&self, stake: U256, capture: Timestamp) -> U256 {
        if capture <= self.latest_slashed_capture_timestamp {
            return U256::zero();
        }
        let since_capture = self.total().saturating_sub(self.total_at(capture));
        stake - since_capture.min(stake)
    }

    /// Records an execution at `now` that seized `slashed` for `capture`.
    pub fn record(&mut self, capture: Timestamp, slashed: U256, now: Timestamp) -> SlasherResult<()> {
        let total = math::checked_add(self.total(), slashed)?;
        self.cumulative.push(now, total)?;
        self.latest_slashed_capture_timestamp = self.latest_slashed_capture_timestamp.max(capture);
        Ok(())
    }
}
