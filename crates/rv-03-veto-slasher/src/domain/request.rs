//! # Slash Requests
//!
//! ```text
//! [Requested] ──veto (before deadline)──→ [Vetoed]
//!      │
//!      └──execute (after deadline)──→ [Executed { slashed }]
//! ```
//!
//! Both outcomes are terminal; a completed request is never reopened.

use crate::error::{SlasherError, SlasherResult};
use serde::{Deserialize, Serialize};
use shared_types::{Address, Subnetwork, Timestamp, U256};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestState {
    Requested,
    Vetoed,
    Executed { slashed: U256 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashRequest {
    pub subnetwork: Subnetwork,
    pub operator: Address,
    /// Requested amount, already capped to the slashable stake at request
    /// time.
    pub amount: U256,
    pub capture_timestamp: Timestamp,
    pub veto_deadline: Timestamp,
    pub state: RequestState,
}

impl SlashRequest {
    pub fn completed(&self) -> bool {
        self.state != RequestState::Requested
    }

    pub fn veto(&mut self, now: Timestamp) -> SlasherResult<()> {
        if self.completed() {
            return Err(SlasherError::SlashRequestCompleted);
        }
        if now >= self.veto_deadline {
            return Err(SlasherError::VetoPeriodEnded);
        }
        self.state = RequestState::Vetoed;
        Ok(())
    }

    /// Checks the request may be executed at `now`.
    pub fn check_executable(&self, now: Timestamp, epoch_duration: u64) -> SlasherResult<()> {
        if self.completed() {
            return Err(SlasherError::SlashRequestCompleted);
        }
        if now < self.veto_deadline {
            return Err(SlasherError::VetoPeriodNotEnded);
        }
        if now.saturating_sub(self.capture_timestamp) > epoch_duration {
            return Err(SlasherError::SlashPeriodEnded);
        }
        Ok(())
    }

    pub fn mark_executed(&mut self, slashed: U256) {
        self.state = RequestState::Executed { slashed };
    }
}
