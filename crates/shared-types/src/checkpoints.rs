//! # Checkpoint Traces
//!
//! Timestamp-keyed history of a single `U256` value. Each mutation pushes the
//! new value at the current time; historical reads binary-search for the
//! last checkpoint at or before the queried timestamp.
//!
//! Used for active stake, active shares, per-account share balances, network
//! limits, operator shares, opt-in flags and cumulative slash history.

use crate::entities::{Timestamp, U256};
use crate::errors::CheckpointError;
use serde::{Deserialize, Serialize};

/// A single `(key, value)` entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub key: Timestamp,
    pub value: U256,
}

/// Ordered checkpoint trace.
///
/// INVARIANT: keys are non-decreasing; at most one entry per key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoints {
    entries: Vec<Checkpoint>,
}

impl Checkpoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` at `key`. A push at the latest key overwrites it.
    ///
    /// # Errors
    /// - `UnorderedKey` if `key` precedes the latest checkpoint
    pub fn push(&mut self, key: Timestamp, value: U256) -> Result<(), CheckpointError> {
        match self.entries.last_mut() {
            Some(last) if last.key > key => {
                return Err(CheckpointError::UnorderedKey {
                    last: last.key,
                    key,
                })
            }
            Some(last) if last.key == key => last.value = value,
            _ => self.entries.push(Checkpoint { key, value }),
        }
        Ok(())
    }

    /// Latest value, zero when empty.
    pub fn latest(&self) -> U256 {
        self.entries.last().map(|c| c.value).unwrap_or_default()
    }

    /// Value of the last checkpoint with `key <= at`, zero if none.
    pub fn upper_lookup(&self, at: Timestamp) -> U256 {
        let idx = self.entries.partition_point(|c| c.key <= at);
        if idx == 0 {
            U256::zero()
        } else {
            self.entries[idx - 1].value
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
