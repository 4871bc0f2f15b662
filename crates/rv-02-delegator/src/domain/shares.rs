//! Operator shares of a subnetwork's limit.

use crate::error::{DelegatorError, DelegatorResult};
use shared_types::math;
use shared_types::{Address, Checkpoints, Subnetwork, Timestamp, U256};
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct OperatorShares {
    shares: HashMap<(Subnetwork, Address), Checkpoints>,
    totals: HashMap<Subnetwork, Checkpoints>,
}

impl OperatorShares {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shares(&self, subnetwork: &Subnetwork, operator: &Address) -> U256 {
        self.shares
            .get(&(*subnetwork, *operator))
            .map(Checkpoints::latest)
            .unwrap_or_default()
    }

    pub fn shares_at(&self, subnetwork: &Subnetwork, operator: &Address, ts: Timestamp) -> U256 {
        self.shares
            .get(&(*subnetwork, *operator))
            .map(|trace| trace.upper_lookup(ts))
            .unwrap_or_default()
    }

    pub fn total(&self, subnetwork: &Subnetwork) -> U256 {
        self.totals
            .get(subnetwork)
            .map(Checkpoints::latest)
            .unwrap_or_default()
    }

    pub fn total_at(&self, subnetwork: &Subnetwork, ts: Timestamp) -> U256 {
        self.totals
            .get(subnetwork)
            .map(|trace| trace.upper_lookup(ts))
            .unwrap_or_default()
    }

    /// Replaces `operator`'s shares and adjusts the subnetwork total.
    pub fn set(
        &mut self,
        subnetwork: Subnetwork,
        operator: Address,
        shares: U256,
        now: Timestamp,
    ) -> DelegatorResult<()> {
        let old = self.shares(&subnetwork, &operator);
        if old == shares {
            return Err(DelegatorError::AlreadySet);
        }
        let total = math::checked_add(math::checked_sub(self.total(&subnetwork), old)?, shares)?;

        self.totals.entry(subnetwork).or_default().push(now, total)?;
        self.shares
            .entry((subnetwork, operator))
            .or_default()
            .push(now, shares)?;
        Ok(())
    }
}
