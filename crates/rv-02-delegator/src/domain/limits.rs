//! Per-subnetwork stake limits.
//!
//! A network caps what it is willing to slash through `max`; the vault's
//! curator then sets the actual limit at or below that cap.

use crate::error::{DelegatorError, DelegatorResult};
use shared_types::{Checkpoints, Subnetwork, Timestamp, U256};
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct NetworkLimits {
    max: HashMap<Subnetwork, U256>,
    limit: HashMap<Subnetwork, Checkpoints>,
}

impl NetworkLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max(&self, subnetwork: &Subnetwork) -> U256 {
        self.max.get(subnetwork).copied().unwrap_or_default()
    }

    pub fn limit(&self, subnetwork: &Subnetwork) -> U256 {
        self.limit
            .get(subnetwork)
            .map(Checkpoints::latest)
            .unwrap_or_default()
    }

    pub fn limit_at(&self, subnetwork: &Subnetwork, ts: Timestamp) -> U256 {
        self.limit
            .get(subnetwork)
            .map(|trace| trace.upper_lookup(ts))
            .unwrap_or_default()
    }

    /// Sets the cap; a current limit above the new cap is lowered to it.
    pub fn set_max(&mut self, subnetwork: Subnetwork, amount: U256, now: Timestamp) -> DelegatorResult<()> {
        if self.max(&subnetwork) == amount {
            return Err(DelegatorError::AlreadySet);
        }
        if self.limit(&subnetwork) > amount {
            self.limit.entry(subnetwork).or_default().push(now, amount)?;
        }
        self.max.insert(subnetwork, amount);
        Ok(())
    }

    pub fn set_limit(&mut self, subnetwork: Subnetwork, amount: U256, now: Timestamp) -> DelegatorResult<()> {
        let max = self.max(&subnetwork);
        if amount > max {
            return Err(DelegatorError::ExceedsMaxNetworkLimit {
                requested: amount,
                max,
            });
        }
        if self.limit(&subnetwork) == amount {
            return Err(DelegatorError::AlreadySet);
        }
        self.limit.entry(subnetwork).or_default().push(now, amount)?;
        Ok(())
    }
}
