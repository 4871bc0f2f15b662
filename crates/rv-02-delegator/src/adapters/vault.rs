//! Vault stake adapter.

use crate::error::DelegatorResult;
use crate::ports::outbound::VaultStake;
use rv_01_vault::ports::outbound::{AccessControl, CollateralToken, TimeSource};
use rv_01_vault::{VaultApi, VaultService};
use shared_types::{Timestamp, U256};

impl<T, A, C> VaultStake for VaultService<T, A, C>
where
    T: CollateralToken,
    A: AccessControl,
    C: TimeSource,
{
    fn stake_at(&self, timestamp: Timestamp) -> DelegatorResult<U256> {
        Ok(VaultApi::stake_at(self, timestamp)?)
    }
}
