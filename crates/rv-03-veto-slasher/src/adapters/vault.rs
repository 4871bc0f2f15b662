//! Vault adapter.

use crate::error::SlasherResult;
use crate::ports::outbound::SlashableVault;
use rv_01_vault::ports::outbound::{AccessControl, CollateralToken, TimeSource};
use rv_01_vault::{VaultApi, VaultService};
use shared_types::{Address, Timestamp, U256};

impl<T, A, C> SlashableVault for VaultService<T, A, C>
where
    T: CollateralToken,
    A: AccessControl,
    C: TimeSource,
{
    fn address(&self) -> Address {
        VaultService::address(self)
    }

    fn epoch_duration(&self) -> u64 {
        VaultService::epoch_duration(self)
    }

    fn on_slash(
        &self,
        slasher: Address,
        amount: U256,
        capture_timestamp: Timestamp,
    ) -> SlasherResult<U256> {
        Ok(VaultApi::on_slash(self, slasher, amount, capture_timestamp)?)
    }
}
