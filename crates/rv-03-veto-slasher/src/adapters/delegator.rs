//! Delegator adapter.

use crate::error::SlasherResult;
use crate::ports::outbound::StakeProvider;
use rv_02_delegator::ports::outbound::{
    AccessControl, EntityRegistry, OptInService, TimeSource, VaultStake,
};
use rv_02_delegator::{DelegatorApi, DelegatorService};
use shared_types::{Address, Subnetwork, Timestamp, U256};

impl<V, R, O, A, C> StakeProvider for DelegatorService<V, R, O, A, C>
where
    V: VaultStake,
    R: EntityRegistry,
    O: OptInService,
    A: AccessControl,
    C: TimeSource,
{
    fn stake_at(
        &self,
        subnetwork: &Subnetwork,
        operator: &Address,
        timestamp: Timestamp,
    ) -> SlasherResult<U256> {
        Ok(DelegatorApi::stake_at(self, subnetwork, operator, timestamp)?)
    }
}
