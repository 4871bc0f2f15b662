//! Driving Ports (API - Inbound)

use crate::error::DelegatorResult;
use shared_types::{Address, Subnetwork, Timestamp, U256};

/// Primary Delegator API
pub trait DelegatorApi: Send + Sync {
    /// Set the most a network is willing to have delegated to `subnetwork`.
    ///
    /// Callable only by `subnetwork.network`, which must be registered.
    fn set_max_network_limit(
        &self,
        caller: Address,
        subnetwork: Subnetwork,
        amount: U256,
    ) -> DelegatorResult<()>;

    /// Set the stake delegated to `subnetwork`, at most its max limit.
    fn set_network_limit(
        &self,
        caller: Address,
        subnetwork: Subnetwork,
        amount: U256,
    ) -> DelegatorResult<()>;

    /// Set `operator`'s shares of `subnetwork`'s limit.
    fn set_operator_network_shares(
        &self,
        caller: Address,
        subnetwork: Subnetwork,
        operator: Address,
        shares: U256,
    ) -> DelegatorResult<()>;

    /// Stake `operator` held for `subnetwork` at `timestamp`.
    fn stake_at(
        &self,
        subnetwork: &Subnetwork,
        operator: &Address,
        timestamp: Timestamp,
    ) -> DelegatorResult<U256>;

    /// Stake at the current time.
    fn stake(&self, subnetwork: &Subnetwork, operator: &Address) -> DelegatorResult<U256>;
}
