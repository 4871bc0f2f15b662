//! Driving Ports (API - Inbound)

use crate::error::RouterResult;
use shared_types::{Address, Subnetwork, Timestamp, U256};

/// Primary Burner Router API
pub trait BurnerRouterApi: Send + Sync {
    /// Burner hook: attributes newly arrived collateral to the receiver
    /// resolved for `(subnetwork.network, operator)`. Returns the amount
    /// credited.
    fn on_slash(
        &self,
        subnetwork: &Subnetwork,
        operator: &Address,
        amount: U256,
        capture_timestamp: Timestamp,
    ) -> RouterResult<U256>;

    /// Pays out everything owed to `receiver`. Callable by anyone.
    fn trigger_transfer(&self, receiver: Address) -> RouterResult<U256>;

    fn set_global_receiver(&self, caller: Address, receiver: Address) -> RouterResult<()>;

    fn accept_global_receiver(&self) -> RouterResult<()>;

    /// `None` schedules removal of the override.
    fn set_network_receiver(
        &self,
        caller: Address,
        network: Address,
        receiver: Option<Address>,
    ) -> RouterResult<()>;

    fn accept_network_receiver(&self, network: Address) -> RouterResult<()>;

    fn set_operator_network_receiver(
        &self,
        caller: Address,
        network: Address,
        operator: Address,
        receiver: Option<Address>,
    ) -> RouterResult<()>;

    fn accept_operator_network_receiver(
        &self,
        network: Address,
        operator: Address,
    ) -> RouterResult<()>;

    fn set_delay(&self, caller: Address, delay: u64) -> RouterResult<()>;

    fn accept_delay(&self) -> RouterResult<()>;
}
