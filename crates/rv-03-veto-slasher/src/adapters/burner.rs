//! Burner router adapter.

use crate::error::SlasherResult;
use crate::ports::outbound::BurnerHook;
use rv_04_burner_router::ports::outbound::{AccessControl, CollateralToken, TimeSource};
use rv_04_burner_router::{BurnerRouterApi, BurnerRouterService};
use shared_types::{Address, Subnetwork, Timestamp, U256};

impl<T, A, C> BurnerHook for BurnerRouterService<T, A, C>
where
    T: CollateralToken,
    A: AccessControl,
    C: TimeSource,
{
    fn on_slash(
        &self,
        subnetwork: &Subnetwork,
        operator: &Address,
        amount: U256,
        capture_timestamp: Timestamp,
    ) -> SlasherResult<()> {
        BurnerRouterApi::on_slash(self, subnetwork, operator, amount, capture_timestamp)?;
        Ok(())
    }
}
