//! Outbound (Driven) ports for the Veto Slasher subsystem.

use crate::error::SlasherResult;
use shared_types::{Address, Subnetwork, Timestamp, U256};

pub use shared_types::{AccessControl, TimeSource};

/// The vault being slashed.
///
/// Provided by Subsystem 1 (Vault).
pub trait SlashableVault: Send + Sync {
    fn address(&self) -> Address;

    fn epoch_duration(&self) -> u64;

    /// Seizes up to `amount` of the stake live at `capture_timestamp`,
    /// returning what was actually seized.
    fn on_slash(
        &self,
        slasher: Address,
        amount: U256,
        capture_timestamp: Timestamp,
    ) -> SlasherResult<U256>;
}

/// Operator stake per subnetwork.
///
/// Provided by Subsystem 2 (Delegator).
pub trait StakeProvider: Send + Sync {
    fn stake_at(
        &self,
        subnetwork: &Subnetwork,
        operator: &Address,
        timestamp: Timestamp,
    ) -> SlasherResult<U256>;
}

/// Notified after each executed slash.
///
/// Provided by Subsystem 4 (Burner Router).
pub trait BurnerHook: Send + Sync {
    fn on_slash(
        &self,
        subnetwork: &Subnetwork,
        operator: &Address,
        amount: U256,
        capture_timestamp: Timestamp,
    ) -> SlasherResult<()>;
}
