//! Outbound (Driven) ports for the Delegator subsystem.

use crate::error::DelegatorResult;
use shared_types::{Timestamp, U256};

pub use shared_types::{AccessControl, EntityRegistry, OptInService, TimeSource};

/// Backing stake of the delegated vault.
///
/// Provided by Subsystem 1 (Vault).
pub trait VaultStake: Send + Sync {
    /// Vault stake that was live at `timestamp`, under the same bucket scope
    /// the vault applies when seizing.
    fn stake_at(&self, timestamp: Timestamp) -> DelegatorResult<U256>;
}
