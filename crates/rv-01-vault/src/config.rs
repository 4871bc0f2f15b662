//! # Vault Configuration

use crate::error::{VaultError, VaultResult};
use serde::{Deserialize, Serialize};
use shared_types::{is_zero_address, Address, DAY, U256};

/// Epoch length of the deployed vault.
pub const DEFAULT_EPOCH_DURATION: u64 = 14 * DAY;

/// Vault configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Identity the vault holds collateral under.
    pub address: Address,
    /// Collateral token identity.
    pub collateral: Address,
    /// Destination of seized assets.
    pub burner: Address,
    /// Only caller allowed into `on_slash`.
    pub slasher: Address,
    /// Epoch length in seconds.
    pub epoch_duration: u64,
    /// Initial whitelist flag.
    pub deposit_whitelist: bool,
    /// Initial deposit-limit flag.
    pub is_deposit_limit: bool,
    /// Initial deposit limit.
    pub deposit_limit: U256,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            address: [0u8; 20],
            collateral: [0u8; 20],
            burner: [0u8; 20],
            slasher: [0u8; 20],
            epoch_duration: DEFAULT_EPOCH_DURATION,
            deposit_whitelist: false,
            is_deposit_limit: false,
            deposit_limit: U256::zero(),
        }
    }
}

impl VaultConfig {
    /// Create a config for testing (fixed identities, 7-day epochs).
    pub fn for_testing() -> Self {
        Self {
            address: [0x5A; 20],
            collateral: [0xC0; 20],
            burner: [0xBE; 20],
            slasher: [0x51; 20],
            epoch_duration: 7 * DAY,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> VaultResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| VaultError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> VaultResult<()> {
        let invalid = |reason: &str| {
            Err(VaultError::InvalidConfig {
                reason: reason.to_string(),
            })
        };
        if self.epoch_duration == 0 {
            return invalid("epoch_duration must be positive");
        }
        if is_zero_address(&self.address) {
            return invalid("vault address is null");
        }
        if is_zero_address(&self.burner) {
            return invalid("burner address is null");
        }
        Ok(())
    }
}
