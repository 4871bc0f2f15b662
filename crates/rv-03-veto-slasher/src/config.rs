//! # Veto Slasher Configuration

use crate::error::{SlasherError, SlasherResult};
use serde::{Deserialize, Serialize};
use shared_types::{is_zero_address, short_hex, Address, DAY};

/// Veto window of the deployed slasher.
pub const DEFAULT_VETO_DURATION: u64 = 3 * DAY;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlasherConfig {
    /// Identity the slasher calls the vault with.
    pub address: Address,
    /// Vault the slasher is wired to.
    pub vault: Address,
    /// Veto window in seconds.
    pub veto_duration: u64,
}

impl Default for SlasherConfig {
    fn default() -> Self {
        Self {
            address: [0u8; 20],
            vault: [0u8; 20],
            veto_duration: DEFAULT_VETO_DURATION,
        }
    }
}

impl SlasherConfig {
    pub fn for_testing() -> Self {
        Self {
            address: [0x51; 20],
            vault: [0x5A; 20],
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> SlasherResult<Self> {
        serde_json::from_str(json).map_err(|e| SlasherError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Checks the config against the vault it is wired to.
    pub fn validate(&self, vault: Address, epoch_duration: u64) -> SlasherResult<()> {
        if is_zero_address(&self.address) {
            return Err(SlasherError::InvalidConfig {
                reason: "slasher address is null".to_string(),
            });
        }
        if self.vault != vault {
            return Err(SlasherError::InvalidConfig {
                reason: format!(
                    "configured vault {} does not match wired vault {}",
                    short_hex(&self.vault),
                    short_hex(&vault)
                ),
            });
        }
        if self.veto_duration >= epoch_duration {
            return Err(SlasherError::InvalidConfig {
                reason: format!(
                    "veto_duration {} must be shorter than epoch_duration {}",
                    self.veto_duration, epoch_duration
                ),
            });
        }
        Ok(())
    }
}
