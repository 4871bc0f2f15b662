//! # Delegator Configuration

use crate::error::{DelegatorError, DelegatorResult};
use serde::{Deserialize, Serialize};
use shared_types::{is_zero_address, Address};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorConfig {
    /// Identity operators and networks opt in to.
    pub address: Address,
    /// Vault whose stake is delegated.
    pub vault: Address,
}

impl DelegatorConfig {
    pub fn for_testing() -> Self {
        Self {
            address: [0xDE; 20],
            vault: [0x5A; 20],
        }
    }

    pub fn from_json(json: &str) -> DelegatorResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| DelegatorError::InvalidConfig {
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DelegatorResult<()> {
        if is_zero_address(&self.vault) {
            return Err(DelegatorError::InvalidConfig {
                reason: "vault address is null".to_string(),
            });
        }
        Ok(())
    }
}
