//! # Burner Router Configuration

use crate::error::{RouterError, RouterResult};
use serde::{Deserialize, Serialize};
use shared_types::{is_zero_address, Address, DAY};

/// Receiver-change delay of the deployed router. Longer than an epoch so
/// stakers can finish unstaking before a redirect takes effect.
pub const DEFAULT_DELAY: u64 = 31 * DAY;

/// Delay applied to changes of the delay itself.
pub const DEFAULT_DELAY_CHANGE_DELAY: u64 = 7 * DAY;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkReceiver {
    pub network: Address,
    pub receiver: Address,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorNetworkReceiver {
    pub network: Address,
    pub operator: Address,
    pub receiver: Address,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnerRouterConfig {
    /// Identity the router holds collateral under.
    pub address: Address,
    pub collateral: Address,
    /// Delay for receiver changes, in seconds.
    pub delay: u64,
    pub delay_change_delay: u64,
    pub global_receiver: Address,
    #[serde(default)]
    pub network_receivers: Vec<NetworkReceiver>,
    #[serde(default)]
    pub operator_network_receivers: Vec<OperatorNetworkReceiver>,
}

impl Default for BurnerRouterConfig {
    fn default() -> Self {
        Self {
            address: [0u8; 20],
            collateral: [0u8; 20],
            delay: DEFAULT_DELAY,
            delay_change_delay: DEFAULT_DELAY_CHANGE_DELAY,
            global_receiver: [0u8; 20],
            network_receivers: Vec::new(),
            operator_network_receivers: Vec::new(),
        }
    }
}

impl BurnerRouterConfig {
    pub fn for_testing() -> Self {
        Self {
            address: [0xBE; 20],
            collateral: [0xC0; 20],
            global_receiver: [0x6E; 20],
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> RouterResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| RouterError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RouterResult<()> {
        if is_zero_address(&self.address) {
            return Err(RouterError::InvalidConfig {
                reason: "router address is null".to_string(),
            });
        }
        let receivers = std::iter::once(self.global_receiver)
            .chain(self.network_receivers.iter().map(|r| r.receiver))
            .chain(self.operator_network_receivers.iter().map(|r| r.receiver));
        for receiver in receivers {
            if is_zero_address(&receiver) {
                return Err(RouterError::InvalidReceiver);
            }
        }
        Ok(())
    }
}
