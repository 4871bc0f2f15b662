//! Events recorded by the Veto Slasher subsystem.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Subnetwork, Timestamp, U256};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlasherEvent {
    RequestSlash {
        index: u64,
        subnetwork: Subnetwork,
        operator: Address,
        amount: U256,
        capture_timestamp: Timestamp,
        veto_deadline: Timestamp,
    },
    VetoSlash {
        index: u64,
        resolver: Address,
    },
    ExecuteSlash {
        index: u64,
        slashed: U256,
    },
}
