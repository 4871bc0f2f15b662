//! # Core Domain Entities
//!
//! Identities and scalar types used by every restaking subsystem.
//!
//! - **Identity**: `Address` (20 bytes), `Subnetwork` (network + identifier)
//! - **Amounts**: `U256` asset and share units
//! - **Time**: `Timestamp` seconds, `Epoch` numbers

use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export the wide integers from primitive-types for use across all subsystems
pub use primitive_types::{U256, U512};

/// A 20-byte account address.
pub type Address = [u8; 20];

/// The null identity. Never a valid beneficiary, claimer or receiver.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// Wall-clock time in seconds.
pub type Timestamp = u64;

/// Epoch number counted from the vault's epoch-zero anchor.
pub type Epoch = u64;

/// Returns true for the null identity.
pub fn is_zero_address(address: &Address) -> bool {
    *address == ZERO_ADDRESS
}

/// Abbreviated hex rendering of an address for log fields.
pub fn short_hex(address: &Address) -> String {
    format!("0x{}", hex::encode(&address[..4]))
}

/// A network together with one of its sub-identifiers.
///
/// Slash requests, stake limits and receivers are scoped to a subnetwork
/// rather than to the bare network address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Subnetwork {
    /// The network that owns this subnetwork.
    pub network: Address,
    /// Identifier within the network.
    pub identifier: u64,
}

impl Subnetwork {
    pub fn new(network: Address, identifier: u64) -> Self {
        Self {
            network,
            identifier,
        }
    }

    /// Packed 32-byte form: network address followed by a big-endian
    /// 12-byte identifier.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[..20].copy_from_slice(&self.network);
        out[24..].copy_from_slice(&self.identifier.to_be_bytes());
        out
    }
}

impl fmt::Display for Subnetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}/{}", hex::encode(self.network), self.identifier)
    }
}
