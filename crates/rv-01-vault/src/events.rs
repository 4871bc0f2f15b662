//! Events recorded by the Vault subsystem on every committed operation.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Epoch, Timestamp, U256};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VaultEvent {
    Deposit {
        depositor: Address,
        on_behalf_of: Address,
        amount: U256,
        shares: U256,
    },
    /// Emitted by both `withdraw` and `redeem`.
    Withdraw {
        withdrawer: Address,
        claimer: Address,
        epoch: Epoch,
        amount: U256,
        burned_shares: U256,
        minted_shares: U256,
    },
    Claim {
        claimer: Address,
        recipient: Address,
        epoch: Epoch,
        amount: U256,
    },
    ClaimBatch {
        claimer: Address,
        recipient: Address,
        epochs: Vec<Epoch>,
        amount: U256,
    },
    OnSlash {
        amount: U256,
        capture_timestamp: Timestamp,
        slashed: U256,
    },
    SetDepositWhitelist {
        status: bool,
    },
    SetDepositorWhitelistStatus {
        account: Address,
        status: bool,
    },
    SetIsDepositLimit {
        status: bool,
    },
    SetDepositLimit {
        limit: U256,
    },
}
