//! Driving Ports (API - Inbound)
//!
//! Every mutating operation takes the caller identity explicitly.

use crate::error::VaultResult;
use crate::events::VaultEvent;
use shared_types::{Address, Epoch, Timestamp, U256};

/// Result of a deposit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositReceipt {
    pub deposited_amount: U256,
    pub minted_shares: U256,
}

/// Result of a withdraw or redeem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawalReceipt {
    /// Assets moved out of active stake.
    pub withdrawn_assets: U256,
    /// Active shares burned.
    pub burned_shares: U256,
    /// Withdrawal shares credited to the claimer.
    pub minted_shares: U256,
    /// Epoch whose bucket received the withdrawal.
    pub epoch: Epoch,
}

/// Primary Vault API
///
/// This is the driving port for the Vault subsystem.
pub trait VaultApi: Send + Sync {
    /// Deposit `amount` of collateral from `caller`, minting active shares to
    /// `on_behalf_of` at the current price.
    ///
    /// # Errors
    /// - `InsufficientDeposit`: zero amount, or amount worth zero shares
    /// - `InvalidOnBehalfOf`: null beneficiary
    /// - `NotWhitelistedDepositor`, `DepositLimitReached`: policy
    fn deposit(
        &self,
        caller: Address,
        on_behalf_of: Address,
        amount: U256,
    ) -> VaultResult<DepositReceipt>;

    /// Move `amount` of `caller`'s active stake into next epoch's
    /// withdrawal bucket for `claimer`.
    fn withdraw(
        &self,
        caller: Address,
        claimer: Address,
        amount: U256,
    ) -> VaultResult<WithdrawalReceipt>;

    /// Like `withdraw`, denominated in active shares.
    fn redeem(
        &self,
        caller: Address,
        claimer: Address,
        shares: U256,
    ) -> VaultResult<WithdrawalReceipt>;

    /// Pay out `caller`'s withdrawal for a matured `epoch` to `recipient`.
    fn claim(&self, caller: Address, recipient: Address, epoch: Epoch) -> VaultResult<U256>;

    /// Claim several matured epochs in one transfer.
    fn claim_batch(
        &self,
        caller: Address,
        recipient: Address,
        epochs: &[Epoch],
    ) -> VaultResult<U256>;

    /// Seize up to `amount` of the stake that was live at
    /// `capture_timestamp`, sending it to the burner. Slasher only.
    fn on_slash(
        &self,
        caller: Address,
        amount: U256,
        capture_timestamp: Timestamp,
    ) -> VaultResult<U256>;

    fn set_deposit_whitelist(&self, caller: Address, status: bool) -> VaultResult<()>;

    fn set_depositor_whitelist_status(
        &self,
        caller: Address,
        account: Address,
        status: bool,
    ) -> VaultResult<()>;

    fn set_is_deposit_limit(&self, caller: Address, status: bool) -> VaultResult<()>;

    fn set_deposit_limit(&self, caller: Address, limit: U256) -> VaultResult<()>;

    /// Active stake plus the current and next withdrawal buckets.
    fn total_stake(&self) -> VaultResult<U256>;

    /// Total stake as it stood at `timestamp`.
    fn stake_at(&self, timestamp: Timestamp) -> VaultResult<U256>;

    fn current_epoch(&self) -> Epoch;

    /// Take all events recorded since the last drain.
    fn drain_events(&self) -> Vec<VaultEvent>;
}
