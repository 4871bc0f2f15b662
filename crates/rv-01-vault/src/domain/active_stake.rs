//! # Active Stake Ledger
//!
//! Backing assets and outstanding shares of the currently staked
//! (non-withdrawing) positions. Every value is a checkpoint trace so the
//! slasher can read historical stake at a capture timestamp.
//!
//! Invariant: `shares == 0` implies `stake == 0`. The converse does not
//! hold after a full slash; share math stays defined through the virtual
//! offset in [`shared_types::math`].

use crate::error::VaultResult;
use shared_types::math::{self, Rounding};
use shared_types::{Address, Checkpoints, Timestamp, U256};
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct ActiveStakeLedger {
    stake: Checkpoints,
    shares: Checkpoints,
    shares_of: HashMap<Address, Checkpoints>,
}

impl ActiveStakeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stake(&self) -> U256 {
        self.stake.latest()
    }

    pub fn shares(&self) -> U256 {
        self.shares.latest()
    }

    pub fn shares_of(&self, account: &Address) -> U256 {
        self.shares_of
            .get(account)
            .map(Checkpoints::latest)
            .unwrap_or_default()
    }

    pub fn stake_at(&self, ts: Timestamp) -> U256 {
        self.stake.upper_lookup(ts)
    }

    pub fn shares_at(&self, ts: Timestamp) -> U256 {
        self.shares.upper_lookup(ts)
    }

    pub fn shares_of_at(&self, account: &Address, ts: Timestamp) -> U256 {
        self.shares_of
            .get(account)
            .map(|trace| trace.upper_lookup(ts))
            .unwrap_or_default()
    }

    /// Assets currently redeemable by `account`'s active shares.
    pub fn balance_of(&self, account: &Address) -> VaultResult<U256> {
        Ok(math::convert_to_assets(
            self.shares_of(account),
            self.stake(),
            self.shares(),
            Rounding::Floor,
        )?)
    }

    pub fn preview_deposit(&self, assets: U256) -> VaultResult<U256> {
        Ok(math::preview_deposit(assets, self.shares(), self.stake())?)
    }

    pub fn preview_withdraw(&self, assets: U256) -> VaultResult<U256> {
        Ok(math::preview_withdraw(assets, self.shares(), self.stake())?)
    }

    pub fn preview_redeem(&self, shares: U256) -> VaultResult<U256> {
        Ok(math::preview_redeem(shares, self.stake(), self.shares())?)
    }

    /// Credits `assets` of backing and `shares` to `account`.
    pub fn mint(
        &mut self,
        account: Address,
        assets: U256,
        shares: U256,
        now: Timestamp,
    ) -> VaultResult<()> {
        let stake = math::checked_add(self.stake(), assets)?;
        let total = math::checked_add(self.shares(), shares)?;
        let own = math::checked_add(self.shares_of(&account), shares)?;

        self.stake.push(now, stake)?;
        self.shares.push(now, total)?;
        self.shares_of.entry(account).or_default().push(now, own)?;
        Ok(())
    }

    /// Removes `assets` of backing and burns `shares` from `account`.
    pub fn burn(
        &mut self,
        account: Address,
        assets: U256,
        shares: U256,
        now: Timestamp,
    ) -> VaultResult<()> {
        let stake = math::checked_sub(self.stake(), assets)?;
        let total = math::checked_sub(self.shares(), shares)?;
        let own = math::checked_sub(self.shares_of(&account), shares)?;

        self.stake.push(now, stake)?;
        self.shares.push(now, total)?;
        self.shares_of.entry(account).or_default().push(now, own)?;
        Ok(())
    }

    /// Reduces backing without touching shares; the loss shows up in the
    /// share price.
    pub fn seize(&mut self, assets: U256, now: Timestamp) -> VaultResult<()> {
        let stake = math::checked_sub(self.stake(), assets)?;
        self.stake.push(now, stake)?;
        Ok(())
    }
}
