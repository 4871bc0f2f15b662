//! # Withdrawal Queue
//!
//! Per-epoch pools of withdrawal shares. `withdraw`/`redeem` in epoch `e`
//! credit bucket `e + 1`; the bucket becomes claimable once the current
//! epoch is past it, i.e. two epoch boundaries after the request.
//!
//! Each bucket keeps its own assets and shares, so slashing a bucket lowers
//! the price of its shares without touching per-account balances. Bucket
//! assets are also checkpointed so total stake can be read as of a past
//! timestamp.

use crate::error::{VaultError, VaultResult};
use serde::{Deserialize, Serialize};
use shared_types::math::{self, Rounding};
use shared_types::{Address, Checkpoints, Epoch, Timestamp, U256};
use std::collections::{BTreeMap, HashMap};

/// One epoch's withdrawal pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalBucket {
    /// Assets still held for this epoch.
    pub assets: U256,
    /// Sum of all accounts' withdrawal shares for this epoch.
    pub shares: U256,
}

impl WithdrawalBucket {
    pub fn shares_for(&self, assets: U256) -> VaultResult<U256> {
        Ok(math::convert_to_shares(
            assets,
            self.shares,
            self.assets,
            Rounding::Floor,
        )?)
    }

    pub fn assets_for(&self, shares: U256) -> VaultResult<U256> {
        Ok(math::convert_to_assets(
            shares,
            self.assets,
            self.shares,
            Rounding::Floor,
        )?)
    }
}

/// Settlement of one account's claim against one bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimQuote {
    pub epoch: Epoch,
    pub shares: U256,
    pub assets: U256,
}

#[derive(Clone, Debug, Default)]
pub struct WithdrawalQueue {
    buckets: BTreeMap<Epoch, WithdrawalBucket>,
    assets_history: HashMap<Epoch, Checkpoints>,
    shares_of: HashMap<(Epoch, Address), U256>,
}

impl WithdrawalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket(&self, epoch: Epoch) -> WithdrawalBucket {
        self.buckets.get(&epoch).copied().unwrap_or_default()
    }

    pub fn withdrawals(&self, epoch: Epoch) -> U256 {
        self.bucket(epoch).assets
    }

    /// Assets held for `epoch` as of `ts`.
    pub fn withdrawals_at(&self, epoch: Epoch, ts: Timestamp) -> U256 {
        self.assets_history
            .get(&epoch)
            .map(|trace| trace.upper_lookup(ts))
            .unwrap_or_default()
    }

    pub fn withdrawal_shares(&self, epoch: Epoch) -> U256 {
        self.bucket(epoch).shares
    }

    pub fn shares_of(&self, epoch: Epoch, account: &Address) -> U256 {
        self.shares_of
            .get(&(epoch, *account))
            .copied()
            .unwrap_or_default()
    }

    /// Assets `account` would receive for `epoch` at the bucket's price.
    pub fn withdrawals_of(&self, epoch: Epoch, account: &Address) -> VaultResult<U256> {
        self.bucket(epoch).assets_for(self.shares_of(epoch, account))
    }

    /// Adds `assets` to `epoch`'s bucket on behalf of `claimer`, returning
    /// the withdrawal shares minted.
    pub fn enqueue(
        &mut self,
        epoch: Epoch,
        claimer: Address,
        assets: U256,
        now: Timestamp,
    ) -> VaultResult<U256> {
        let bucket = self.bucket(epoch);
        let minted = bucket.shares_for(assets)?;
        let updated = WithdrawalBucket {
            assets: math::checked_add(bucket.assets, assets)?,
            shares: math::checked_add(bucket.shares, minted)?,
        };
        let own = math::checked_add(self.shares_of(epoch, &claimer), minted)?;

        self.store(epoch, updated, now)?;
        self.shares_of.insert((epoch, claimer), own);
        Ok(minted)
    }

    /// Prices `account`'s remaining shares in `epoch` without mutating.
    pub fn quote(&self, epoch: Epoch, account: &Address) -> VaultResult<ClaimQuote> {
        let shares = self.shares_of(epoch, account);
        let assets = self.bucket(epoch).assets_for(shares)?;
        Ok(ClaimQuote {
            epoch,
            shares,
            assets,
        })
    }

    /// Applies a quote: zeroes the account entry and removes the quoted
    /// assets and shares from the bucket.
    pub fn settle(
        &mut self,
        account: &Address,
        quote: &ClaimQuote,
        now: Timestamp,
    ) -> VaultResult<()> {
        if self.shares_of(quote.epoch, account) != quote.shares {
            return Err(VaultError::InsufficientClaim);
        }
        let bucket = self.bucket(quote.epoch);
        let updated = WithdrawalBucket {
            assets: math::checked_sub(bucket.assets, quote.assets)?,
            shares: math::checked_sub(bucket.shares, quote.shares)?,
        };
        self.store(quote.epoch, updated, now)?;
        self.shares_of.remove(&(quote.epoch, *account));
        Ok(())
    }

    /// Removes `assets` from `epoch`'s bucket, leaving its shares.
    pub fn seize(&mut self, epoch: Epoch, assets: U256, now: Timestamp) -> VaultResult<()> {
        if assets.is_zero() {
            return Ok(());
        }
        let mut bucket = self.bucket(epoch);
        bucket.assets = math::checked_sub(bucket.assets, assets)?;
        self.store(epoch, bucket, now)
    }

    fn store(&mut self, epoch: Epoch, bucket: WithdrawalBucket, now: Timestamp) -> VaultResult<()> {
        self.assets_history
            .entry(epoch)
            .or_default()
            .push(now, bucket.assets)?;
        self.buckets.insert(epoch, bucket);
        Ok(())
    }
}
