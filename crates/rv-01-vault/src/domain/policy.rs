//! Deposit whitelist and limit settings.

use crate::error::{VaultError, VaultResult};
use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};
use std::collections::HashSet;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositPolicy {
    pub deposit_whitelist: bool,
    pub whitelisted: HashSet<Address>,
    pub is_deposit_limit: bool,
    pub deposit_limit: U256,
}

impl DepositPolicy {
    /// Checks `depositor` may add `amount` on top of `total_stake`.
    pub fn check_deposit(&self, depositor: &Address, total_stake: U256, amount: U256) -> VaultResult<()> {
        if self.deposit_whitelist && !self.whitelisted.contains(depositor) {
            return Err(VaultError::NotWhitelistedDepositor);
        }
        if self.is_deposit_limit {
            let would_reach = total_stake.saturating_add(amount);
            if would_reach > self.deposit_limit {
                return Err(VaultError::DepositLimitReached {
                    limit: self.deposit_limit,
                    would_reach,
                });
            }
        }
        Ok(())
    }

    pub fn set_deposit_whitelist(&mut self, status: bool) -> VaultResult<()> {
        if self.deposit_whitelist == status {
            return Err(VaultError::AlreadySet);
        }
        self.deposit_whitelist = status;
        Ok(())
    }

    pub fn set_whitelisted(&mut self, account: Address, status: bool) -> VaultResult<()> {
        let changed = if status {
            self.whitelisted.insert(account)
        } else {
            self.whitelisted.remove(&account)
        };
        if !changed {
            return Err(VaultError::AlreadySet);
        }
        Ok(())
    }

    pub fn set_is_deposit_limit(&mut self, status: bool) -> VaultResult<()> {
        if self.is_deposit_limit == status {
            return Err(VaultError::AlreadySet);
        }
        self.is_deposit_limit = status;
        Ok(())
    }

    pub fn set_deposit_limit(&mut self, limit: U256) -> VaultResult<()> {
        if self.deposit_limit == limit {
            return Err(VaultError::AlreadySet);
        }
        self.deposit_limit = limit;
        Ok(())
    }
}
