//! Collateral token port.
//!
//! A standard fungible-asset ledger: balances, allowances and the two
//! transfer primitives the vault and router need. Transfers are atomic:
//! on error no balance or allowance changes.

use crate::entities::{is_zero_address, Address, U256};
use crate::errors::TokenError;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Fungible collateral ledger.
pub trait CollateralToken: Send + Sync {
    fn balance_of(&self, account: &Address) -> U256;

    /// Moves `amount` from `from` to `to`, authorised by `from` itself.
    fn transfer(&self, from: &Address, to: &Address, amount: U256) -> Result<(), TokenError>;

    /// Moves `amount` from `from` to `to` using `spender`'s allowance.
    fn transfer_from(
        &self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), TokenError>;
}

#[derive(Debug, Default)]
struct LedgerState {
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
    total_supply: U256,
}

impl LedgerState {
    fn balance(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn move_balance(&mut self, from: &Address, to: &Address, amount: U256) -> Result<(), TokenError> {
        if is_zero_address(to) {
            return Err(TokenError::InvalidReceiver);
        }
        let available = self.balance(from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                required: amount,
                available,
            });
        }
        let credited = self
            .balance(to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        if from == to {
            return Ok(());
        }
        self.balances.insert(*from, available - amount);
        self.balances.insert(*to, credited);
        Ok(())
    }
}

/// In-memory collateral ledger.
#[derive(Debug, Default)]
pub struct InMemoryCollateral {
    state: RwLock<LedgerState>,
}

impl InMemoryCollateral {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `amount` new units for `to`.
    pub fn mint(&self, to: &Address, amount: U256) -> Result<(), TokenError> {
        if is_zero_address(to) {
            return Err(TokenError::InvalidReceiver);
        }
        let mut state = self.state.write();
        let supply = state
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        let balance = state.balance(to) + amount;
        state.total_supply = supply;
        state.balances.insert(*to, balance);
        Ok(())
    }

    /// Sets `spender`'s allowance over `owner`'s balance.
    pub fn approve(&self, owner: &Address, spender: &Address, amount: U256) {
        self.state.write().allowances.insert((*owner, *spender), amount);
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.state
            .read()
            .allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.state.read().total_supply
    }
}

impl CollateralToken for InMemoryCollateral {
    fn balance_of(&self, account: &Address) -> U256 {
        self.state.read().balance(account)
    }

    fn transfer(&self, from: &Address, to: &Address, amount: U256) -> Result<(), TokenError> {
        self.state.write().move_balance(from, to, amount)
    }

    fn transfer_from(
        &self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        let mut state = self.state.write();
        let approved = state
            .allowances
            .get(&(*from, *spender))
            .copied()
            .unwrap_or_default();
        if approved < amount {
            return Err(TokenError::InsufficientAllowance {
                required: amount,
                approved,
            });
        }
        state.move_balance(from, to, amount)?;
        if approved != U256::MAX {
            state.allowances.insert((*from, *spender), approved - amount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: Address = [0xA1; 20];
    const BOB: Address = [0xB0; 20];
    const VAULT: Address = [0x5A; 20];

    #[test]
    fn test_mint_and_transfer() {
        let token = InMemoryCollateral::new();
        token.mint(&ALICE, U256::from(1_000)).unwrap();

        token.transfer(&ALICE, &BOB, U256::from(400)).unwrap();

        assert_eq!(token.balance_of(&ALICE), U256::from(600));
        assert_eq!(token.balance_of(&BOB), U256::from(400));
        assert_eq!(token.total_supply(), U256::from(1_000));
    }

    #[test]
    fn test_failed_transfer_leaves_balances() {
        let token = InMemoryCollateral::new();
        token.mint(&ALICE, U256::from(100)).unwrap();

        let err = token.transfer(&ALICE, &BOB, U256::from(101)).unwrap_err();

        assert!(matches!(err, TokenError::InsufficientBalance { .. }));
        assert_eq!(token.balance_of(&ALICE), U256::from(100));
        assert_eq!(token.balance_of(&BOB), U256::zero());
    }

    #[test]
    fn test_transfer_from_consumes_allowance() {
        let token = InMemoryCollateral::new();
        token.mint(&ALICE, U256::from(1_000)).unwrap();
        token.approve(&ALICE, &VAULT, U256::from(700));

        token
            .transfer_from(&VAULT, &ALICE, &VAULT, U256::from(500))
            .unwrap();

        assert_eq!(token.allowance(&ALICE, &VAULT), U256::from(200));
        assert_eq!(token.balance_of(&VAULT), U256::from(500));

        let err = token
            .transfer_from(&VAULT, &ALICE, &VAULT, U256::from(300))
            .unwrap_err();
        assert!(matches!(err, TokenError::InsufficientAllowance { .. }));
    }

    #[test]
    fn test_transfer_to_zero_rejected() {
        let token = InMemoryCollateral::new();
        token.mint(&ALICE, U256::from(10)).unwrap();
        assert_eq!(
            token.transfer(&ALICE, &[0u8; 20], U256::from(1)),
            Err(TokenError::InvalidReceiver)
        );
    }
}
