//! # Vault Lifecycle Flows
//!
//! Deposit, withdraw, redeem and claim against a live epoch clock, with no
//! slashing involved.

#[cfg(test)]
mod tests {
    use crate::harness::*;
    use rv_01_vault::{VaultApi, VaultError, VaultEvent};
    use shared_types::{DAY, U256};

    #[test]
    fn test_round_trip_returns_full_deposit() {
        let d = Deployment::new();
        d.deposit(ALICE, 1_000);

        let receipt = d.vault.withdraw(ALICE, ALICE, U256::from(1_000)).unwrap();
        assert_eq!(receipt.epoch, 1);
        assert_eq!(d.vault.active_stake(), U256::zero());

        d.advance(2 * EPOCH);
        assert_eq!(d.vault.claim(ALICE, ALICE, 1).unwrap(), U256::from(1_000));
        assert_eq!(d.balance(&ALICE), U256::from(1_000));
        assert_eq!(d.balance(&d.vault.address()), U256::zero());
    }

    #[test]
    fn test_partial_withdrawal_claimed_after_epoch_rolls() {
        let d = Deployment::new();
        d.deposit(ALICE, 2_000);

        d.advance(DAY);
        d.vault.withdraw(ALICE, ALICE, U256::from(1_500)).unwrap();
        assert_eq!(d.vault.active_balance_of(&ALICE).unwrap(), U256::from(500));
        assert_eq!(d.vault.withdrawals(1), U256::from(1_500));

        // Still inside epoch 1: the bucket is not claimable yet.
        d.time.set(START + EPOCH + 1);
        assert_eq!(
            d.vault.claim(ALICE, ALICE, 1),
            Err(VaultError::InvalidEpoch {
                epoch: 1,
                current: 1
            })
        );

        d.time.set(START + 2 * EPOCH + 1);
        assert_eq!(d.vault.claim(ALICE, ALICE, 1).unwrap(), U256::from(1_500));
        assert_eq!(d.balance(&ALICE), U256::from(1_500));
        assert_eq!(d.vault.active_balance_of(&ALICE).unwrap(), U256::from(500));
        assert_eq!(d.vault.claim(ALICE, ALICE, 1), Err(VaultError::InsufficientClaim));
    }

    #[test]
    fn test_claim_to_third_party_and_batch() {
        let d = Deployment::new();
        d.deposit(ALICE, 900);

        d.vault.withdraw(ALICE, BOB, U256::from(300)).unwrap();
        d.advance(EPOCH);
        d.vault.redeem(ALICE, BOB, U256::from(300)).unwrap();
        d.advance(2 * EPOCH);

        assert_eq!(d.vault.withdrawals_of(1, &BOB).unwrap(), U256::from(300));
        assert_eq!(d.vault.withdrawals_of(2, &BOB).unwrap(), U256::from(300));

        let claimed = d.vault.claim_batch(BOB, CAROL, &[1, 2]).unwrap();
        assert_eq!(claimed, U256::from(600));
        assert_eq!(d.balance(&CAROL), U256::from(600));
        assert_eq!(d.vault.active_balance_of(&ALICE).unwrap(), U256::from(300));
    }

    #[test]
    fn test_two_depositors_keep_their_prices() {
        let d = Deployment::new();
        let alice_shares = d.deposit(ALICE, 1_000);
        d.advance(DAY);
        let bob_shares = d.deposit(BOB, 3_000);

        assert_eq!(alice_shares, U256::from(1_000));
        assert_eq!(bob_shares, U256::from(3_000));
        assert_eq!(d.vault.total_stake().unwrap(), U256::from(4_000));
        assert_eq!(d.vault.active_stake_at(START), U256::from(1_000));
    }

    #[test]
    fn test_deposit_limit_enforced_end_to_end() {
        let d = Deployment::new();
        let admin = [0xAD; 20];
        d.access
            .grant_role(shared_types::Role::IsDepositLimitSet, admin);
        d.access.grant_role(shared_types::Role::DepositLimitSet, admin);
        d.vault.set_deposit_limit(admin, U256::from(1_500)).unwrap();
        d.vault.set_is_deposit_limit(admin, true).unwrap();

        d.deposit(ALICE, 1_000);
        d.token.mint(&BOB, U256::from(600)).unwrap();
        d.token.approve(&BOB, &d.vault.address(), U256::from(600));
        assert!(matches!(
            d.vault.deposit(BOB, BOB, U256::from(600)),
            Err(VaultError::DepositLimitReached { .. })
        ));
        assert_eq!(d.balance(&BOB), U256::from(600));

        let events = d.vault.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, VaultEvent::SetDepositLimit { .. })));
    }
}
