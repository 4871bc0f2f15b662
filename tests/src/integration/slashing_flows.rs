//! # Slashing Flows
//!
//! Middleware requests, resolver vetoes and executions flowing from the veto
//! slasher through the delegator's stake view into the vault and on to the
//! burner router.

#[cfg(test)]
mod tests {
    use crate::harness::*;
    use rv_01_vault::VaultApi;
    use rv_02_delegator::DelegatorApi;
    use rv_03_veto_slasher::{RequestState, SlasherError, SlasherEvent, VetoSlasherApi};
    use rv_04_burner_router::{BurnerRouterApi, RouterError};
    use shared_types::{DAY, U256};

    #[test]
    fn test_network_limit_caps_request() {
        let d = Deployment::new();
        d.deposit(ALICE, 10_000_000);
        d.delegate(2_000_000);
        d.advance(DAY);

        let capture = d.now() - 1;
        assert_eq!(
            d.delegator
                .stake_at(&subnetwork(), &OPERATOR, capture)
                .unwrap(),
            U256::from(2_000_000)
        );

        let index = d
            .slasher
            .request_slash(MIDDLEWARE, subnetwork(), OPERATOR, U256::from(10_000_000), capture)
            .unwrap();
        assert_eq!(
            d.slasher.slash_request(index).unwrap().amount,
            U256::from(2_000_000)
        );

        d.advance(VETO);
        let slashed = d.slasher.execute_slash(MIDDLEWARE, index).unwrap();
        assert_eq!(slashed, U256::from(2_000_000));
        assert_eq!(d.vault.active_stake(), U256::from(8_000_000));
        assert_eq!(d.balance(&d.router.address()), U256::from(2_000_000));
    }

    #[test]
    fn test_current_epoch_slash_splits_active_and_next_bucket() {
        let d = Deployment::new();
        d.deposit(ALICE, 2_000);
        d.vault.withdraw(ALICE, ALICE, U256::from(500)).unwrap();
        d.delegate(1_000_000);

        d.advance(DAY);
        let capture = START + 1;
        let index = d
            .slasher
            .request_slash(MIDDLEWARE, subnetwork(), OPERATOR, U256::from(500), capture)
            .unwrap();
        d.advance(VETO);
        assert_eq!(d.vault.current_epoch(), 0);

        assert_eq!(
            d.slasher.execute_slash(MIDDLEWARE, index).unwrap(),
            U256::from(500)
        );
        assert_eq!(d.vault.active_stake(), U256::from(1_125));
        assert_eq!(d.vault.withdrawals(1), U256::from(375));

        // The loss shows up in the price, not the share count.
        assert_eq!(d.vault.active_shares_of(&ALICE), U256::from(1_500));

        d.time.set(START + 2 * EPOCH);
        assert_eq!(d.vault.claim(ALICE, ALICE, 1).unwrap(), U256::from(375));
    }

    #[test]
    fn test_previous_epoch_slash_reaches_three_buckets() {
        let d = Deployment::new();
        d.deposit(ALICE, 3_000);
        d.vault.withdraw(ALICE, ALICE, U256::from(1_000)).unwrap();
        d.delegate(1_000_000);

        // Capture late in epoch 0, request early in epoch 1.
        d.time.set(START + EPOCH + DAY);
        d.vault.withdraw(ALICE, ALICE, U256::from(500)).unwrap();
        let capture = START + 5 * DAY;
        assert_eq!(
            d.delegator
                .stake_at(&subnetwork(), &OPERATOR, capture)
                .unwrap(),
            U256::from(3_000)
        );

        let index = d
            .slasher
            .request_slash(MIDDLEWARE, subnetwork(), OPERATOR, U256::from(600), capture)
            .unwrap();
        d.advance(VETO);
        assert_eq!(d.vault.current_epoch(), 1);

        assert_eq!(
            d.slasher.execute_slash(MIDDLEWARE, index).unwrap(),
            U256::from(600)
        );
        assert_eq!(d.vault.active_stake(), U256::from(1_200));
        assert_eq!(d.vault.withdrawals(2), U256::from(400));
        assert_eq!(d.vault.withdrawals(1), U256::from(800));
    }

    #[test]
    fn test_vetoed_request_moves_nothing() {
        let d = Deployment::new();
        d.deposit(ALICE, 1_000);
        d.delegate(1_000);
        d.advance(DAY);

        let index = d
            .slasher
            .request_slash(MIDDLEWARE, subnetwork(), OPERATOR, U256::from(400), d.now() - 1)
            .unwrap();
        d.advance(DAY);
        d.slasher.veto_slash(RESOLVER, index).unwrap();
        d.advance(VETO);

        assert_eq!(
            d.slasher.execute_slash(MIDDLEWARE, index),
            Err(SlasherError::SlashRequestCompleted)
        );
        assert_eq!(d.vault.active_stake(), U256::from(1_000));
        assert_eq!(d.slasher.cumulative_slash(&subnetwork(), &OPERATOR), U256::zero());
        assert_eq!(
            d.router.trigger_transfer(d.router.global_receiver()),
            Err(RouterError::InsufficientBalance)
        );

        let events = d.slasher.drain_events();
        assert!(matches!(events[1], SlasherEvent::VetoSlash { .. }));
    }

    #[test]
    fn test_slashability_recharges_with_fresh_deposits() {
        let d = Deployment::new();
        d.deposit(ALICE, 1_000);
        d.delegate(1_000_000);
        d.advance(DAY);

        let index = d
            .slasher
            .request_slash(MIDDLEWARE, subnetwork(), OPERATOR, U256::from(1_000), START + 1)
            .unwrap();
        d.advance(VETO);
        d.slasher.execute_slash(MIDDLEWARE, index).unwrap();
        assert_eq!(d.vault.active_stake(), U256::zero());

        // Captures already covered by the executed slash are exhausted.
        assert_eq!(
            d.slasher
                .slashable_stake(&subnetwork(), &OPERATOR, START + 2)
                .unwrap(),
            U256::zero()
        );

        d.advance(10);
        d.deposit(BOB, 800);
        let fresh_capture = d.now();
        d.advance(10);

        assert_eq!(
            d.slasher
                .slashable_stake(&subnetwork(), &OPERATOR, fresh_capture)
                .unwrap(),
            U256::from(800)
        );
        let index = d
            .slasher
            .request_slash(MIDDLEWARE, subnetwork(), OPERATOR, U256::from(5_000), fresh_capture)
            .unwrap();
        assert_eq!(d.slasher.slash_request(index).unwrap().amount, U256::from(800));
    }

    #[test]
    fn test_withdrawal_after_request_shrinks_execution() {
        let d = Deployment::new();
        d.deposit(ALICE, 1_000);
        d.delegate(1_000_000);
        d.advance(DAY);

        let capture = d.now() - 1;
        let index = d
            .slasher
            .request_slash(MIDDLEWARE, subnetwork(), OPERATOR, U256::from(1_000), capture)
            .unwrap();

        // The withdrawal lands in next epoch's bucket, which stays slashable
        // for a capture in the current epoch.
        d.vault.withdraw(ALICE, ALICE, U256::from(400)).unwrap();
        d.advance(VETO);

        assert_eq!(
            d.slasher.execute_slash(MIDDLEWARE, index).unwrap(),
            U256::from(1_000)
        );
        assert_eq!(d.vault.active_stake(), U256::zero());
        assert_eq!(d.vault.withdrawals(1), U256::zero());
        assert!(matches!(
            d.slasher.slash_request(index).unwrap().state,
            RequestState::Executed { .. }
        ));
    }

    #[test]
    fn test_operator_without_opt_in_is_not_slashable() {
        let d = Deployment::new();
        d.deposit(ALICE, 1_000);
        d.delegate(1_000);

        let stranger = [0x99; 20];
        d.advance(DAY);
        assert_eq!(
            d.slasher
                .request_slash(MIDDLEWARE, subnetwork(), stranger, U256::from(10), d.now() - 1),
            Err(SlasherError::InsufficientSlash)
        );
    }
}
