//! # Burner Router Flows
//!
//! Seized collateral reaching the router, attributed to a receiver and paid
//! out, with receiver and delay changes going through their delays.

#[cfg(test)]
mod tests {
    use crate::harness::*;
    use rv_03_veto_slasher::VetoSlasherApi;
    use rv_04_burner_router::{BurnerRouterApi, RouterError, DEFAULT_DELAY};
    use shared_types::{Address, DAY, U256};

    const DAVE: Address = [0xDA; 20];
    const ERIN: Address = [0xE1; 20];

    fn slash(d: &Deployment, amount: u64) -> U256 {
        let index = d
            .slasher
            .request_slash(MIDDLEWARE, subnetwork(), OPERATOR, U256::from(amount), d.now() - 1)
            .unwrap();
        d.advance(VETO);
        d.slasher.execute_slash(MIDDLEWARE, index).unwrap()
    }

    #[test]
    fn test_operator_override_receives_slash_after_delay() {
        let d = Deployment::new();
        d.deposit(ALICE, 1_000);
        d.delegate(1_000);

        d.router
            .set_operator_network_receiver(ROUTER_OWNER, NETWORK, OPERATOR, Some(DAVE))
            .unwrap();
        assert_eq!(
            d.router.accept_operator_network_receiver(NETWORK, OPERATOR),
            Err(RouterError::NotReady {
                ready_at: Some(START + DEFAULT_DELAY),
                now: START
            })
        );

        d.advance(DEFAULT_DELAY);
        d.router
            .accept_operator_network_receiver(NETWORK, OPERATOR)
            .unwrap();

        assert_eq!(slash(&d, 300), U256::from(300));
        assert_eq!(d.router.balance_of(&DAVE), U256::from(300));
        assert_eq!(
            d.router.trigger_transfer(d.router.global_receiver()),
            Err(RouterError::InsufficientBalance)
        );
        assert_eq!(d.router.trigger_transfer(DAVE).unwrap(), U256::from(300));
        assert_eq!(d.balance(&DAVE), U256::from(300));
        assert_eq!(d.router.last_balance(), U256::zero());
    }

    #[test]
    fn test_delay_change_then_faster_receiver_change() {
        let d = Deployment::new();

        assert_eq!(
            d.router.set_delay(ALICE, 2 * DAY),
            Err(RouterError::NotOwner)
        );
        d.router.set_delay(ROUTER_OWNER, 2 * DAY).unwrap();
        assert!(d.router.accept_delay().is_err());

        d.advance(7 * DAY);
        d.router.accept_delay().unwrap();
        assert_eq!(d.router.delay(), 2 * DAY);

        d.router.set_global_receiver(ROUTER_OWNER, ERIN).unwrap();
        d.advance(2 * DAY - 1);
        assert!(d.router.accept_global_receiver().is_err());
        d.advance(1);
        d.router.accept_global_receiver().unwrap();
        assert_eq!(d.router.global_receiver(), ERIN);
    }

    #[test]
    fn test_network_override_and_unattributed_funds() {
        let d = Deployment::new();
        d.deposit(ALICE, 1_000);
        d.delegate(1_000);
        let global = d.router.global_receiver();

        // Collateral sent straight to the router belongs to the global
        // receiver.
        d.token.mint(&d.router.address(), U256::from(50)).unwrap();
        assert_eq!(d.router.trigger_transfer(global).unwrap(), U256::from(50));
        assert_eq!(d.balance(&global), U256::from(50));

        d.router
            .set_network_receiver(ROUTER_OWNER, NETWORK, Some(ERIN))
            .unwrap();
        d.advance(DEFAULT_DELAY);
        d.router.accept_network_receiver(NETWORK).unwrap();
        assert_eq!(d.router.network_receiver(&NETWORK), Some(ERIN));

        slash(&d, 200);
        assert_eq!(d.router.trigger_transfer(ERIN).unwrap(), U256::from(200));

        // Removing the override goes through the same delay.
        d.router
            .set_network_receiver(ROUTER_OWNER, NETWORK, None)
            .unwrap();
        assert_eq!(d.router.network_receiver(&NETWORK), Some(ERIN));
        d.advance(DEFAULT_DELAY);
        d.router.accept_network_receiver(NETWORK).unwrap();
        assert_eq!(d.router.network_receiver(&NETWORK), None);

        slash(&d, 100);
        assert_eq!(d.router.balance_of(&global), U256::from(100));
    }
}
