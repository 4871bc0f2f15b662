//! # Randomized Flows
//!
//! Seeded interleavings of deposits, withdrawals, claims, slash requests,
//! vetoes, executions and payouts. After every step:
//!
//! - collateral is conserved across depositors, vault, router and receiver
//! - the vault holds at least its total stake
//! - the pair's cumulative slash never decreases and equals the sum of
//!   executed slashes
//! - executed slashes whose capture, request or execution times fall in
//!   any veto-length window sum to at most the network limit
//!
//! Before each request and execution the slashable stake is checked
//! against `max(limit + cumulative_at(capture) - cumulative, 0)`, which is
//! zero once the capture is more than an epoch old or already slashed.

#[cfg(test)]
mod tests {
    use crate::harness::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rv_01_vault::VaultApi;
    use rv_02_delegator::DelegatorApi;
    use rv_03_veto_slasher::{SlasherError, VetoSlasherApi};
    use rv_04_burner_router::BurnerRouterApi;
    use shared_types::{Address, Timestamp, DAY, U256};

    const LIMIT: u64 = 50_000;
    const STEPS: usize = 400;
    const HOUR: u64 = 3_600;
    /// Backs the vault far above the limit so operator stake stays at it.
    const WHALE: Address = [0x77; 20];
    const WHALE_DEPOSIT: u64 = 100_000_000;

    struct Execution {
        capture: Timestamp,
        requested: Timestamp,
        executed: Timestamp,
        slashed: U256,
    }

    struct Run {
        d: Deployment,
        rng: StdRng,
        minted: U256,
        cumulative: U256,
        executions: Vec<Execution>,
    }

    impl Run {
        fn new(seed: u64) -> Self {
            let d = Deployment::new();
            d.delegate(LIMIT);
            d.deposit(WHALE, WHALE_DEPOSIT);
            // keep every reachable capture after the delegation
            d.advance(EPOCH);
            Self {
                d,
                rng: StdRng::seed_from_u64(seed),
                minted: U256::from(WHALE_DEPOSIT),
                cumulative: U256::zero(),
                executions: Vec::new(),
            }
        }

        /// Slashable stake for `capture` at the current time, derived from
        /// the limit and the cumulative trace.
        fn expected_slashable(&self, capture: Timestamp) -> U256 {
            let d = &self.d;
            let now = d.now();
            let latest = d.slasher.latest_slashed_capture_timestamp(&subnetwork(), &OPERATOR);
            if capture >= now || capture < now - EPOCH || capture <= latest {
                return U256::zero();
            }
            assert_eq!(
                d.delegator.stake_at(&subnetwork(), &OPERATOR, capture).unwrap(),
                U256::from(LIMIT)
            );
            let since_capture = d.slasher.cumulative_slash(&subnetwork(), &OPERATOR)
                - d.slasher.cumulative_slash_at(&subnetwork(), &OPERATOR, capture);
            U256::from(LIMIT).saturating_sub(since_capture)
        }

        fn pick_account(&mut self) -> Address {
            [ALICE, BOB, CAROL][self.rng.gen_range(0..3)]
        }

        fn step(&mut self) {
            let who = self.pick_account();
            match self.rng.gen_range(0..8) {
                0 | 1 => {
                    let amount = self.rng.gen_range(1..10_000u64);
                    self.d.deposit(who, amount);
                    self.minted += U256::from(amount);
                }
                2 => {
                    let balance = self.d.vault.active_balance_of(&who).unwrap().low_u64();
                    if balance > 0 {
                        let amount = self.rng.gen_range(1..=balance);
                        // Rounding may leave the last unit unwithdrawable.
                        let _ = self.d.vault.withdraw(who, who, U256::from(amount));
                    }
                }
                3 => {
                    let epoch = self.d.vault.current_epoch();
                    if epoch > 0 {
                        let epochs: Vec<u64> = (0..epoch).collect();
                        let _ = self.d.vault.claim_batch(who, who, &epochs);
                    }
                }
                4 | 5 => self.request_random(),
                6 => self.execute_random(),
                _ => {
                    let length = self.d.slasher.slash_requests_length();
                    if length > 0 && self.rng.gen_bool(0.3) {
                        let index = self.rng.gen_range(0..length);
                        let _ = self.d.slasher.veto_slash(RESOLVER, index);
                    } else {
                        let _ = self.d.router.trigger_transfer(self.d.router.global_receiver());
                    }
                }
            }
            self.d.advance(self.rng.gen_range(HOUR..2 * DAY));
        }

        fn request_random(&mut self) {
            let capture = self.d.now() - self.rng.gen_range(1..=EPOCH - VETO);
            let expected = self.expected_slashable(capture);
            assert_eq!(
                self.d.slasher.slashable_stake(&subnetwork(), &OPERATOR, capture).unwrap(),
                expected
            );

            let amount = U256::from(self.rng.gen_range(1..=LIMIT));
            let result =
                self.d
                    .slasher
                    .request_slash(MIDDLEWARE, subnetwork(), OPERATOR, amount, capture);
            match result {
                Ok(index) => {
                    let request = self.d.slasher.slash_request(index).unwrap();
                    assert_eq!(request.amount, amount.min(expected));
                }
                Err(SlasherError::InsufficientSlash) => assert!(expected.is_zero()),
                Err(e) => panic!("unexpected request failure: {e}"),
            }
        }

        fn execute_random(&mut self) {
            let length = self.d.slasher.slash_requests_length();
            if length == 0 {
                return;
            }
            let index = self.rng.gen_range(0..length);
            let request = self.d.slasher.slash_request(index).unwrap();
            let expected = self.expected_slashable(request.capture_timestamp);
            assert_eq!(
                self.d
                    .slasher
                    .slashable_stake(&subnetwork(), &OPERATOR, request.capture_timestamp)
                    .unwrap(),
                expected
            );

            let Ok(slashed) = self.d.slasher.execute_slash(MIDDLEWARE, index) else {
                return;
            };
            assert_eq!(slashed, request.amount.min(expected));
            self.executions.push(Execution {
                capture: request.capture_timestamp,
                requested: request.veto_deadline - VETO,
                executed: self.d.now(),
                slashed,
            });
        }

        /// Every window `[t, t + VETO]` opened by an execution's timestamp
        /// holds at most `LIMIT` of executed slashes.
        fn check_windows(&self, key: fn(&Execution) -> Timestamp) {
            for opening in &self.executions {
                let start = key(opening);
                let in_window = self
                    .executions
                    .iter()
                    .filter(|e| (start..=start + VETO).contains(&key(e)))
                    .fold(U256::zero(), |acc, e| acc + e.slashed);
                assert!(
                    in_window <= U256::from(LIMIT),
                    "{} slashed in window opening at {}",
                    in_window,
                    start
                );
            }
        }

        fn check_invariants(&mut self) {
            let d = &self.d;
            let global = d.router.global_receiver();
            let held = [ALICE, BOB, CAROL, WHALE, d.vault.address(), d.router.address(), global]
                .iter()
                .fold(U256::zero(), |acc, who| acc + d.balance(who));
            assert_eq!(held, self.minted);

            assert!(d.balance(&d.vault.address()) >= d.vault.total_stake().unwrap());

            let cumulative = d.slasher.cumulative_slash(&subnetwork(), &OPERATOR);
            assert!(cumulative >= self.cumulative);
            let executed = self
                .executions
                .iter()
                .fold(U256::zero(), |acc, e| acc + e.slashed);
            assert_eq!(cumulative, executed);
            self.cumulative = cumulative;

            self.check_windows(|e| e.capture);
            self.check_windows(|e| e.requested);
            self.check_windows(|e| e.executed);
        }
    }

    fn run(seed: u64) {
        let mut run = Run::new(seed);
        for _ in 0..STEPS {
            run.step();
            run.check_invariants();
        }
        rv_telemetry::log_event!(
            info,
            "rv-tests",
            "Randomized flow finished",
            seed,
            executed = run.executions.len(),
            requests = run.d.slasher.slash_requests_length()
        );
    }

    #[test]
    fn test_randomized_flow_seed_7() {
        run(7);
    }

    #[test]
    fn test_randomized_flow_seed_42() {
        run(42);
    }

    #[test]
    fn test_randomized_flow_seed_1337() {
        run(1337);
    }
}
