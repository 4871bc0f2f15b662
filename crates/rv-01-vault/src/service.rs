//! Vault Service - Core business logic
//!
//! Orchestrates the active stake ledger, the withdrawal queue and the
//! slashing engine behind a single lock. Each operation validates first,
//! performs its one collateral transfer, then writes the ledger, so a
//! failed call leaves no trace.

use crate::config::VaultConfig;
use crate::domain::{
    compute_split, ActiveStakeLedger, ClaimQuote, DepositPolicy, EpochClock, SlashScope,
    SlashableBuckets, WithdrawalQueue,
};
use crate::error::{VaultError, VaultResult};
use crate::events::VaultEvent;
use crate::metrics;
use crate::ports::inbound::{DepositReceipt, VaultApi, WithdrawalReceipt};
use crate::ports::outbound::{AccessControl, CollateralToken, TimeSource};
use parking_lot::RwLock;
use shared_types::math;
use shared_types::{is_zero_address, short_hex, Address, Epoch, Role, Timestamp, U256};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Internal ledger state
struct VaultState {
    clock: EpochClock,
    active: ActiveStakeLedger,
    withdrawals: WithdrawalQueue,
    policy: DepositPolicy,
    events: Vec<VaultEvent>,
}

impl VaultState {
    fn new(config: &VaultConfig) -> Self {
        Self {
            clock: EpochClock::new(config.epoch_duration),
            active: ActiveStakeLedger::new(),
            withdrawals: WithdrawalQueue::new(),
            policy: DepositPolicy {
                deposit_whitelist: config.deposit_whitelist,
                is_deposit_limit: config.is_deposit_limit,
                deposit_limit: config.deposit_limit,
                ..DepositPolicy::default()
            },
            events: Vec::new(),
        }
    }

    fn total_stake(&self, now: Timestamp) -> VaultResult<U256> {
        let epoch = self.clock.epoch_at(now);
        let withdrawals = math::checked_add(
            self.withdrawals.withdrawals(epoch),
            self.withdrawals.withdrawals(epoch + 1),
        )?;
        Ok(math::checked_add(self.active.stake(), withdrawals)?)
    }

    /// Stake that was live at `ts` under the bucket scope `on_slash` would
    /// apply to a capture at `ts` today.
    fn stake_at(&self, ts: Timestamp, now: Timestamp) -> VaultResult<U256> {
        let current = self.clock.epoch_at(now);
        let scope = SlashScope::classify(self.clock.epoch_at(ts), current);
        let buckets = SlashableBuckets::scoped(
            scope,
            self.active.stake_at(ts),
            self.withdrawals.withdrawals_at(current, ts),
            self.withdrawals.withdrawals_at(current + 1, ts),
        );
        Ok(buckets.total()?)
    }

    /// Burns `burned` active shares worth `assets` from `owner` and queues the
    /// assets for `claimer` in next epoch's bucket.
    fn queue_withdrawal(
        &mut self,
        owner: Address,
        claimer: Address,
        assets: U256,
        burned: U256,
        now: Timestamp,
    ) -> VaultResult<WithdrawalReceipt> {
        let epoch = self.clock.epoch_at(now) + 1;
        // Price the withdrawal shares before touching anything.
        self.withdrawals.bucket(epoch).shares_for(assets)?;

        self.active.burn(owner, assets, burned, now)?;
        let minted = self.withdrawals.enqueue(epoch, claimer, assets, now)?;

        self.events.push(VaultEvent::Withdraw {
            withdrawer: owner,
            claimer,
            epoch,
            amount: assets,
            burned_shares: burned,
            minted_shares: minted,
        });
        Ok(WithdrawalReceipt {
            withdrawn_assets: assets,
            burned_shares: burned,
            minted_shares: minted,
            epoch,
        })
    }

    fn record_stake_gauges(&self, now: Timestamp) {
        let total = self.total_stake(now).unwrap_or_default();
        metrics::set_stake(as_f64(self.active.stake()), as_f64(total));
    }
}

fn as_f64(value: U256) -> f64 {
    if value > U256::from(u128::MAX) {
        u128::MAX as f64
    } else {
        value.low_u128() as f64
    }
}

/// Vault Service implementation
pub struct VaultService<T, A, C>
where
    T: CollateralToken,
    A: AccessControl,
    C: TimeSource,
{
    config: VaultConfig,
    state: RwLock<VaultState>,
    token: Arc<T>,
    access: Arc<A>,
    time: Arc<C>,
}

impl<T, A, C> VaultService<T, A, C>
where
    T: CollateralToken,
    A: AccessControl,
    C: TimeSource,
{
    /// Creates a vault after validating `config`.
    pub fn new(config: VaultConfig, token: Arc<T>, access: Arc<A>, time: Arc<C>) -> VaultResult<Self> {
        config.validate()?;
        info!(
            subsystem = "vault",
            vault = %short_hex(&config.address),
            epoch_duration = config.epoch_duration,
            "[rv-01] Vault initialized"
        );
        Ok(Self {
            state: RwLock::new(VaultState::new(&config)),
            config,
            token,
            access,
            time,
        })
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    pub fn address(&self) -> Address {
        self.config.address
    }

    fn require_role(&self, role: Role, caller: &Address) -> VaultResult<()> {
        if !self.access.has_role(&role, caller) {
            warn!(
                subsystem = "vault",
                caller = %short_hex(caller),
                ?role,
                "[rv-01] Rejected caller without role"
            );
            return Err(VaultError::MissingRole(role));
        }
        Ok(())
    }

    // =========================================================================
    // EPOCH READS
    // =========================================================================

    pub fn epoch_duration(&self) -> u64 {
        self.config.epoch_duration
    }

    pub fn epoch_duration_init(&self) -> Option<Timestamp> {
        self.state.read().clock.start()
    }

    pub fn epoch_at(&self, ts: Timestamp) -> Epoch {
        self.state.read().clock.epoch_at(ts)
    }

    pub fn current_epoch_start(&self) -> Timestamp {
        self.state.read().clock.current_epoch_start(self.time.now())
    }

    pub fn next_epoch_start(&self) -> Timestamp {
        self.state.read().clock.next_epoch_start(self.time.now())
    }

    /// # Errors
    /// - `NoPreviousEpoch` while in epoch zero
    pub fn previous_epoch_start(&self) -> VaultResult<Timestamp> {
        self.state
            .read()
            .clock
            .previous_epoch_start(self.time.now())
            .ok_or(VaultError::NoPreviousEpoch)
    }

    // =========================================================================
    // LEDGER READS
    // =========================================================================

    pub fn active_stake(&self) -> U256 {
        self.state.read().active.stake()
    }

    pub fn active_shares(&self) -> U256 {
        self.state.read().active.shares()
    }

    pub fn active_stake_at(&self, ts: Timestamp) -> U256 {
        self.state.read().active.stake_at(ts)
    }

    pub fn active_shares_at(&self, ts: Timestamp) -> U256 {
        self.state.read().active.shares_at(ts)
    }

    pub fn active_shares_of(&self, account: &Address) -> U256 {
        self.state.read().active.shares_of(account)
    }

    pub fn active_shares_of_at(&self, account: &Address, ts: Timestamp) -> U256 {
        self.state.read().active.shares_of_at(account, ts)
    }

    pub fn active_balance_of(&self, account: &Address) -> VaultResult<U256> {
        self.state.read().active.balance_of(account)
    }

    pub fn withdrawals(&self, epoch: Epoch) -> U256 {
        self.state.read().withdrawals.withdrawals(epoch)
    }

    pub fn withdrawal_shares(&self, epoch: Epoch) -> U256 {
        self.state.read().withdrawals.withdrawal_shares(epoch)
    }

    pub fn withdrawal_shares_of(&self, epoch: Epoch, account: &Address) -> U256 {
        self.state.read().withdrawals.shares_of(epoch, account)
    }

    pub fn withdrawals_of(&self, epoch: Epoch, account: &Address) -> VaultResult<U256> {
        self.state.read().withdrawals.withdrawals_of(epoch, account)
    }

    /// Active balance plus the account's share of the open withdrawal
    /// buckets.
    pub fn slashable_balance_of(&self, account: &Address) -> VaultResult<U256> {
        let now = self.time.now();
        let state = self.state.read();
        let epoch = state.clock.epoch_at(now);
        let active = state.active.balance_of(account)?;
        let current = state.withdrawals.withdrawals_of(epoch, account)?;
        let next = state.withdrawals.withdrawals_of(epoch + 1, account)?;
        Ok(math::checked_add(math::checked_add(active, current)?, next)?)
    }

    // =========================================================================
    // POLICY READS
    // =========================================================================

    pub fn deposit_whitelist(&self) -> bool {
        self.state.read().policy.deposit_whitelist
    }

    pub fn is_depositor_whitelisted(&self, account: &Address) -> bool {
        self.state.read().policy.whitelisted.contains(account)
    }

    pub fn is_deposit_limit(&self) -> bool {
        self.state.read().policy.is_deposit_limit
    }

    pub fn deposit_limit(&self) -> U256 {
        self.state.read().policy.deposit_limit
    }
}

impl<T, A, C> VaultApi for VaultService<T, A, C>
where
    T: CollateralToken,
    A: AccessControl,
    C: TimeSource,
{
    fn deposit(
        &self,
        caller: Address,
        on_behalf_of: Address,
        amount: U256,
    ) -> VaultResult<DepositReceipt> {
        if amount.is_zero() {
            return Err(VaultError::InsufficientDeposit);
        }
        if is_zero_address(&on_behalf_of) {
            return Err(VaultError::InvalidOnBehalfOf);
        }

        let now = self.time.now();
        let mut state = self.state.write();
        let total = state.total_stake(now)?;
        state.policy.check_deposit(&caller, total, amount)?;

        let shares = state.active.preview_deposit(amount)?;
        if shares.is_zero() {
            return Err(VaultError::InsufficientDeposit);
        }

        self.token
            .transfer_from(&self.config.address, &caller, &self.config.address, amount)?;

        state.clock.anchor(now);
        state.active.mint(on_behalf_of, amount, shares, now)?;
        state.events.push(VaultEvent::Deposit {
            depositor: caller,
            on_behalf_of,
            amount,
            shares,
        });

        info!(
            subsystem = "vault",
            depositor = %short_hex(&caller),
            on_behalf_of = %short_hex(&on_behalf_of),
            %amount,
            %shares,
            "[rv-01] Deposit"
        );
        metrics::record_deposit();
        state.record_stake_gauges(now);

        Ok(DepositReceipt {
            deposited_amount: amount,
            minted_shares: shares,
        })
    }

    fn withdraw(
        &self,
        caller: Address,
        claimer: Address,
        amount: U256,
    ) -> VaultResult<WithdrawalReceipt> {
        if is_zero_address(&claimer) {
            return Err(VaultError::InvalidClaimer);
        }
        if amount.is_zero() {
            return Err(VaultError::InsufficientWithdrawal);
        }

        let now = self.time.now();
        let mut state = self.state.write();
        let burned = state.active.preview_withdraw(amount)?;
        if burned > state.active.shares_of(&caller) {
            return Err(VaultError::TooMuchWithdraw {
                requested: amount,
                available: state.active.balance_of(&caller)?,
            });
        }

        let receipt = state.queue_withdrawal(caller, claimer, amount, burned, now)?;

        info!(
            subsystem = "vault",
            withdrawer = %short_hex(&caller),
            claimer = %short_hex(&claimer),
            epoch = receipt.epoch,
            %amount,
            burned_shares = %receipt.burned_shares,
            "[rv-01] Withdraw"
        );
        metrics::record_withdrawal();
        state.record_stake_gauges(now);

        Ok(receipt)
    }

    fn redeem(
        &self,
        caller: Address,
        claimer: Address,
        shares: U256,
    ) -> VaultResult<WithdrawalReceipt> {
        if is_zero_address(&claimer) {
            return Err(VaultError::InvalidClaimer);
        }
        if shares.is_zero() {
            return Err(VaultError::InsufficientRedemption);
        }

        let now = self.time.now();
        let mut state = self.state.write();
        let available = state.active.shares_of(&caller);
        if shares > available {
            return Err(VaultError::TooMuchRedeem {
                requested: shares,
                available,
            });
        }
        let assets = state.active.preview_redeem(shares)?;
        if assets.is_zero() {
            return Err(VaultError::InsufficientRedemption);
        }

        let receipt = state.queue_withdrawal(caller, claimer, assets, shares, now)?;

        info!(
            subsystem = "vault",
            withdrawer = %short_hex(&caller),
            claimer = %short_hex(&claimer),
            epoch = receipt.epoch,
            %shares,
            assets = %assets,
            "[rv-01] Redeem"
        );
        metrics::record_withdrawal();
        state.record_stake_gauges(now);

        Ok(receipt)
    }

    fn claim(&self, caller: Address, recipient: Address, epoch: Epoch) -> VaultResult<U256> {
        if is_zero_address(&recipient) {
            return Err(VaultError::InvalidRecipient);
        }

        let now = self.time.now();
        let mut state = self.state.write();
        let current = state.clock.epoch_at(now);
        if epoch >= current {
            return Err(VaultError::InvalidEpoch { epoch, current });
        }

        let quote = state.withdrawals.quote(epoch, &caller)?;
        if quote.shares.is_zero() || quote.assets.is_zero() {
            return Err(VaultError::InsufficientClaim);
        }

        self.token
            .transfer(&self.config.address, &recipient, quote.assets)?;

        state.withdrawals.settle(&caller, &quote, now)?;
        state.events.push(VaultEvent::Claim {
            claimer: caller,
            recipient,
            epoch,
            amount: quote.assets,
        });

        info!(
            subsystem = "vault",
            claimer = %short_hex(&caller),
            recipient = %short_hex(&recipient),
            epoch,
            amount = %quote.assets,
            "[rv-01] Claim"
        );
        metrics::record_claims(1);

        Ok(quote.assets)
    }

    fn claim_batch(
        &self,
        caller: Address,
        recipient: Address,
        epochs: &[Epoch],
    ) -> VaultResult<U256> {
        if is_zero_address(&recipient) {
            return Err(VaultError::InvalidRecipient);
        }
        if epochs.is_empty() {
            return Err(VaultError::InvalidLengthEpochs);
        }

        let now = self.time.now();
        let mut state = self.state.write();
        let current = state.clock.epoch_at(now);

        let unique: BTreeSet<Epoch> = epochs.iter().copied().collect();
        let mut quotes: Vec<ClaimQuote> = Vec::with_capacity(unique.len());
        let mut total = U256::zero();
        for epoch in unique {
            if epoch >= current {
                return Err(VaultError::InvalidEpoch { epoch, current });
            }
            let quote = state.withdrawals.quote(epoch, &caller)?;
            if quote.shares.is_zero() || quote.assets.is_zero() {
                continue;
            }
            total = math::checked_add(total, quote.assets)?;
            quotes.push(quote);
        }
        if total.is_zero() {
            return Err(VaultError::InsufficientClaim);
        }

        self.token.transfer(&self.config.address, &recipient, total)?;

        for quote in &quotes {
            state.withdrawals.settle(&caller, quote, now)?;
        }
        let claimed: Vec<Epoch> = quotes.iter().map(|q| q.epoch).collect();
        state.events.push(VaultEvent::ClaimBatch {
            claimer: caller,
            recipient,
            epochs: claimed.clone(),
            amount: total,
        });

        info!(
            subsystem = "vault",
            claimer = %short_hex(&caller),
            recipient = %short_hex(&recipient),
            epochs = ?claimed,
            amount = %total,
            "[rv-01] Claim batch"
        );
        metrics::record_claims(claimed.len() as u64);

        Ok(total)
    }

    fn on_slash(
        &self,
        caller: Address,
        amount: U256,
        capture_timestamp: Timestamp,
    ) -> VaultResult<U256> {
        if caller != self.config.slasher {
            warn!(
                subsystem = "vault",
                caller = %short_hex(&caller),
                "[rv-01] on_slash from non-slasher"
            );
            return Err(VaultError::NotSlasher);
        }
        if amount.is_zero() {
            return Ok(U256::zero());
        }

        let now = self.time.now();
        let mut state = self.state.write();
        let current = state.clock.epoch_at(now);
        let scope = SlashScope::classify(state.clock.epoch_at(capture_timestamp), current);
        let buckets = SlashableBuckets::scoped(
            scope,
            state.active.stake(),
            state.withdrawals.withdrawals(current),
            state.withdrawals.withdrawals(current + 1),
        );
        let split = compute_split(amount, &buckets)?;
        let slashed = split.total();

        debug!(
            subsystem = "vault",
            ?scope,
            epoch = current,
            active = %split.active,
            next_withdrawals = %split.next_withdrawals,
            current_withdrawals = %split.current_withdrawals,
            "[rv-01] Slash split"
        );

        if !slashed.is_zero() {
            self.token
                .transfer(&self.config.address, &self.config.burner, slashed)?;

            state.active.seize(split.active, now)?;
            state
                .withdrawals
                .seize(current + 1, split.next_withdrawals, now)?;
            state
                .withdrawals
                .seize(current, split.current_withdrawals, now)?;
            metrics::record_slash();
            state.record_stake_gauges(now);
        }

        state.events.push(VaultEvent::OnSlash {
            amount,
            capture_timestamp,
            slashed,
        });
        info!(
            subsystem = "vault",
            %amount,
            capture_timestamp,
            %slashed,
            "[rv-01] Slashed"
        );

        Ok(slashed)
    }

    fn set_deposit_whitelist(&self, caller: Address, status: bool) -> VaultResult<()> {
        self.require_role(Role::DepositWhitelistSet, &caller)?;
        let mut state = self.state.write();
        state.policy.set_deposit_whitelist(status)?;
        state.events.push(VaultEvent::SetDepositWhitelist { status });
        info!(subsystem = "vault", status, "[rv-01] Deposit whitelist set");
        Ok(())
    }

    fn set_depositor_whitelist_status(
        &self,
        caller: Address,
        account: Address,
        status: bool,
    ) -> VaultResult<()> {
        self.require_role(Role::DepositorWhitelist, &caller)?;
        if is_zero_address(&account) {
            return Err(VaultError::InvalidAccount);
        }
        let mut state = self.state.write();
        state.policy.set_whitelisted(account, status)?;
        state
            .events
            .push(VaultEvent::SetDepositorWhitelistStatus { account, status });
        info!(
            subsystem = "vault",
            account = %short_hex(&account),
            status,
            "[rv-01] Depositor whitelist status set"
        );
        Ok(())
    }

    fn set_is_deposit_limit(&self, caller: Address, status: bool) -> VaultResult<()> {
        self.require_role(Role::IsDepositLimitSet, &caller)?;
        let mut state = self.state.write();
        state.policy.set_is_deposit_limit(status)?;
        state.events.push(VaultEvent::SetIsDepositLimit { status });
        info!(subsystem = "vault", status, "[rv-01] Deposit limit flag set");
        Ok(())
    }

    fn set_deposit_limit(&self, caller: Address, limit: U256) -> VaultResult<()> {
        self.require_role(Role::DepositLimitSet, &caller)?;
        let mut state = self.state.write();
        state.policy.set_deposit_limit(limit)?;
        state.events.push(VaultEvent::SetDepositLimit { limit });
        info!(subsystem = "vault", %limit, "[rv-01] Deposit limit set");
        Ok(())
    }

    fn total_stake(&self) -> VaultResult<U256> {
        self.state.read().total_stake(self.time.now())
    }

    fn stake_at(&self, timestamp: Timestamp) -> VaultResult<U256> {
        self.state.read().stake_at(timestamp, self.time.now())
    }

    fn current_epoch(&self) -> Epoch {
        self.state.read().clock.epoch_at(self.time.now())
    }

    fn drain_events(&self) -> Vec<VaultEvent> {
        std::mem::take(&mut self.state.write().events)
    }
}
