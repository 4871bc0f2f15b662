//! Burner Router Service
//!
//! Holds seized collateral and releases it to receivers. Funds are
//! attributed when they arrive (through the slasher's hook) and paid out on
//! `trigger_transfer`; only *changes* of receivers and of the delay are
//! timelocked.

use crate::config::BurnerRouterConfig;
use crate::domain::{DelayedSlot, PendingChange, ReceiverRoutes};
use crate::error::{RouterError, RouterResult};
use crate::ports::inbound::BurnerRouterApi;
use crate::ports::outbound::{AccessControl, CollateralToken, TimeSource};
use parking_lot::RwLock;
use shared_types::math;
use shared_types::{is_zero_address, short_hex, Address, Role, Subnetwork, Timestamp, U256};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

struct RouterState {
    delay: DelayedSlot<u64>,
    routes: ReceiverRoutes,
    /// Amount owed to each receiver.
    balances: HashMap<Address, U256>,
    /// Collateral already attributed to a receiver.
    last_balance: U256,
}

impl RouterState {
    fn owed(&self, receiver: &Address) -> U256 {
        self.balances.get(receiver).copied().unwrap_or_default()
    }

    fn credit(&mut self, receiver: Address, amount: U256) -> RouterResult<()> {
        let owed = math::checked_add(self.owed(&receiver), amount)?;
        self.balances.insert(receiver, owed);
        self.last_balance = math::checked_add(self.last_balance, amount)?;
        Ok(())
    }
}

pub struct BurnerRouterService<T, A, C>
where
    T: CollateralToken,
    A: AccessControl,
    C: TimeSource,
{
    config: BurnerRouterConfig,
    state: RwLock<RouterState>,
    token: Arc<T>,
    access: Arc<A>,
    time: Arc<C>,
}

impl<T, A, C> BurnerRouterService<T, A, C>
where
    T: CollateralToken,
    A: AccessControl,
    C: TimeSource,
{
    pub fn new(
        config: BurnerRouterConfig,
        token: Arc<T>,
        access: Arc<A>,
        time: Arc<C>,
    ) -> RouterResult<Self> {
        config.validate()?;
        let mut routes = ReceiverRoutes::new(config.global_receiver);
        for r in &config.network_receivers {
            routes
                .networks
                .insert(r.network, DelayedSlot::new(Some(r.receiver)));
        }
        for r in &config.operator_network_receivers {
            routes
                .operator_networks
                .insert((r.network, r.operator), DelayedSlot::new(Some(r.receiver)));
        }
        let state = RouterState {
            delay: DelayedSlot::new(config.delay),
            routes,
            balances: HashMap::new(),
            last_balance: U256::zero(),
        };
        Ok(Self {
            config,
            state: RwLock::new(state),
            token,
            access,
            time,
        })
    }

    pub fn address(&self) -> Address {
        self.config.address
    }

    fn require_owner(&self, caller: &Address) -> RouterResult<()> {
        if !self.access.has_role(&Role::RouterOwner, caller) {
            warn!(
                subsystem = "burner_router",
                caller = %short_hex(caller),
                "[rv-04] Rejected non-owner"
            );
            return Err(RouterError::NotOwner);
        }
        Ok(())
    }

    /// Collateral held but not yet attributed to any receiver.
    fn unattributed(&self, state: &RouterState) -> U256 {
        self.token
            .balance_of(&self.config.address)
            .saturating_sub(state.last_balance)
    }

    pub fn delay(&self) -> u64 {
        *self.state.read().delay.current()
    }

    pub fn pending_delay(&self) -> Option<PendingChange<u64>> {
        self.state.read().delay.pending().copied()
    }

    pub fn global_receiver(&self) -> Address {
        *self.state.read().routes.global.current()
    }

    pub fn pending_global_receiver(&self) -> Option<PendingChange<Address>> {
        self.state.read().routes.global.pending().copied()
    }

    pub fn network_receiver(&self, network: &Address) -> Option<Address> {
        self.state.read().routes.network(network)
    }

    pub fn pending_network_receiver(
        &self,
        network: &Address,
    ) -> Option<PendingChange<Option<Address>>> {
        self.state
            .read()
            .routes
            .networks
            .get(network)
            .and_then(|slot| slot.pending().copied())
    }

    pub fn operator_network_receiver(&self, network: &Address, operator: &Address) -> Option<Address> {
        self.state.read().routes.operator_network(network, operator)
    }

    pub fn pending_operator_network_receiver(
        &self,
        network: &Address,
        operator: &Address,
    ) -> Option<PendingChange<Option<Address>>> {
        self.state
            .read()
            .routes
            .operator_networks
            .get(&(*network, *operator))
            .and_then(|slot| slot.pending().copied())
    }

    /// Amount currently owed to `receiver`.
    pub fn balance_of(&self, receiver: &Address) -> U256 {
        self.state.read().owed(receiver)
    }

    pub fn last_balance(&self) -> U256 {
        self.state.read().last_balance
    }
}

impl<T, A, C> BurnerRouterApi for BurnerRouterService<T, A, C>
where
    T: CollateralToken,
    A: AccessControl,
    C: TimeSource,
{
    fn on_slash(
        &self,
        subnetwork: &Subnetwork,
        operator: &Address,
        amount: U256,
        capture_timestamp: Timestamp,
    ) -> RouterResult<U256> {
        let mut state = self.state.write();
        let arrived = self.unattributed(&state);
        let receiver = state.routes.resolve(&subnetwork.network, operator);
        if !arrived.is_zero() {
            state.credit(receiver, arrived)?;
        }
        info!(
            subsystem = "burner_router",
            %subnetwork,
            operator = %short_hex(operator),
            receiver = %short_hex(&receiver),
            %amount,
            %arrived,
            capture_timestamp,
            "[rv-04] Seized funds attributed"
        );
        Ok(arrived)
    }

    fn trigger_transfer(&self, receiver: Address) -> RouterResult<U256> {
        let mut state = self.state.write();
        let global = *state.routes.global.current();
        let arrived = self.unattributed(&state);

        let mut owed = state.owed(&receiver);
        if receiver == global {
            owed = math::checked_add(owed, arrived)?;
        }
        if owed.is_zero() {
            return Err(RouterError::InsufficientBalance);
        }

        self.token.transfer(&self.config.address, &receiver, owed)?;

        if !arrived.is_zero() {
            state.credit(global, arrived)?;
        }
        state.balances.remove(&receiver);
        state.last_balance = math::checked_sub(state.last_balance, owed)?;

        info!(
            subsystem = "burner_router",
            receiver = %short_hex(&receiver),
            amount = %owed,
            "[rv-04] Transferred to receiver"
        );
        Ok(owed)
    }

    fn set_global_receiver(&self, caller: Address, receiver: Address) -> RouterResult<()> {
        self.require_owner(&caller)?;
        if is_zero_address(&receiver) {
            return Err(RouterError::InvalidReceiver);
        }
        let now = self.time.now();
        let mut state = self.state.write();
        let delay = *state.delay.current();
        state.routes.global.propose(receiver, now, delay)?;
        debug!(
            subsystem = "burner_router",
            receiver = %short_hex(&receiver),
            ready_at = now.saturating_add(delay),
            "[rv-04] Global receiver proposed"
        );
        Ok(())
    }

    fn accept_global_receiver(&self) -> RouterResult<()> {
        let now = self.time.now();
        let receiver = self.state.write().routes.global.accept(now)?;
        info!(
            subsystem = "burner_router",
            receiver = %short_hex(&receiver),
            "[rv-04] Global receiver accepted"
        );
        Ok(())
    }

    fn set_network_receiver(
        &self,
        caller: Address,
        network: Address,
        receiver: Option<Address>,
    ) -> RouterResult<()> {
        self.require_owner(&caller)?;
        if receiver.is_some_and(|r| is_zero_address(&r)) {
            return Err(RouterError::InvalidReceiver);
        }
        let now = self.time.now();
        let mut state = self.state.write();
        let delay = *state.delay.current();
        state
            .routes
            .network_slot(network)
            .propose(receiver, now, delay)?;
        debug!(
            subsystem = "burner_router",
            network = %short_hex(&network),
            "[rv-04] Network receiver proposed"
        );
        Ok(())
    }

    fn accept_network_receiver(&self, network: Address) -> RouterResult<()> {
        let now = self.time.now();
        let mut state = self.state.write();
        let receiver = match state.routes.networks.get_mut(&network) {
            Some(slot) => slot.accept(now)?,
            None => return Err(RouterError::NotReady { ready_at: None, now }),
        };
        info!(
            subsystem = "burner_router",
            network = %short_hex(&network),
            receiver = ?receiver.map(|r| short_hex(&r)),
            "[rv-04] Network receiver accepted"
        );
        Ok(())
    }

    fn set_operator_network_receiver(
        &self,
        caller: Address,
        network: Address,
        operator: Address,
        receiver: Option<Address>,
    ) -> RouterResult<()> {
        self.require_owner(&caller)?;
        if receiver.is_some_and(|r| is_zero_address(&r)) {
            return Err(RouterError::InvalidReceiver);
        }
        let now = self.time.now();
        let mut state = self.state.write();
        let delay = *state.delay.current();
        state
            .routes
            .operator_network_slot(network, operator)
            .propose(receiver, now, delay)?;
        debug!(
            subsystem = "burner_router",
            network = %short_hex(&network),
            operator = %short_hex(&operator),
            "[rv-04] Operator-network receiver proposed"
        );
        Ok(())
    }

    fn accept_operator_network_receiver(
        &self,
        network: Address,
        operator: Address,
    ) -> RouterResult<()> {
        let now = self.time.now();
        let mut state = self.state.write();
        let receiver = match state.routes.operator_networks.get_mut(&(network, operator)) {
            Some(slot) => slot.accept(now)?,
            None => return Err(RouterError::NotReady { ready_at: None, now }),
        };
        info!(
            subsystem = "burner_router",
            network = %short_hex(&network),
            operator = %short_hex(&operator),
            receiver = ?receiver.map(|r| short_hex(&r)),
            "[rv-04] Operator-network receiver accepted"
        );
        Ok(())
    }

    fn set_delay(&self, caller: Address, delay: u64) -> RouterResult<()> {
        self.require_owner(&caller)?;
        let now = self.time.now();
        self.state
            .write()
            .delay
            .propose(delay, now, self.config.delay_change_delay)?;
        debug!(subsystem = "burner_router", delay, "[rv-04] Delay proposed");
        Ok(())
    }

    fn accept_delay(&self) -> RouterResult<()> {
        let now = self.time.now();
        let delay = self.state.write().delay.accept(now)?;
        info!(subsystem = "burner_router", delay, "[rv-04] Delay accepted");
        Ok(())
    }
}
