//! Delegator Service
//!
//! Turns the vault's backing into per-operator slashable stake:
//!
//! ```text
//! stake(subnetwork, operator, t) =
//!     min(vault.stake_at(t), networkLimit(t)) * operatorShares(t) / totalShares(t)
//! ```
//!
//! and zero unless the operator was opted in to both the vault and the
//! network at `t`.

use crate::config::DelegatorConfig;
use crate::domain::{NetworkLimits, OperatorShares};
use crate::error::{DelegatorError, DelegatorResult};
use crate::ports::inbound::DelegatorApi;
use crate::ports::outbound::{AccessControl, EntityRegistry, OptInService, TimeSource, VaultStake};
use parking_lot::RwLock;
use shared_types::math::{self, Rounding};
use shared_types::{short_hex, Address, Role, Subnetwork, Timestamp, U256};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Default)]
struct DelegatorState {
    limits: NetworkLimits,
    shares: OperatorShares,
}

pub struct DelegatorService<V, R, O, A, C>
where
    V: VaultStake,
    R: EntityRegistry,
    O: OptInService,
    A: AccessControl,
    C: TimeSource,
{
    config: DelegatorConfig,
    state: RwLock<DelegatorState>,
    vault: Arc<V>,
    networks: Arc<R>,
    operator_vault_opt_in: Arc<O>,
    operator_network_opt_in: Arc<O>,
    access: Arc<A>,
    time: Arc<C>,
}

impl<V, R, O, A, C> DelegatorService<V, R, O, A, C>
where
    V: VaultStake,
    R: EntityRegistry,
    O: OptInService,
    A: AccessControl,
    C: TimeSource,
{
    pub fn new(
        config: DelegatorConfig,
        vault: Arc<V>,
        networks: Arc<R>,
        operator_vault_opt_in: Arc<O>,
        operator_network_opt_in: Arc<O>,
        access: Arc<A>,
        time: Arc<C>,
    ) -> DelegatorResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: RwLock::new(DelegatorState::default()),
            vault,
            networks,
            operator_vault_opt_in,
            operator_network_opt_in,
            access,
            time,
        })
    }

    pub fn config(&self) -> &DelegatorConfig {
        &self.config
    }

    fn require_role(&self, role: Role, caller: &Address) -> DelegatorResult<()> {
        if !self.access.has_role(&role, caller) {
            warn!(
                subsystem = "delegator",
                caller = %short_hex(caller),
                ?role,
                "[rv-02] Rejected caller without role"
            );
            return Err(DelegatorError::MissingRole(role));
        }
        Ok(())
    }

    pub fn max_network_limit(&self, subnetwork: &Subnetwork) -> U256 {
        self.state.read().limits.max(subnetwork)
    }

    pub fn network_limit(&self, subnetwork: &Subnetwork) -> U256 {
        self.state.read().limits.limit(subnetwork)
    }

    pub fn network_limit_at(&self, subnetwork: &Subnetwork, ts: Timestamp) -> U256 {
        self.state.read().limits.limit_at(subnetwork, ts)
    }

    pub fn operator_network_shares(&self, subnetwork: &Subnetwork, operator: &Address) -> U256 {
        self.state.read().shares.shares(subnetwork, operator)
    }

    pub fn operator_network_shares_at(
        &self,
        subnetwork: &Subnetwork,
        operator: &Address,
        ts: Timestamp,
    ) -> U256 {
        self.state.read().shares.shares_at(subnetwork, operator, ts)
    }

    pub fn total_operator_network_shares(&self, subnetwork: &Subnetwork) -> U256 {
        self.state.read().shares.total(subnetwork)
    }

    pub fn total_operator_network_shares_at(&self, subnetwork: &Subnetwork, ts: Timestamp) -> U256 {
        self.state.read().shares.total_at(subnetwork, ts)
    }
}

impl<V, R, O, A, C> DelegatorApi for DelegatorService<V, R, O, A, C>
where
    V: VaultStake,
    R: EntityRegistry,
    O: OptInService,
    A: AccessControl,
    C: TimeSource,
{
    fn set_max_network_limit(
        &self,
        caller: Address,
        subnetwork: Subnetwork,
        amount: U256,
    ) -> DelegatorResult<()> {
        if caller != subnetwork.network || !self.networks.is_entity(&caller) {
            warn!(
                subsystem = "delegator",
                caller = %short_hex(&caller),
                %subnetwork,
                "[rv-02] Max limit from non-network"
            );
            return Err(DelegatorError::NotNetwork);
        }
        let now = self.time.now();
        self.state.write().limits.set_max(subnetwork, amount, now)?;
        info!(subsystem = "delegator", %subnetwork, %amount, "[rv-02] Max network limit set");
        Ok(())
    }

    fn set_network_limit(
        &self,
        caller: Address,
        subnetwork: Subnetwork,
        amount: U256,
    ) -> DelegatorResult<()> {
        self.require_role(Role::NetworkLimitSet, &caller)?;
        let now = self.time.now();
        self.state.write().limits.set_limit(subnetwork, amount, now)?;
        info!(subsystem = "delegator", %subnetwork, %amount, "[rv-02] Network limit set");
        Ok(())
    }

    fn set_operator_network_shares(
        &self,
        caller: Address,
        subnetwork: Subnetwork,
        operator: Address,
        shares: U256,
    ) -> DelegatorResult<()> {
        self.require_role(Role::OperatorNetworkSharesSet, &caller)?;
        let now = self.time.now();
        self.state
            .write()
            .shares
            .set(subnetwork, operator, shares, now)?;
        info!(
            subsystem = "delegator",
            %subnetwork,
            operator = %short_hex(&operator),
            %shares,
            "[rv-02] Operator network shares set"
        );
        Ok(())
    }

    fn stake_at(
        &self,
        subnetwork: &Subnetwork,
        operator: &Address,
        timestamp: Timestamp,
    ) -> DelegatorResult<U256> {
        let opted_in = self
            .operator_vault_opt_in
            .is_opted_in_at(operator, &self.config.vault, timestamp)
            && self
                .operator_network_opt_in
                .is_opted_in_at(operator, &subnetwork.network, timestamp);
        if !opted_in {
            return Ok(U256::zero());
        }

        let (limit, operator_shares, total_shares) = {
            let state = self.state.read();
            (
                state.limits.limit_at(subnetwork, timestamp),
                state.shares.shares_at(subnetwork, operator, timestamp),
                state.shares.total_at(subnetwork, timestamp),
            )
        };
        if operator_shares.is_zero() || total_shares.is_zero() {
            return Ok(U256::zero());
        }

        let backing = self.vault.stake_at(timestamp)?;
        let stake = math::mul_div(
            backing.min(limit),
            operator_shares,
            total_shares,
            Rounding::Floor,
        )?;
        debug!(
            subsystem = "delegator",
            %subnetwork,
            operator = %short_hex(operator),
            timestamp,
            %backing,
            %limit,
            %stake,
            "[rv-02] Stake lookup"
        );
        Ok(stake)
    }

    fn stake(&self, subnetwork: &Subnetwork, operator: &Address) -> DelegatorResult<U256> {
        self.stake_at(subnetwork, operator, self.time.now())
    }
}
