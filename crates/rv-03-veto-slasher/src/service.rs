//! Veto Slasher Service
//!
//! Owns the slash-request table and the per-pair cumulative slash state.
//! Lock order is slasher, then stake provider and vault, then burner; no
//! collaborator calls back into the slasher.

use crate::config::SlasherConfig;
use crate::domain::{CumulativeSlash, RequestState, SlashRequest};
use crate::error::{SlasherError, SlasherResult};
use crate::events::SlasherEvent;
use crate::metrics;
use crate::ports::inbound::VetoSlasherApi;
use crate::ports::outbound::{AccessControl, BurnerHook, SlashableVault, StakeProvider, TimeSource};
use parking_lot::RwLock;
use shared_types::{short_hex, Address, Role, Subnetwork, Timestamp, U256};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

type PairKey = (Subnetwork, Address);

#[derive(Default)]
struct SlasherState {
    requests: Vec<SlashRequest>,
    cumulative: HashMap<PairKey, CumulativeSlash>,
    events: Vec<SlasherEvent>,
}

impl SlasherState {
    fn request_mut(&mut self, index: u64) -> SlasherResult<&mut SlashRequest> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.requests.get_mut(i))
            .ok_or(SlasherError::SlashRequestNotExist(index))
    }
}

/// Veto Slasher Service implementation
pub struct VetoSlasherService<V, S, B, A, C>
where
    V: SlashableVault,
    S: StakeProvider,
    B: BurnerHook,
    A: AccessControl,
    C: TimeSource,
{
    config: SlasherConfig,
    epoch_duration: u64,
    state: RwLock<SlasherState>,
    vault: Arc<V>,
    stakes: Arc<S>,
    burner: Arc<B>,
    access: Arc<A>,
    time: Arc<C>,
}

impl<V, S, B, A, C> VetoSlasherService<V, S, B, A, C>
where
    V: SlashableVault,
    S: StakeProvider,
    B: BurnerHook,
    A: AccessControl,
    C: TimeSource,
{
    /// Creates a slasher bound to `vault`. The veto window must fit inside
    /// one vault epoch.
    pub fn new(
        config: SlasherConfig,
        vault: Arc<V>,
        stakes: Arc<S>,
        burner: Arc<B>,
        access: Arc<A>,
        time: Arc<C>,
    ) -> SlasherResult<Self> {
        let epoch_duration = vault.epoch_duration();
        config.validate(vault.address(), epoch_duration)?;
        info!(
            subsystem = "slasher",
            slasher = %short_hex(&config.address),
            veto_duration = config.veto_duration,
            epoch_duration,
            "[rv-03] Veto slasher initialized"
        );
        Ok(Self {
            config,
            epoch_duration,
            state: RwLock::new(SlasherState::default()),
            vault,
            stakes,
            burner,
            access,
            time,
        })
    }

    pub fn config(&self) -> &SlasherConfig {
        &self.config
    }

    pub fn veto_duration(&self) -> u64 {
        self.config.veto_duration
    }

    pub fn latest_slashed_capture_timestamp(
        &self,
        subnetwork: &Subnetwork,
        operator: &Address,
    ) -> Timestamp {
        self.state
            .read()
            .cumulative
            .get(&(*subnetwork, *operator))
            .map_or(0, CumulativeSlash::latest_slashed_capture_timestamp)
    }

    pub fn cumulative_slash(&self, subnetwork: &Subnetwork, operator: &Address) -> U256 {
        self.state
            .read()
            .cumulative
            .get(&(*subnetwork, *operator))
            .map_or_else(U256::zero, CumulativeSlash::total)
    }

    pub fn cumulative_slash_at(
        &self,
        subnetwork: &Subnetwork,
        operator: &Address,
        ts: Timestamp,
    ) -> U256 {
        self.state
            .read()
            .cumulative
            .get(&(*subnetwork, *operator))
            .map_or_else(U256::zero, |c| c.total_at(ts))
    }

    fn slashable(
        &self,
        state: &SlasherState,
        subnetwork: &Subnetwork,
        operator: &Address,
        capture: Timestamp,
        now: Timestamp,
    ) -> SlasherResult<U256> {
        if capture >= now || capture < now.saturating_sub(self.epoch_duration) {
            return Ok(U256::zero());
        }
        let stake = self.stakes.stake_at(subnetwork, operator, capture)?;
        let slashable = match state.cumulative.get(&(*subnetwork, *operator)) {
            Some(cumulative) => cumulative.slashable(stake, capture),
            None => stake,
        };
        debug!(
            subsystem = "slasher",
            subnetwork = %subnetwork,
            operator = %short_hex(operator),
            capture,
            %stake,
            %slashable,
            "[rv-03] Slashable stake"
        );
        Ok(slashable)
    }

    fn require_middleware(&self, caller: &Address, network: Address) -> SlasherResult<()> {
        if !self.access.has_role(&Role::NetworkMiddleware(network), caller) {
            warn!(
                subsystem = "slasher",
                caller = %short_hex(caller),
                network = %short_hex(&network),
                "[rv-03] Rejected caller that is not the network middleware"
            );
            return Err(SlasherError::NotNetworkMiddleware);
        }
        Ok(())
    }
}

impl<V, S, B, A, C> VetoSlasherApi for VetoSlasherService<V, S, B, A, C>
where
    V: SlashableVault,
    S: StakeProvider,
    B: BurnerHook,
    A: AccessControl,
    C: TimeSource,
{
    fn request_slash(
        &self,
        caller: Address,
        subnetwork: Subnetwork,
        operator: Address,
        amount: U256,
        capture_timestamp: Timestamp,
    ) -> SlasherResult<u64> {
        self.require_middleware(&caller, subnetwork.network)?;

        let now = self.time.now();
        let earliest = (now + self.config.veto_duration).saturating_sub(self.epoch_duration);
        if capture_timestamp < earliest || capture_timestamp >= now {
            return Err(SlasherError::InvalidCaptureTimestamp {
                capture: capture_timestamp,
                now,
            });
        }

        let mut state = self.state.write();
        let slashable = self.slashable(&state, &subnetwork, &operator, capture_timestamp, now)?;
        let amount = amount.min(slashable);
        if amount.is_zero() {
            return Err(SlasherError::InsufficientSlash);
        }

        let index = state.requests.len() as u64;
        let veto_deadline = now + self.config.veto_duration;
        state.requests.push(SlashRequest {
            subnetwork,
            operator,
            amount,
            capture_timestamp,
            veto_deadline,
            state: RequestState::Requested,
        });
        state.events.push(SlasherEvent::RequestSlash {
            index,
            subnetwork,
            operator,
            amount,
            capture_timestamp,
            veto_deadline,
        });
        metrics::record_request();

        info!(
            subsystem = "slasher",
            slash_index = index,
            subnetwork = %subnetwork,
            operator = %short_hex(&operator),
            %amount,
            capture_timestamp,
            veto_deadline,
            "[rv-03] Slash requested"
        );
        Ok(index)
    }

    fn veto_slash(&self, caller: Address, index: u64) -> SlasherResult<()> {
        let now = self.time.now();
        let mut state = self.state.write();
        let request = state.request_mut(index)?;

        if !self.access.has_role(&Role::Resolver(request.subnetwork), &caller) {
            warn!(
                subsystem = "slasher",
                caller = %short_hex(&caller),
                slash_index = index,
                "[rv-03] Rejected veto from non-resolver"
            );
            return Err(SlasherError::NotResolver);
        }
        request.veto(now)?;

        state.events.push(SlasherEvent::VetoSlash {
            index,
            resolver: caller,
        });
        metrics::record_veto();

        info!(
            subsystem = "slasher",
            slash_index = index,
            resolver = %short_hex(&caller),
            "[rv-03] Slash vetoed"
        );
        Ok(())
    }

    fn execute_slash(&self, caller: Address, index: u64) -> SlasherResult<U256> {
        let now = self.time.now();
        let mut state = self.state.write();
        let request = *state.request_mut(index)?;

        self.require_middleware(&caller, request.subnetwork.network)?;
        request.check_executable(now, self.epoch_duration)?;

        let slashable = self.slashable(
            &state,
            &request.subnetwork,
            &request.operator,
            request.capture_timestamp,
            now,
        )?;
        let amount = request.amount.min(slashable);
        if amount.is_zero() {
            return Err(SlasherError::InsufficientSlash);
        }

        let slashed = self
            .vault
            .on_slash(self.config.address, amount, request.capture_timestamp)?;

        state
            .cumulative
            .entry((request.subnetwork, request.operator))
            .or_default()
            .record(request.capture_timestamp, slashed, now)?;
        state.request_mut(index)?.mark_executed(slashed);
        state.events.push(SlasherEvent::ExecuteSlash { index, slashed });
        metrics::record_execution();

        info!(
            subsystem = "slasher",
            slash_index = index,
            subnetwork = %request.subnetwork,
            operator = %short_hex(&request.operator),
            requested = %request.amount,
            %slashed,
            "[rv-03] Slash executed"
        );

        if !slashed.is_zero() {
            if let Err(e) = self.burner.on_slash(
                &request.subnetwork,
                &request.operator,
                slashed,
                request.capture_timestamp,
            ) {
                warn!(
                    subsystem = "slasher",
                    slash_index = index,
                    error = %e,
                    "[rv-03] Burner hook failed"
                );
            }
        }
        Ok(slashed)
    }

    fn slashable_stake(
        &self,
        subnetwork: &Subnetwork,
        operator: &Address,
        capture_timestamp: Timestamp,
    ) -> SlasherResult<U256> {
        let now = self.time.now();
        let state = self.state.read();
        self.slashable(&state, subnetwork, operator, capture_timestamp, now)
    }

    fn slash_request(&self, index: u64) -> Option<SlashRequest> {
        let state = self.state.read();
        usize::try_from(index)
            .ok()
            .and_then(|i| state.requests.get(i).copied())
    }

    fn slash_requests_length(&self) -> u64 {
        self.state.read().requests.len() as u64
    }

    fn drain_events(&self) -> Vec<SlasherEvent> {
        std::mem::take(&mut self.state.write().events)
    }
}
