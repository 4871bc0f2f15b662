//! Network/operator registries and opt-in services.
//!
//! Consulted only to validate that an identity is a registered entity and
//! whether it was opted in to a given vault or network at a timestamp.

use crate::checkpoints::Checkpoints;
use crate::entities::{Address, Timestamp, U256};
use crate::errors::RegistryError;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};

/// Registry of known entities (networks or operators).
pub trait EntityRegistry: Send + Sync {
    fn is_entity(&self, who: &Address) -> bool;
}

/// Timestamped opt-in of `who` into `target`.
pub trait OptInService: Send + Sync {
    fn is_opted_in_at(&self, who: &Address, target: &Address, at: Timestamp) -> bool;
}

#[derive(Debug, Default)]
struct RegistryState {
    entities: HashSet<Address>,
    opt_ins: HashMap<(Address, Address), Checkpoints>,
}

/// In-memory registry with opt-in history.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    state: RwLock<RegistryState>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, who: Address) -> Result<(), RegistryError> {
        if !self.state.write().entities.insert(who) {
            return Err(RegistryError::AlreadyRegistered(who));
        }
        Ok(())
    }

    /// Opts `who` into `target` starting at `now`.
    pub fn opt_in(&self, who: Address, target: Address, now: Timestamp) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        if !state.entities.contains(&who) {
            return Err(RegistryError::NotEntity(who));
        }
        let trace = state.opt_ins.entry((who, target)).or_default();
        if !trace.latest().is_zero() {
            return Err(RegistryError::AlreadyOptedIn);
        }
        trace.push(now, U256::one())?;
        Ok(())
    }

    /// Ends the opt-in of `who` into `target` at `now`.
    pub fn opt_out(&self, who: Address, target: Address, now: Timestamp) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        let trace = state
            .opt_ins
            .get_mut(&(who, target))
            .filter(|t| !t.latest().is_zero())
            .ok_or(RegistryError::NotOptedIn)?;
        trace.push(now, U256::zero())?;
        Ok(())
    }
}

impl EntityRegistry for InMemoryRegistry {
    fn is_entity(&self, who: &Address) -> bool {
        self.state.read().entities.contains(who)
    }
}

impl OptInService for InMemoryRegistry {
    fn is_opted_in_at(&self, who: &Address, target: &Address, at: Timestamp) -> bool {
        self.state
            .read()
            .opt_ins
            .get(&(*who, *target))
            .map(|t| !t.upper_lookup(at).is_zero())
            .unwrap_or(false)
    }
}
