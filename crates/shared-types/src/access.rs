//! Role-based access control port.
//!
//! Authorization is consulted only as a boolean predicate: "does this caller
//! hold this role". Services receive the caller identity explicitly and ask
//! the injected [`AccessControl`] implementation.

use crate::entities::{Address, Subnetwork};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Roles recognised across the workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// May toggle deposit whitelisting on the vault.
    DepositWhitelistSet,
    /// May add or remove whitelisted depositors.
    DepositorWhitelist,
    /// May toggle deposit-limit enforcement.
    IsDepositLimitSet,
    /// May change the deposit limit value.
    DepositLimitSet,
    /// May set per-subnetwork stake limits on the delegator.
    NetworkLimitSet,
    /// May set operator shares on the delegator.
    OperatorNetworkSharesSet,
    /// Middleware allowed to request slashes on behalf of a network.
    NetworkMiddleware(Address),
    /// Veto authority for a subnetwork's slash requests.
    Resolver(Subnetwork),
    /// Owner of the burner router.
    RouterOwner,
}

/// Access-control predicate.
pub trait AccessControl: Send + Sync {
    fn has_role(&self, role: &Role, account: &Address) -> bool;
}

/// In-memory role table.
#[derive(Debug, Default)]
pub struct InMemoryAccessControl {
    grants: RwLock<HashSet<(Role, Address)>>,
}

impl InMemoryAccessControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants `role` to `account`. Returns false if already held.
    pub fn grant_role(&self, role: Role, account: Address) -> bool {
        self.grants.write().insert((role, account))
    }

    /// Revokes `role` from `account`. Returns false if not held.
    pub fn revoke_role(&self, role: Role, account: Address) -> bool {
        self.grants.write().remove(&(role, account))
    }
}

impl AccessControl for InMemoryAccessControl {
    fn has_role(&self, role: &Role, account: &Address) -> bool {
        self.grants.read().contains(&(*role, *account))
    }
}
