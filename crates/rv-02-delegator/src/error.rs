//! Error types for the Delegator subsystem

use rv_01_vault::VaultError;
use shared_types::{CheckpointError, MathError, Role, U256};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelegatorError {
    /// Caller is not the subnetwork's network, or not a registered network
    #[error("Not network")]
    NotNetwork,

    /// Network limit above the network's own maximum
    #[error("Exceeds max network limit: requested {requested}, max {max}")]
    ExceedsMaxNetworkLimit { requested: U256, max: U256 },

    #[error("Already set")]
    AlreadySet,

    #[error("Missing role {0:?}")]
    MissingRole(Role),

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Vault error: {0}")]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}

pub type DelegatorResult<T> = Result<T, DelegatorError>;
