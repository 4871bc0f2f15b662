//! Error types for the Veto Slasher subsystem

use rv_01_vault::VaultError;
use rv_02_delegator::DelegatorError;
use rv_04_burner_router::RouterError;
use shared_types::{CheckpointError, MathError, Timestamp};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlasherError {
    /// Caller is not the subnetwork's middleware
    #[error("Not network middleware")]
    NotNetworkMiddleware,

    /// Caller is not the subnetwork's resolver
    #[error("Not resolver")]
    NotResolver,

    /// Capture timestamp outside `[now + veto - epoch, now)`
    #[error("Invalid capture timestamp {capture} at {now}")]
    InvalidCaptureTimestamp { capture: Timestamp, now: Timestamp },

    /// Nothing slashable remains for the pair at the capture timestamp
    #[error("Insufficient slash")]
    InsufficientSlash,

    #[error("Slash request {0} does not exist")]
    SlashRequestNotExist(u64),

    /// Request already vetoed or executed
    #[error("Slash request completed")]
    SlashRequestCompleted,

    #[error("Veto period ended")]
    VetoPeriodEnded,

    #[error("Veto period not ended")]
    VetoPeriodNotEnded,

    /// Capture is more than one epoch old
    #[error("Slash period ended")]
    SlashPeriodEnded,

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Vault error: {0}")]
    Vault(#[from] VaultError),

    #[error("Delegator error: {0}")]
    Delegator(#[from] DelegatorError),

    #[error("Burner error: {0}")]
    Burner(#[from] RouterError),

    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}

pub type SlasherResult<T> = Result<T, SlasherError>;
