//! Error types for the Vault subsystem

use shared_types::{CheckpointError, Epoch, MathError, Role, TokenError, U256};
use thiserror::Error;

/// Vault subsystem errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VaultError {
    /// Deposit of zero assets, or one that mints zero shares
    #[error("Insufficient deposit")]
    InsufficientDeposit,

    /// Withdrawal of zero assets
    #[error("Insufficient withdrawal")]
    InsufficientWithdrawal,

    /// Redemption of zero shares, or one worth zero assets
    #[error("Insufficient redemption")]
    InsufficientRedemption,

    /// Nothing left to claim for the requested epoch(s)
    #[error("Insufficient claim")]
    InsufficientClaim,

    #[error("Invalid on-behalf-of account")]
    InvalidOnBehalfOf,

    #[error("Invalid claimer")]
    InvalidClaimer,

    #[error("Invalid recipient")]
    InvalidRecipient,

    #[error("Invalid account")]
    InvalidAccount,

    /// Batch claim with no epochs
    #[error("Invalid length of epochs")]
    InvalidLengthEpochs,

    /// Withdrawal exceeds the caller's active balance
    #[error("Too much withdraw: requested {requested}, available {available}")]
    TooMuchWithdraw { requested: U256, available: U256 },

    /// Redemption exceeds the caller's active shares
    #[error("Too much redeem: requested {requested}, available {available}")]
    TooMuchRedeem { requested: U256, available: U256 },

    /// Whitelisting enabled and the caller is not listed
    #[error("Not a whitelisted depositor")]
    NotWhitelistedDepositor,

    /// Deposit would push total stake over the limit
    #[error("Deposit limit reached: limit {limit}, would reach {would_reach}")]
    DepositLimitReached { limit: U256, would_reach: U256 },

    /// Epoch not yet claimable
    #[error("Invalid epoch {epoch}: current epoch is {current}")]
    InvalidEpoch { epoch: Epoch, current: Epoch },

    /// Previous epoch requested while in epoch zero
    #[error("No previous epoch")]
    NoPreviousEpoch,

    /// `on_slash` called by anyone but the configured slasher
    #[error("Not slasher")]
    NotSlasher,

    /// Caller lacks the role guarding the setting
    #[error("Missing role {0:?}")]
    MissingRole(Role),

    /// Setting already holds the requested value
    #[error("Already set")]
    AlreadySet,

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}

/// Result type for vault operations
pub type VaultResult<T> = Result<T, VaultError>;
