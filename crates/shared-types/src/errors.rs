//! # Error Types
//!
//! Defines error types raised by the shared primitives and adapters.

use crate::entities::{Address, Timestamp, U256};
use thiserror::Error;

/// Fixed-point arithmetic failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Result does not fit in 256 bits.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Subtraction would go below zero.
    #[error("Arithmetic underflow")]
    Underflow,

    /// Denominator was zero.
    #[error("Division by zero")]
    DivisionByZero,
}

/// Checkpoint trace misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckpointError {
    /// Keys must be pushed in non-decreasing order.
    #[error("Unordered checkpoint key: {key} is before last key {last}")]
    UnorderedKey { last: Timestamp, key: Timestamp },
}

/// Collateral ledger failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Sender balance too small for the transfer.
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: U256, available: U256 },

    /// Spender allowance too small for the transfer.
    #[error("Insufficient allowance: required {required}, approved {approved}")]
    InsufficientAllowance { required: U256, approved: U256 },

    /// Transfers to the null identity are rejected.
    #[error("Invalid receiver")]
    InvalidReceiver,

    /// Balance or supply would overflow.
    #[error("Token arithmetic overflow")]
    Overflow,
}

/// Registry and opt-in failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Address is already registered.
    #[error("Entity already registered: {0:?}")]
    AlreadyRegistered(Address),

    /// Address is not a registered entity.
    #[error("Not a registered entity: {0:?}")]
    NotEntity(Address),

    /// Opt-in already active for this pair.
    #[error("Already opted in")]
    AlreadyOptedIn,

    /// No active opt-in to revoke.
    #[error("Not opted in")]
    NotOptedIn,

    /// Opt-in history could not be recorded.
    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}
