//! Error types for the Burner Router subsystem

use shared_types::{MathError, Timestamp, TokenError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// Caller lacks the router owner role
    #[error("Not owner")]
    NotOwner,

    /// Proposed value is already committed or already pending
    #[error("Already set")]
    AlreadySet,

    /// No pending change, or its delay has not elapsed
    #[error("Not ready: ready at {ready_at:?}, now {now}")]
    NotReady {
        ready_at: Option<Timestamp>,
        now: Timestamp,
    },

    /// Null receiver
    #[error("Invalid receiver")]
    InvalidReceiver,

    /// Nothing owed to the receiver
    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type RouterResult<T> = Result<T, RouterError>;
