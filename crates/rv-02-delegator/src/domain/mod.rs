//! Domain layer for the Delegator subsystem.

pub mod limits;
pub mod shares;

pub use limits::NetworkLimits;
pub use shares::OperatorShares;
