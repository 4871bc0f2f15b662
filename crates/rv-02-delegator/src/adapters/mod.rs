//! Adapters connecting the delegator's outbound ports to other subsystems.

pub mod vault;
