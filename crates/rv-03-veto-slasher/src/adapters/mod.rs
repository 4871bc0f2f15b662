//! Adapters connecting the slasher's outbound ports to the vault, delegator
//! and burner router subsystems.

pub mod burner;
pub mod delegator;
pub mod vault;
