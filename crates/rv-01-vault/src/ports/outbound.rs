//! Outbound (Driven) ports for the Vault subsystem.
//!
//! The vault needs three collaborators: the collateral ledger it pulls
//! deposits from and pays claims and seizures out of, the access-control
//! store guarding policy setters, and a clock.

pub use shared_types::{AccessControl, CollateralToken, TimeSource};
