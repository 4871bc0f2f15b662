//! Outbound (Driven) ports for the Burner Router subsystem.

pub use shared_types::{AccessControl, CollateralToken, TimeSource};
