//! Ports for the Vault subsystem.

pub mod inbound;
pub mod outbound;
