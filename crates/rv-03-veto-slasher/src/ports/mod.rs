//! Ports for the Veto Slasher subsystem.

pub mod inbound;
pub mod outbound;
