//! Ports for the Delegator subsystem.

pub mod inbound;
pub mod outbound;
