//! Ports for the Burner Router subsystem.

pub mod inbound;
pub mod outbound;
