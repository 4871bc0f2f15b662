//! Domain layer for the Veto Slasher subsystem.

pub mod cumulative;
pub mod request;

pub use cumulative::CumulativeSlash;
pub use request::{RequestState, SlashRequest};
