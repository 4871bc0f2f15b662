//! # rv-02-delegator
//!
//! Network-restake delegation of a vault's backing.
//!
//! Networks cap how much stake they accept per subnetwork; a curator sets
//! the actual limit and splits it among operators by shares. The slasher
//! reads [`DelegatorApi::stake_at`] to bound what it may seize from an
//! operator at a capture timestamp.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use config::DelegatorConfig;
pub use domain::{NetworkLimits, OperatorShares};
pub use error::{DelegatorError, DelegatorResult};
pub use ports::inbound::DelegatorApi;
pub use ports::outbound::VaultStake;
pub use service::DelegatorService;
