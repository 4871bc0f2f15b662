//! # rv-04-burner-router
//!
//! Delayed-destination forwarder for seized collateral.
//!
//! The router receives whatever the vault seizes and forwards it to a
//! receiver chosen per `(network, operator)`. Receivers are changed only
//! through [`PendingChange`] slots whose delay outlasts an unstaking epoch,
//! so governance cannot redirect seized funds faster than stakers can leave.

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use config::{
    BurnerRouterConfig, NetworkReceiver, OperatorNetworkReceiver, DEFAULT_DELAY,
    DEFAULT_DELAY_CHANGE_DELAY,
};
pub use domain::{DelayedSlot, PendingChange, ReceiverRoutes};
pub use error::{RouterError, RouterResult};
pub use ports::inbound::BurnerRouterApi;
pub use service::BurnerRouterService;
