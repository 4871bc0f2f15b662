//! # Veto Slasher Subsystem
//!
//! Two-phase slashing for a vault: a network's middleware requests a slash
//! against an operator's stake at a capture timestamp, the subnetwork's
//! resolver may veto it during the veto window, and afterwards the
//! middleware executes it into the vault.
//!
//! ```text
//! middleware ──request_slash──→ [Requested] ──veto_slash (resolver)──→ [Vetoed]
//!                                   │
//!                                   └──execute_slash (after deadline)──→ Vault.on_slash
//!                                                                          │
//!                                                               BurnerHook.on_slash
//! ```
//!
//! Per `(subnetwork, operator)` pair the slasher keeps the latest slashed
//! capture timestamp and a cumulative slash trace. Together they bound how
//! much of the same backing can be seized again.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;

pub use config::{SlasherConfig, DEFAULT_VETO_DURATION};
pub use domain::{CumulativeSlash, RequestState, SlashRequest};
pub use error::{SlasherError, SlasherResult};
pub use events::SlasherEvent;
pub use ports::inbound::VetoSlasherApi;
pub use ports::outbound::{BurnerHook, SlashableVault, StakeProvider};
pub use service::VetoSlasherService;
