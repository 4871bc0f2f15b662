//! # rv-01-vault
//!
//! Restaking vault: collateral deposits mint tradeable shares, withdrawals
//! settle through an epoch-delayed queue, and a designated slasher can seize
//! the stake that was live at a capture timestamp.
//!
//! ## Overview
//!
//! This subsystem provides:
//! - **Epoch Clock**: fixed-length epochs anchored at the first deposit
//! - **Active Stake Ledger**: checkpointed stake/shares defining the share price
//! - **Withdrawal Queue**: per-epoch buckets, claimable two boundaries later
//! - **Slashing Engine**: pro-rata seizure across the still-open buckets
//!
//! ## Stake buckets
//!
//! ```text
//!            epoch e-1         epoch e (current)        epoch e+1
//!  ─────────────┬──────────────────────┬───────────────────────┬──────
//!   withdraw ──→│ withdrawals[e]       │ withdrawals[e+1]      │
//!               │ (claimable at e+1)   │ (claimable at e+2)    │
//!
//!  total_stake = active + withdrawals[e] + withdrawals[e+1]
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use rv_01_vault::{VaultApi, VaultConfig, VaultService};
//!
//! let vault = VaultService::new(VaultConfig::for_testing(), token, access, clock)?;
//! vault.deposit(alice, alice, U256::from(1_000))?;
//! let queued = vault.withdraw(alice, alice, U256::from(1_000))?;
//! // two epoch boundaries later
//! let claimed = vault.claim(alice, alice, queued.epoch)?;
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;

pub use config::{VaultConfig, DEFAULT_EPOCH_DURATION};
pub use domain::{
    compute_split, split_pro_rata, ActiveStakeLedger, EpochClock, SlashScope, SlashSplit,
    SlashableBuckets, WithdrawalBucket, WithdrawalQueue,
};
pub use error::{VaultError, VaultResult};
pub use events::VaultEvent;
pub use ports::inbound::{DepositReceipt, VaultApi, WithdrawalReceipt};
pub use service::VaultService;
