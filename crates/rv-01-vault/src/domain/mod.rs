//! Domain layer for the Vault subsystem: pure state and arithmetic.

pub mod active_stake;
pub mod epoch;
pub mod policy;
pub mod slashing;
pub mod withdrawal_queue;

pub use active_stake::ActiveStakeLedger;
pub use epoch::EpochClock;
pub use policy::DepositPolicy;
pub use slashing::{compute_split, split_pro_rata, SlashScope, SlashSplit, SlashableBuckets};
pub use withdrawal_queue::{ClaimQuote, WithdrawalBucket, WithdrawalQueue};
