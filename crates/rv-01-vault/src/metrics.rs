//! # Vault Metrics
//!
//! Prometheus metrics for the vault ledger.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! rv-01-vault = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `vault_deposits_total` - Counter of deposits
//! - `vault_withdrawals_total` - Counter of withdraw/redeem requests
//! - `vault_claims_total` - Counter of claimed epochs
//! - `vault_slash_events_total` - Counter of non-empty seizures
//! - `vault_active_stake` - Gauge of active stake (lossy for very large values)
//! - `vault_total_stake` - Gauge of slashable stake

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_gauge, register_int_counter, Gauge, IntCounter};

#[cfg(feature = "metrics")]
lazy_static! {
    pub static ref DEPOSITS: IntCounter = register_int_counter!(
        "vault_deposits_total",
        "Total number of deposits"
    )
    .expect("Failed to create DEPOSITS metric");

    pub static ref WITHDRAWALS: IntCounter = register_int_counter!(
        "vault_withdrawals_total",
        "Total number of withdraw and redeem requests"
    )
    .expect("Failed to create WITHDRAWALS metric");

    pub static ref CLAIMS: IntCounter = register_int_counter!(
        "vault_claims_total",
        "Total number of epochs claimed"
    )
    .expect("Failed to create CLAIMS metric");

    pub static ref SLASH_EVENTS: IntCounter = register_int_counter!(
        "vault_slash_events_total",
        "Total number of seizures that moved assets"
    )
    .expect("Failed to create SLASH_EVENTS metric");

    pub static ref ACTIVE_STAKE: Gauge = register_gauge!(
        "vault_active_stake",
        "Active stake in collateral units"
    )
    .expect("Failed to create ACTIVE_STAKE metric");

    pub static ref TOTAL_STAKE: Gauge = register_gauge!(
        "vault_total_stake",
        "Active stake plus open withdrawal buckets"
    )
    .expect("Failed to create TOTAL_STAKE metric");
}

// =============================================================================
// METRIC RECORDING FUNCTIONS
// =============================================================================

#[cfg(feature = "metrics")]
pub fn record_deposit() {
    DEPOSITS.inc();
}

#[cfg(feature = "metrics")]
pub fn record_withdrawal() {
    WITHDRAWALS.inc();
}

#[cfg(feature = "metrics")]
pub fn record_claims(epochs: u64) {
    CLAIMS.inc_by(epochs);
}

#[cfg(feature = "metrics")]
pub fn record_slash() {
    SLASH_EVENTS.inc();
}

/// Update stake gauges.
#[cfg(feature = "metrics")]
pub fn set_stake(active: f64, total: f64) {
    ACTIVE_STAKE.set(active);
    TOTAL_STAKE.set(total);
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_deposit() {}

#[cfg(not(feature = "metrics"))]
pub fn record_withdrawal() {}

#[cfg(not(feature = "metrics"))]
pub fn record_claims(_epochs: u64) {}

#[cfg(not(feature = "metrics"))]
pub fn record_slash() {}

#[cfg(not(feature = "metrics"))]
pub fn set_stake(_active: f64, _total: f64) {}
