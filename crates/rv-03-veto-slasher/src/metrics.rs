//! # Veto Slasher Metrics
//!
//! Enable with the `metrics` feature.
//!
//! - `slasher_requests_total` - Counter of slash requests
//! - `slasher_vetoes_total` - Counter of vetoed requests
//! - `slasher_executions_total` - Counter of executed requests

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, IntCounter};

#[cfg(feature = "metrics")]
lazy_static! {
    pub static ref REQUESTS: IntCounter = register_int_counter!(
        "slasher_requests_total",
        "Total number of slash requests"
    )
    .expect("Failed to create REQUESTS metric");

    pub static ref VETOES: IntCounter = register_int_counter!(
        "slasher_vetoes_total",
        "Total number of vetoed slash requests"
    )
    .expect("Failed to create VETOES metric");

    pub static ref EXECUTIONS: IntCounter = register_int_counter!(
        "slasher_executions_total",
        "Total number of executed slash requests"
    )
    .expect("Failed to create EXECUTIONS metric");
}

#[cfg(feature = "metrics")]
pub fn record_request() {
    REQUESTS.inc();
}

#[cfg(feature = "metrics")]
pub fn record_veto() {
    VETOES.inc();
}

#[cfg(feature = "metrics")]
pub fn record_execution() {
    EXECUTIONS.inc();
}

#[cfg(not(feature = "metrics"))]
pub fn record_request() {}

#[cfg(not(feature = "metrics"))]
pub fn record_veto() {}

#[cfg(not(feature = "metrics"))]
pub fn record_execution() {}
