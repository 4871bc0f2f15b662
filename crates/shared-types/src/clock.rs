//! Time source port.
//!
//! The only notion of time in the workspace: a monotonically non-decreasing
//! wall-clock read. Abstracted to allow testing with deterministic time.

use crate::entities::Timestamp;
use std::sync::atomic::{AtomicU64, Ordering};

/// Seconds per day.
pub const DAY: u64 = 86_400;

/// Time source for consistent timestamp handling.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in seconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Manually driven time source for tests and simulations.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    time: AtomicU64,
}

impl ManualTimeSource {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: AtomicU64::new(initial),
        }
    }

    /// Moves time forward by `secs`.
    pub fn advance(&self, secs: u64) {
        self.time.fetch_add(secs, Ordering::SeqCst);
    }

    /// Jumps to `time`. Never moves backwards.
    pub fn set(&self, time: Timestamp) {
        self.time.fetch_max(time, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Timestamp {
        self.time.load(Ordering::SeqCst)
    }
}
