//! Driving Ports (API - Inbound)

use crate::domain::SlashRequest;
use crate::error::SlasherResult;
use crate::events::SlasherEvent;
use shared_types::{Address, Subnetwork, Timestamp, U256};

/// Primary Veto Slasher API
pub trait VetoSlasherApi: Send + Sync {
    /// Opens a slash request against `operator` in `subnetwork`.
    ///
    /// The amount is capped to the pair's slashable stake at
    /// `capture_timestamp`. Returns the request index.
    ///
    /// # Errors
    /// - `NotNetworkMiddleware`: caller is not the subnetwork's middleware
    /// - `InvalidCaptureTimestamp`: capture not in `[now + veto - epoch, now)`
    /// - `InsufficientSlash`: nothing slashable remains
    fn request_slash(
        &self,
        caller: Address,
        subnetwork: Subnetwork,
        operator: Address,
        amount: U256,
        capture_timestamp: Timestamp,
    ) -> SlasherResult<u64>;

    /// Cancels a pending request. Resolver only, before the veto deadline.
    fn veto_slash(&self, caller: Address, index: u64) -> SlasherResult<()>;

    /// Executes a request once its veto window has passed, returning the
    /// amount actually seized.
    fn execute_slash(&self, caller: Address, index: u64) -> SlasherResult<U256>;

    /// Stake of the pair still slashable for a capture at `capture_timestamp`.
    fn slashable_stake(
        &self,
        subnetwork: &Subnetwork,
        operator: &Address,
        capture_timestamp: Timestamp,
    ) -> SlasherResult<U256>;

    fn slash_request(&self, index: u64) -> Option<SlashRequest>;

    fn slash_requests_length(&self) -> u64;

    fn drain_events(&self) -> Vec<SlasherEvent>;
}
