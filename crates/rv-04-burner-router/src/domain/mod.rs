//! Domain layer for the Burner Router subsystem.

pub mod pending;
pub mod routes;

pub use pending::{DelayedSlot, PendingChange};
pub use routes::ReceiverRoutes;
