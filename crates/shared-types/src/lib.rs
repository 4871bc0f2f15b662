//! # Shared Types Crate
//!
//! Domain entities and collaborator ports shared by the vault, delegator,
//! veto slasher and burner router subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: identities (`Address`, `Subnetwork`),
//!   amounts (`U256`) and time (`Timestamp`) are defined once here.
//! - **Explicit Caller Identity**: every mutating operation in the workspace
//!   receives the caller as an `Address` and checks it against the
//!   [`AccessControl`] port; nothing reads an ambient sender.
//! - **Injected Time**: all delay, epoch and veto-window arithmetic reads the
//!   [`TimeSource`] port, so tests drive time with [`ManualTimeSource`].

pub mod access;
pub mod checkpoints;
pub mod clock;
pub mod entities;
pub mod errors;
pub mod math;
pub mod registry;
pub mod token;

pub use access::{AccessControl, InMemoryAccessControl, Role};
pub use checkpoints::{Checkpoint, Checkpoints};
pub use clock::{ManualTimeSource, SystemTimeSource, TimeSource, DAY};
pub use entities::*;
pub use errors::*;
pub use math::Rounding;
pub use registry::{EntityRegistry, InMemoryRegistry, OptInService};
pub use token::{CollateralToken, InMemoryCollateral};
