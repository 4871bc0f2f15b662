//! # Restaking Vault Test Suite
//!
//! Cross-subsystem scenarios wiring the vault, delegator, veto slasher and
//! burner router against the in-memory collateral, access-control and
//! registry adapters.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── harness.rs        # Deployment fixture shared by every scenario
//! └── integration/
//!     ├── vault_flows.rs      # deposit / withdraw / claim lifecycles
//!     ├── slashing_flows.rs   # request / veto / execute into the vault
//!     ├── router_flows.rs     # delayed receiver changes and payouts
//!     └── randomized.rs       # seeded multi-step flows with invariants
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p rv-tests
//! cargo test -p rv-tests integration::randomized
//! ```

pub mod harness;
pub mod integration;
