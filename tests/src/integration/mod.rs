//! Cross-subsystem scenarios.

pub mod randomized;
pub mod router_flows;
pub mod slashing_flows;
pub mod vault_flows;
