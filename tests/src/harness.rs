//! Deployment fixture: one vault with its delegator, veto slasher and burner
//! router, all driven by a shared manual clock.

use rv_01_vault::{VaultApi, VaultConfig, VaultService};
use rv_02_delegator::{DelegatorApi, DelegatorConfig, DelegatorService};
use rv_03_veto_slasher::{SlasherConfig, VetoSlasherService};
use rv_04_burner_router::{BurnerRouterConfig, BurnerRouterService};
use rv_telemetry::{init_logging, TelemetryConfig};
use shared_types::{
    Address, InMemoryAccessControl, InMemoryCollateral, InMemoryRegistry, ManualTimeSource, Role,
    Subnetwork, Timestamp, DAY, U256,
};
use std::sync::{Arc, Once};

pub type Vault = VaultService<InMemoryCollateral, InMemoryAccessControl, ManualTimeSource>;

pub type Delegator = DelegatorService<
    Vault,
    InMemoryRegistry,
    InMemoryRegistry,
    InMemoryAccessControl,
    ManualTimeSource,
>;

pub type Router = BurnerRouterService<InMemoryCollateral, InMemoryAccessControl, ManualTimeSource>;

pub type Slasher =
    VetoSlasherService<Vault, Delegator, Router, InMemoryAccessControl, ManualTimeSource>;

/// Genesis time of every deployment.
pub const START: Timestamp = 1_000 * DAY;
pub const EPOCH: u64 = 7 * DAY;
pub const VETO: u64 = 3 * DAY;

pub const NETWORK: Address = [0x4E; 20];
pub const OPERATOR: Address = [0x0F; 20];
pub const MIDDLEWARE: Address = [0x3D; 20];
pub const RESOLVER: Address = [0x7E; 20];
pub const CURATOR: Address = [0xCC; 20];
pub const ROUTER_OWNER: Address = [0x0A; 20];

pub const ALICE: Address = [0xA1; 20];
pub const BOB: Address = [0xB0; 20];
pub const CAROL: Address = [0xCA; 20];

static LOGGING: Once = Once::new();

pub fn subnetwork() -> Subnetwork {
    Subnetwork::new(NETWORK, 0)
}

pub struct Deployment {
    pub time: Arc<ManualTimeSource>,
    pub token: Arc<InMemoryCollateral>,
    pub access: Arc<InMemoryAccessControl>,
    pub vault: Arc<Vault>,
    pub delegator: Arc<Delegator>,
    pub router: Arc<Router>,
    pub slasher: Slasher,
}

impl Deployment {
    /// Deploys with a 7-day epoch, a 3-day veto window, the network
    /// registered and the operator opted in to both vault and network.
    pub fn new() -> Self {
        LOGGING.call_once(|| {
            let _ = init_logging(&TelemetryConfig::for_testing());
        });

        let time = Arc::new(ManualTimeSource::new(START));
        let token = Arc::new(InMemoryCollateral::new());
        let access = Arc::new(InMemoryAccessControl::new());
        access.grant_role(Role::NetworkMiddleware(NETWORK), MIDDLEWARE);
        access.grant_role(Role::Resolver(subnetwork()), RESOLVER);
        access.grant_role(Role::NetworkLimitSet, CURATOR);
        access.grant_role(Role::OperatorNetworkSharesSet, CURATOR);
        access.grant_role(Role::RouterOwner, ROUTER_OWNER);

        let vault_config = VaultConfig {
            epoch_duration: EPOCH,
            ..VaultConfig::for_testing()
        };
        let vault_address = vault_config.address;
        let vault = Arc::new(
            VaultService::new(
                vault_config,
                Arc::clone(&token),
                Arc::clone(&access),
                Arc::clone(&time),
            )
            .expect("vault config"),
        );

        let networks = Arc::new(InMemoryRegistry::new());
        networks.register(NETWORK).expect("register network");
        let vault_opt_in = Arc::new(InMemoryRegistry::new());
        vault_opt_in.register(OPERATOR).expect("register operator");
        vault_opt_in
            .opt_in(OPERATOR, vault_address, START)
            .expect("vault opt-in");
        let network_opt_in = Arc::new(InMemoryRegistry::new());
        network_opt_in.register(OPERATOR).expect("register operator");
        network_opt_in
            .opt_in(OPERATOR, NETWORK, START)
            .expect("network opt-in");

        let delegator = Arc::new(
            DelegatorService::new(
                DelegatorConfig::for_testing(),
                Arc::clone(&vault),
                networks,
                vault_opt_in,
                network_opt_in,
                Arc::clone(&access),
                Arc::clone(&time),
            )
            .expect("delegator config"),
        );

        let router = Arc::new(
            BurnerRouterService::new(
                BurnerRouterConfig::for_testing(),
                Arc::clone(&token),
                Arc::clone(&access),
                Arc::clone(&time),
            )
            .expect("router config"),
        );

        let slasher = VetoSlasherService::new(
            SlasherConfig {
                veto_duration: VETO,
                ..SlasherConfig::for_testing()
            },
            Arc::clone(&vault),
            Arc::clone(&delegator),
            Arc::clone(&router),
            Arc::clone(&access),
            Arc::clone(&time),
        )
        .expect("slasher config");

        Self {
            time,
            token,
            access,
            vault,
            delegator,
            router,
            slasher,
        }
    }

    pub fn now(&self) -> Timestamp {
        shared_types::TimeSource::now(self.time.as_ref())
    }

    pub fn advance(&self, secs: u64) {
        self.time.advance(secs);
    }

    /// Mints `amount` to `who`, approves the vault and deposits it.
    pub fn deposit(&self, who: Address, amount: u64) -> U256 {
        let amount = U256::from(amount);
        self.token.mint(&who, amount).expect("mint");
        self.token.approve(&who, &self.vault.address(), amount);
        self.vault
            .deposit(who, who, amount)
            .expect("deposit")
            .minted_shares
    }

    /// Delegates up to `limit` of the vault to the operator in the
    /// subnetwork, with the operator holding all shares.
    pub fn delegate(&self, limit: u64) {
        let limit = U256::from(limit);
        self.delegator
            .set_max_network_limit(NETWORK, subnetwork(), limit)
            .expect("max network limit");
        self.delegator
            .set_network_limit(CURATOR, subnetwork(), limit)
            .expect("network limit");
        self.delegator
            .set_operator_network_shares(CURATOR, subnetwork(), OPERATOR, U256::one())
            .expect("operator shares");
    }

    pub fn balance(&self, who: &Address) -> U256 {
        shared_types::CollateralToken::balance_of(self.token.as_ref(), who)
    }
}

impl Default for Deployment {
    fn default() -> Self {
        Self::new()
    }
}
