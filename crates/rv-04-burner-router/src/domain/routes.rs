//! Receiver routing.
//!
//! Seized funds for a `(network, operator)` go to the operator-network
//! override if set, else the network override, else the global receiver.

use crate::domain::pending::DelayedSlot;
use shared_types::Address;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct ReceiverRoutes {
    pub global: DelayedSlot<Address>,
    pub networks: HashMap<Address, DelayedSlot<Option<Address>>>,
    pub operator_networks: HashMap<(Address, Address), DelayedSlot<Option<Address>>>,
}

impl ReceiverRoutes {
    pub fn new(global: Address) -> Self {
        Self {
            global: DelayedSlot::new(global),
            networks: HashMap::new(),
            operator_networks: HashMap::new(),
        }
    }

    pub fn network(&self, network: &Address) -> Option<Address> {
        self.networks.get(network).and_then(|slot| *slot.current())
    }

    pub fn operator_network(&self, network: &Address, operator: &Address) -> Option<Address> {
        self.operator_networks
            .get(&(*network, *operator))
            .and_then(|slot| *slot.current())
    }

    pub fn network_slot(&mut self, network: Address) -> &mut DelayedSlot<Option<Address>> {
        self.networks
            .entry(network)
            .or_insert_with(|| DelayedSlot::new(None))
    }

    pub fn operator_network_slot(
        &mut self,
        network: Address,
        operator: Address,
    ) -> &mut DelayedSlot<Option<Address>> {
        self.operator_networks
            .entry((network, operator))
            .or_insert_with(|| DelayedSlot::new(None))
    }

    pub fn resolve(&self, network: &Address, operator: &Address) -> Address {
        self.operator_network(network, operator)
            .or_else(|| self.network(network))
            .unwrap_or(*self.global.current())
    }
}
