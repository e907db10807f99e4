//! All networks of a session.

use ef_core::NetworkId;

use crate::error::{AppError, AppResult};
use crate::network::Network;

/// Summary of a network for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    pub id: NetworkId,
    pub node_count: usize,
}

/// Networks keyed by their unique identifier.
#[derive(Debug, Default)]
pub struct NetworkRegistry {
    networks: Vec<Network>,
}

impl NetworkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    pub fn contains(&self, id: &NetworkId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &NetworkId) -> Option<&Network> {
        self.networks.iter().find(|n| n.id() == id)
    }

    pub fn get_mut(&mut self, id: &NetworkId) -> Option<&mut Network> {
        self.networks.iter_mut().find(|n| n.id() == id)
    }

    /// Like [`NetworkRegistry::get_mut`], but a missing network is an error.
    pub fn require_mut(&mut self, id: &NetworkId) -> AppResult<&mut Network> {
        self.get_mut(id)
            .ok_or_else(|| AppError::NetworkNotFound(id.clone()))
    }

    /// Register a new network. Identifiers are unique.
    pub fn insert(&mut self, network: Network) -> AppResult<()> {
        if self.contains(network.id()) {
            return Err(AppError::NetworkExists(network.id().clone()));
        }
        tracing::info!(
            network = %network.id(),
            rooms = network.node_count(),
            "network registered"
        );
        self.networks.push(network);
        Ok(())
    }

    /// Networks ordered by node count (largest first), then identifier.
    pub fn sorted(&self) -> Vec<&Network> {
        let mut sorted: Vec<&Network> = self.networks.iter().collect();
        sorted.sort_by(|a, b| {
            b.node_count()
                .cmp(&a.node_count())
                .then_with(|| a.id().cmp(b.id()))
        });
        sorted
    }

    /// Listing rows in [`NetworkRegistry::sorted`] order.
    pub fn summaries(&self) -> Vec<NetworkSummary> {
        self.sorted()
            .into_iter()
            .map(|n| NetworkSummary {
                id: n.id().clone(),
                node_count: n.node_count(),
            })
            .collect()
    }
}
