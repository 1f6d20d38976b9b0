//! Town entity.

use serde::{Deserialize, Serialize};

/// A town in the road network.
///
/// Towns are created through [`TownNetwork::add_town`](super::TownNetwork::add_town),
/// which assigns the index in registration order. The index is stable for the
/// lifetime of the network; towns are never removed.
///
/// The neighbor count is a cached degree, maintained exclusively by the
/// network's road-addition path so it always matches the adjacency matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Town {
    index: usize,
    name: String,
    charging_zone: bool,
    neighbor_count: usize,
}

impl Town {
    pub(crate) fn new(index: usize, name: String) -> Self {
        Self {
            index,
            name,
            charging_zone: false,
            neighbor_count: 0,
        }
    }

    /// Stable index of this town in the network.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Display name of this town.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if this town currently hosts a charging zone.
    pub fn has_charging_zone(&self) -> bool {
        self.charging_zone
    }

    /// Number of towns directly connected to this one.
    pub fn neighbor_count(&self) -> usize {
        self.neighbor_count
    }

    pub(crate) fn set_charging_zone(&mut self, on: bool) {
        self.charging_zone = on;
    }

    pub(crate) fn record_neighbor(&mut self) {
        self.neighbor_count += 1;
    }
}
