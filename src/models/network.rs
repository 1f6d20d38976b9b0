//! Town network aggregate.

use serde::{Deserialize, Serialize};

use super::{NetworkError, Town};
use crate::adjacency::AdjacencyMatrix;

/// A network of towns connected by undirected roads.
///
/// The network owns its towns and the adjacency matrix. Town indices are
/// assigned in registration order and never reused; the matrix always has
/// exactly one row and column per town.
///
/// The set of towns with a charging zone is the assignment the search
/// algorithms in [`local_search`](crate::local_search) and
/// [`constructive`](crate::constructive) operate on. The network itself does
/// not enforce the accessibility rule — only
/// [`remove_charging_zone`](Self::remove_charging_zone) guards it, and
/// [`validation`](crate::validation) checks it after the fact.
///
/// # Examples
///
/// ```
/// use u_charging::models::TownNetwork;
///
/// let mut network = TownNetwork::new();
/// let a = network.add_town("A");
/// let b = network.add_town("B");
/// network.add_road(a, b);
///
/// assert_eq!(network.len(), 2);
/// assert!(network.are_adjacent(a, b));
/// assert_eq!(network.score(), 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TownNetwork {
    towns: Vec<Town>,
    adjacency: AdjacencyMatrix,
}

impl TownNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self {
            towns: Vec::new(),
            adjacency: AdjacencyMatrix::new(0),
        }
    }

    /// Registers a town and returns its index.
    ///
    /// The adjacency matrix gains one unset row and column. Names are
    /// expected to be unique; lookups resolve to the earliest registration.
    pub fn add_town(&mut self, name: impl Into<String>) -> usize {
        let index = self.towns.len();
        self.towns.push(Town::new(index, name.into()));
        self.adjacency.grow();
        index
    }

    /// Number of towns in the network.
    pub fn len(&self) -> usize {
        self.towns.len()
    }

    /// Returns `true` if the network has no towns.
    pub fn is_empty(&self) -> bool {
        self.towns.is_empty()
    }

    /// Returns the town at the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn town(&self, index: usize) -> &Town {
        &self.towns[index]
    }

    /// Returns all towns in registration order.
    pub fn towns(&self) -> &[Town] {
        &self.towns
    }

    /// Looks up a town by name.
    pub fn town_by_name(&self, name: &str) -> Option<&Town> {
        self.towns.iter().find(|t| t.name() == name)
    }

    /// Looks up a town index by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.towns.iter().position(|t| t.name() == name)
    }

    /// Adds a road between two towns.
    ///
    /// Returns `true` if the road was added. Self-loops and roads that
    /// already exist are rejected (returns `false`, no state change), which
    /// keeps the cached neighbor counts consistent with the matrix.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn add_road(&mut self, a: usize, b: usize) -> bool {
        if a == b || self.adjacency.is_connected(a, b) {
            return false;
        }
        self.adjacency.connect(a, b);
        self.towns[a].record_neighbor();
        self.towns[b].record_neighbor();
        true
    }

    /// Adds a road between two towns identified by name.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::TownNotFound`] if either name is unknown; no
    /// state is changed in that case.
    pub fn add_road_by_name(&mut self, a: &str, b: &str) -> Result<bool, NetworkError> {
        let ia = self.index_of(a).ok_or_else(|| NetworkError::TownNotFound {
            name: a.to_string(),
        })?;
        let ib = self.index_of(b).ok_or_else(|| NetworkError::TownNotFound {
            name: b.to_string(),
        })?;
        Ok(self.add_road(ia, ib))
    }

    /// Returns `true` if the two towns are directly connected.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.adjacency.is_connected(a, b)
    }

    /// Iterates over the indices of towns directly connected to `of`.
    pub fn neighbors(&self, of: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.neighbors(of)
    }

    /// Cached degree of the town at the given index.
    pub fn degree(&self, index: usize) -> usize {
        self.towns[index].neighbor_count()
    }

    /// The adjacency matrix.
    pub fn adjacency(&self) -> &AdjacencyMatrix {
        &self.adjacency
    }

    /// Iterates over all roads as unordered index pairs `(a, b)` with
    /// `a < b`, each road visited exactly once.
    pub fn roads(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.towns.len();
        (0..n).flat_map(move |a| {
            ((a + 1)..n).filter_map(move |b| self.adjacency.is_connected(a, b).then_some((a, b)))
        })
    }

    /// Returns `true` if the town at the given index hosts a charging zone.
    pub fn has_charging_zone(&self, index: usize) -> bool {
        self.towns[index].has_charging_zone()
    }

    /// Sets the charging-zone flag of a town, without any accessibility
    /// check.
    pub fn set_charging_zone(&mut self, index: usize, on: bool) {
        self.towns[index].set_charging_zone(on);
    }

    /// Flips the charging-zone flag of a town, without any accessibility
    /// check.
    ///
    /// This is the mutation primitive of the randomized heuristics.
    pub fn toggle_charging_zone(&mut self, index: usize) {
        let on = self.towns[index].has_charging_zone();
        self.towns[index].set_charging_zone(!on);
    }

    /// Grants a charging zone to the named town.
    ///
    /// Granting a zone the town already has is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::TownNotFound`] if the name is unknown.
    pub fn add_charging_zone(&mut self, name: &str) -> Result<(), NetworkError> {
        let index = self.index_of(name).ok_or_else(|| NetworkError::TownNotFound {
            name: name.to_string(),
        })?;
        self.towns[index].set_charging_zone(true);
        Ok(())
    }

    /// Removes the charging zone of the named town, unless a neighbor
    /// depends on it.
    ///
    /// Every neighbor without a zone of its own is re-checked after the
    /// flag is cleared; if any of them would be left without access to a
    /// zone, the removal is rolled back in full and an error is returned.
    /// The modified town's own coverage is not checked. Removing a zone the
    /// town does not have is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::TownNotFound`] if the name is unknown, or
    /// [`NetworkError::AccessibilityViolation`] if the removal was rolled
    /// back. In both cases the network is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_charging::models::{NetworkError, TownNetwork};
    ///
    /// let mut network = TownNetwork::new();
    /// let a = network.add_town("A");
    /// let b = network.add_town("B");
    /// network.add_road(a, b);
    /// network.add_charging_zone("A").unwrap();
    ///
    /// // B's only access to a zone is through A, so the removal is refused.
    /// let err = network.remove_charging_zone("A").unwrap_err();
    /// assert!(matches!(err, NetworkError::AccessibilityViolation { .. }));
    /// assert!(network.has_charging_zone(a));
    /// ```
    pub fn remove_charging_zone(&mut self, name: &str) -> Result<(), NetworkError> {
        let index = self.index_of(name).ok_or_else(|| NetworkError::TownNotFound {
            name: name.to_string(),
        })?;
        if !self.towns[index].has_charging_zone() {
            return Ok(());
        }

        // Neighbors that rely on this zone must still be covered afterwards.
        let at_risk: Vec<usize> = self
            .neighbors(index)
            .filter(|&n| !self.towns[n].has_charging_zone())
            .collect();

        self.towns[index].set_charging_zone(false);
        for &neighbor in &at_risk {
            if !self.is_accessible(neighbor) {
                self.towns[index].set_charging_zone(true);
                return Err(NetworkError::AccessibilityViolation {
                    removed: name.to_string(),
                    stranded: self.towns[neighbor].name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Gives every town a charging zone.
    pub fn zone_all(&mut self) {
        for town in &mut self.towns {
            town.set_charging_zone(true);
        }
    }

    /// Iterates over the towns currently hosting a charging zone.
    pub fn charging_towns(&self) -> impl Iterator<Item = &Town> {
        self.towns.iter().filter(|t| t.has_charging_zone())
    }

    /// Returns `true` if the town satisfies the accessibility rule: it
    /// hosts a charging zone itself or is directly connected to a town
    /// that does.
    pub fn is_accessible(&self, index: usize) -> bool {
        self.towns[index].has_charging_zone()
            || self.neighbors(index).any(|n| self.towns[n].has_charging_zone())
    }

    /// Number of towns currently hosting a charging zone.
    ///
    /// This is the objective the search algorithms minimize.
    pub fn score(&self) -> usize {
        self.towns.iter().filter(|t| t.has_charging_zone()).count()
    }
}

impl Default for TownNetwork {
    fn default() -> Self {
        Self::new()
    }
}
