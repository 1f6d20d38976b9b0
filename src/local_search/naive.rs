//! Unconstrained random toggling.
//!
//! # Algorithm
//!
//! Perform exactly `count` toggles, each on an independently and uniformly
//! chosen town (selection is with replacement). No score is consulted and
//! nothing is rolled back: the result is whatever assignment the walk ends
//! on, which may violate the accessibility rule. This is a baseline, not an
//! optimizer — use [`validate_coverage`](crate::validation::validate_coverage)
//! to detect violations afterwards.

use rand::Rng;

use crate::models::TownNetwork;

/// Applies `count` uniformly random charging-zone toggles to the network.
///
/// With `count == 0` or an empty network the network is left unchanged.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_charging::local_search::random_toggles;
/// use u_charging::models::TownNetwork;
///
/// let mut network = TownNetwork::new();
/// network.add_town("A");
///
/// let mut rng = StdRng::seed_from_u64(42);
/// // A single town is toggled every iteration: an odd count sets its zone.
/// random_toggles(&mut network, 3, &mut rng);
/// assert!(network.has_charging_zone(0));
/// ```
pub fn random_toggles<R: Rng>(network: &mut TownNetwork, count: usize, rng: &mut R) {
    if network.is_empty() {
        return;
    }
    for _ in 0..count {
        let index = rng.random_range(0..network.len());
        network.toggle_charging_zone(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn path_network() -> TownNetwork {
        let mut network = TownNetwork::new();
        network.add_town("A");
        network.add_town("B");
        network.add_town("C");
        network.add_road(0, 1);
        network.add_road(1, 2);
        network
    }

    #[test]
    fn test_zero_count_leaves_network_unchanged() {
        let mut network = path_network();
        network.zone_all();
        let mut rng = StdRng::seed_from_u64(42);
        random_toggles(&mut network, 0, &mut rng);
        assert_eq!(network.score(), 3);
        for i in 0..network.len() {
            assert!(network.has_charging_zone(i));
        }
    }

    #[test]
    fn test_empty_network_is_noop() {
        let mut network = TownNetwork::new();
        let mut rng = StdRng::seed_from_u64(42);
        random_toggles(&mut network, 10, &mut rng);
        assert!(network.is_empty());
    }

    #[test]
    fn test_single_town_toggle_parity() {
        // With one town every toggle hits it, so only the parity of the
        // count matters, whatever the generator produces.
        for (count, zoned) in [(1, true), (2, false), (5, true), (8, false)] {
            let mut network = TownNetwork::new();
            network.add_town("Solo");
            let mut rng = StdRng::seed_from_u64(7);
            random_toggles(&mut network, count, &mut rng);
            assert_eq!(network.has_charging_zone(0), zoned, "count = {count}");
        }
    }

    #[test]
    fn test_score_stays_consistent_with_flags() {
        let mut network = path_network();
        let mut rng = StdRng::seed_from_u64(123);
        random_toggles(&mut network, 50, &mut rng);
        let flagged = (0..network.len())
            .filter(|&i| network.has_charging_zone(i))
            .count();
        assert_eq!(network.score(), flagged);
    }
}
