//! Structural invariants checked over generated networks.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use u_charging::constructive::greedy_partition;
use u_charging::local_search::{improving_search, random_toggles};
use u_charging::models::TownNetwork;

fn build_network(n: usize, roads: &[(usize, usize)], zones: &[bool]) -> TownNetwork {
    let mut network = TownNetwork::new();
    for i in 0..n {
        network.add_town(format!("T{i}"));
    }
    for &(a, b) in roads {
        network.add_road(a, b);
    }
    for (i, &zoned) in zones.iter().enumerate() {
        network.set_charging_zone(i, zoned);
    }
    network
}

/// Up to 12 towns, a duplicate-heavy road list (self-loops included), and an
/// initial assignment.
fn network_args() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, Vec<bool>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n), 0..30),
            prop::collection::vec(any::<bool>(), n),
        )
    })
}

proptest! {
    #[test]
    fn score_equals_zone_flag_count((n, roads, zones) in network_args()) {
        let network = build_network(n, &roads, &zones);
        let flagged = zones.iter().filter(|&&z| z).count();
        prop_assert_eq!(network.score(), flagged);
    }

    #[test]
    fn cached_degree_matches_adjacency_row((n, roads, zones) in network_args()) {
        // Duplicate and self-loop entries in the road list must not skew
        // the cached counts.
        let network = build_network(n, &roads, &zones);
        prop_assert!(network.adjacency().is_symmetric());
        for i in 0..n {
            prop_assert_eq!(network.degree(i), network.adjacency().degree_of(i));
            prop_assert!(!network.are_adjacent(i, i));
        }
    }

    #[test]
    fn greedy_partition_is_deterministic((n, roads, zones) in network_args()) {
        let mut first = build_network(n, &roads, &zones);
        let mut second = build_network(n, &roads, &zones);

        let p1 = greedy_partition(&mut first);
        let p2 = greedy_partition(&mut second);
        prop_assert_eq!(p1, p2);
        prop_assert_eq!(first.score(), p1);
        for i in 0..n {
            prop_assert_eq!(first.has_charging_zone(i), second.has_charging_zone(i));
        }
    }

    #[test]
    fn improving_search_never_reports_above_entry_score(
        (n, roads, zones) in network_args(),
        seed in any::<u64>(),
    ) {
        let mut network = build_network(n, &roads, &zones);
        let entry = network.score();
        let mut rng = StdRng::seed_from_u64(seed);
        let best = improving_search(&mut network, 5, &mut rng);
        prop_assert!(best <= entry);
    }

    #[test]
    fn zero_toggles_change_nothing((n, roads, zones) in network_args(), seed in any::<u64>()) {
        let mut network = build_network(n, &roads, &zones);
        let before: Vec<bool> = (0..n).map(|i| network.has_charging_zone(i)).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        random_toggles(&mut network, 0, &mut rng);
        let after: Vec<bool> = (0..n).map(|i| network.has_charging_zone(i)).collect();
        prop_assert_eq!(before, after);
    }
}
