//! Degree-ordered greedy partition solver.
//!
//! # Algorithm
//!
//! 1. Order the towns by degree, highest first; ties are broken by
//!    registration index, lowest first.
//! 2. Scan the order. Each still-unlabeled town opens a fresh partition,
//!    becomes its representative and is marked as a zone host; every later
//!    unlabeled town not adjacent to the representative joins the partition
//!    without hosting a zone.
//! 3. Once every town is labeled, clear the zone of every non-representative:
//!    the final zone set is exactly the representative set.
//!
//! Grouping a town with a representative it is not adjacent to mirrors a
//! greedy graph coloring: each partition is built from mutually compatible
//! towns around its highest-degree member. The construction does not
//! re-verify the accessibility rule — on most connected inputs the
//! representatives cover their partitions through shared neighbors, but
//! counterexamples exist (a 5-town path, or towns with no roads at all), so
//! callers that need a guarantee should run
//! [`validate_coverage`](crate::validation::validate_coverage) on the result.
//!
//! # Complexity
//!
//! O(n²) over the town count, independent of the road count.
//!
//! # Reference
//!
//! Welsh, D.J.A. & Powell, M.B. (1967). "An upper bound for the chromatic
//! number of a graph and its application to timetabling problems",
//! *The Computer Journal* 10(1), 85-86.

use crate::models::TownNetwork;

/// Computes a charging-zone assignment by greedy degree-ordered partitioning.
///
/// Deterministic: the same network state always produces the same zone set.
/// Partition labels are scratch state local to each invocation. The previous
/// assignment is overwritten entirely.
///
/// Returns the number of partitions formed, which equals the resulting
/// [`score`](TownNetwork::score).
///
/// # Examples
///
/// ```
/// use u_charging::constructive::greedy_partition;
/// use u_charging::models::TownNetwork;
///
/// // A path A - B - C: B has the highest degree and becomes the first
/// // representative; A opens the second partition and absorbs C.
/// let mut network = TownNetwork::new();
/// let a = network.add_town("A");
/// let b = network.add_town("B");
/// let c = network.add_town("C");
/// network.add_road(a, b);
/// network.add_road(b, c);
///
/// let partitions = greedy_partition(&mut network);
/// assert_eq!(partitions, 2);
/// assert!(network.has_charging_zone(a));
/// assert!(network.has_charging_zone(b));
/// assert!(!network.has_charging_zone(c));
/// ```
pub fn greedy_partition(network: &mut TownNetwork) -> usize {
    let n = network.len();
    if n == 0 {
        return 0;
    }

    // Highest degree first, registration order on ties.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| network.degree(b).cmp(&network.degree(a)).then(a.cmp(&b)));

    // Partition labels are scratch state for this invocation only.
    let mut labels: Vec<Option<usize>> = vec![None; n];
    let mut is_representative = vec![false; n];
    let mut unlabeled = n;
    let mut partitions = 0;

    for (pos, &town) in order.iter().enumerate() {
        if unlabeled == 0 {
            break;
        }
        if labels[town].is_some() {
            continue;
        }

        let label = partitions;
        partitions += 1;
        labels[town] = Some(label);
        unlabeled -= 1;
        is_representative[town] = true;
        network.set_charging_zone(town, true);

        for &later in &order[pos + 1..] {
            if labels[later].is_none() && !network.are_adjacent(town, later) {
                labels[later] = Some(label);
                unlabeled -= 1;
            }
        }
    }

    // Only representatives keep a zone.
    for town in 0..n {
        if !is_representative[town] {
            network.set_charging_zone(town, false);
        }
    }

    partitions
}
