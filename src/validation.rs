//! Coverage validation for charging-zone assignments.
//!
//! The randomized heuristics and the greedy solver give no accessibility
//! guarantee, so callers check assignments here after the fact:
//! [`validate_coverage`] lists every town that fails the rule, and
//! [`ensure_coverage`] applies the all-zones fallback a loader uses before
//! handing a network to the search algorithms.

use crate::models::TownNetwork;

/// Validation result: `Ok(())` or every detected violation.
pub type CoverageResult = Result<(), Vec<CoverageViolation>>;

/// A town that violates the accessibility rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageViolation {
    /// Index of the uncovered town.
    pub town: usize,
    /// Name of the uncovered town.
    pub name: String,
}

/// Checks the accessibility rule for every town.
///
/// A town passes if it hosts a charging zone or is directly connected to a
/// town that does. All failures are collected, in index order.
///
/// # Examples
///
/// ```
/// use u_charging::models::TownNetwork;
/// use u_charging::validation::validate_coverage;
///
/// let mut network = TownNetwork::new();
/// let a = network.add_town("A");
/// let b = network.add_town("B");
/// network.add_road(a, b);
///
/// assert!(validate_coverage(&network).is_err());
/// network.add_charging_zone("A").unwrap();
/// assert!(validate_coverage(&network).is_ok());
/// ```
pub fn validate_coverage(network: &TownNetwork) -> CoverageResult {
    let violations: Vec<CoverageViolation> = (0..network.len())
        .filter(|&i| !network.is_accessible(i))
        .map(|i| CoverageViolation {
            town: i,
            name: network.town(i).name().to_string(),
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Applies the naive-safe fallback if the assignment is unusable.
///
/// If no town hosts a zone, or any town fails [`validate_coverage`], every
/// town is given a zone and `true` is returned. A network that already
/// satisfies the rule (and has at least one zone, or no towns at all) is
/// left untouched and `false` is returned.
pub fn ensure_coverage(network: &mut TownNetwork) -> bool {
    let needs_repair =
        (!network.is_empty() && network.score() == 0) || validate_coverage(network).is_err();
    if needs_repair {
        network.zone_all();
    }
    needs_repair
}
