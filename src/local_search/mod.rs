//! Randomized search heuristics over charging-zone assignments.
//!
//! - [`random_toggles`] — Unconstrained uniform toggling, fixed iteration count
//! - [`improving_search`] — Score-guided random walk, stagnation-based stop
//!
//! Both mutate the network in place through its unguarded toggle primitive
//! and give no accessibility guarantee; both take a caller-supplied
//! [`Rng`](rand::Rng) so runs can be seeded and reproduced.

mod improving;
mod naive;

pub use improving::improving_search;
pub use naive::random_toggles;
