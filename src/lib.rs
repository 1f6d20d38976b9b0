//! # u-charging
//!
//! Charging zone placement over town road networks: search for small sets of
//! zone-hosting towns under the accessibility rule that every town hosts a
//! zone or is directly connected to a town that does.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Town, TownNetwork, NetworkError)
//! - [`adjacency`] — Symmetric boolean adjacency matrix
//! - [`local_search`] — Randomized heuristics (uniform toggling, score-guided random walk)
//! - [`constructive`] — Deterministic greedy partition solver
//! - [`validation`] — Coverage validation and the all-zones fallback repair

pub mod adjacency;
pub mod constructive;
pub mod local_search;
pub mod models;
pub mod validation;
