//! Constructive heuristics for building an initial visiting order.
//!
//! - [`build_initial_order`] — Greedy nearest-neighbor construction, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::build_initial_order;
