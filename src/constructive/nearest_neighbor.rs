//! Nearest-neighbor constructive heuristic.
//!
//! Builds the visiting order greedily: from the current position, always
//! visit the nearest unvisited stop next.
//!
//! # Complexity
//!
//! O(n²) distance evaluations where n = number of stops. Dispatch routes
//! are tens of stops, so no matrix caching is attempted.
//!
//! # Determinism
//!
//! Ties are broken by the lowest input index: candidates are scanned in
//! ascending index order and the running best is replaced only on a strict
//! `<` comparison, so the first occurrence always wins. This keeps repeated
//! runs over identical input byte-identical.

use crate::distance::haversine_km;
use crate::models::{Coordinate, Stop};

/// Builds an initial visiting order over `stops` as a permutation of the
/// input indices.
///
/// When `start` is given, the first visited stop is the one nearest to it;
/// otherwise the first input stop anchors the tour. Every stop appears in
/// the result exactly once.
///
/// # Examples
///
/// ```
/// use dispatch_routing::constructive::build_initial_order;
/// use dispatch_routing::models::{Coordinate, Stop};
///
/// let stops = vec![
///     Stop::new("far", "Far", "", Coordinate::new(0.0, 0.5)),
///     Stop::new("near", "Near", "", Coordinate::new(0.0, 0.1)),
/// ];
/// let order = build_initial_order(&stops, Some(Coordinate::new(0.0, 0.0)));
/// assert_eq!(order, vec![1, 0]);
/// ```
pub fn build_initial_order(stops: &[Stop], start: Option<Coordinate>) -> Vec<usize> {
    let n = stops.len();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);

    let first = match start {
        Some(anchor) => nearest_unvisited(anchor, stops, &visited),
        None => 0,
    };
    visited[first] = true;
    order.push(first);

    while order.len() < n {
        let last = stops[order[order.len() - 1]].coordinate;
        let next = nearest_unvisited(last, stops, &visited);
        visited[next] = true;
        order.push(next);
    }

    order
}

/// Index of the unvisited stop nearest to `from`, first occurrence winning
/// ties.
///
/// Callers guarantee at least one unvisited stop remains.
fn nearest_unvisited(from: Coordinate, stops: &[Stop], visited: &[bool]) -> usize {
    let mut best_index = usize::MAX;
    let mut best_distance = f64::INFINITY;
    for (i, stop) in stops.iter().enumerate() {
        if visited[i] {
            continue;
        }
        let d = haversine_km(from, stop.coordinate);
        if d < best_distance {
            best_distance = d;
            best_index = i;
        }
    }
    best_index
}
