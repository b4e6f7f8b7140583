//! 2-opt segment-reversal improvement.
//!
//! # Algorithm
//!
//! Repeatedly scan all position pairs `(i, k)` with `i < k`; for each,
//! evaluate the candidate order obtained by reversing the segment
//! `order[i..=k]`. The first candidate whose tour cost improves on the
//! current best by more than a small epsilon is adopted and a new pass
//! begins (first-improvement strategy). The search stops when a full
//! pass finds no improvement or after [`MAX_PASSES`] passes, whichever
//! comes first.
//!
//! # Complexity
//!
//! O(n³) per pass (n² candidates, O(n) cost evaluation each), bounded by
//! the pass budget. Dispatch routes are tens of stops, so the simple full
//! re-evaluation is preferred over incremental deltas.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use tracing::debug;

use crate::distance::haversine_km;
use crate::models::{Coordinate, Stop};

/// Upper bound on improvement passes; bounds worst-case latency on
/// adversarial inputs.
pub const MAX_PASSES: usize = 200;

/// Minimum cost decrease for a reversal to count as an improvement.
/// Guards against floating-point oscillation between equal-cost orders.
const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Total length of a tour over `order`, honoring the anchor policy.
///
/// Sums the legs between consecutive visited stops, plus a leading leg from
/// `start` when present, plus a trailing leg: back to `start` when
/// `round_trip` holds and `start` is present, else out to `end` when
/// present, else none. Round trip takes precedence over `end`.
///
/// # Examples
///
/// ```
/// use dispatch_routing::local_search::tour_cost;
/// use dispatch_routing::models::{Coordinate, Stop};
///
/// let stops = vec![
///     Stop::new("a", "A", "", Coordinate::new(0.0, 0.0)),
///     Stop::new("b", "B", "", Coordinate::new(0.0, 1.0)),
/// ];
/// let open = tour_cost(&[0, 1], &stops, None, None, false);
/// let closed = tour_cost(&[0, 1], &stops, Some(Coordinate::new(0.0, 0.0)), None, true);
/// assert!(closed > open);
/// ```
pub fn tour_cost(
    order: &[usize],
    stops: &[Stop],
    start: Option<Coordinate>,
    end: Option<Coordinate>,
    round_trip: bool,
) -> f64 {
    let mut cost = 0.0;
    let mut prev: Option<Coordinate> = start;

    for &idx in order {
        let here = stops[idx].coordinate;
        if let Some(p) = prev {
            cost += haversine_km(p, here);
        }
        prev = Some(here);
    }

    if let Some(last) = prev {
        if let (true, Some(s)) = (round_trip, start) {
            cost += haversine_km(last, s);
        } else if let Some(e) = end {
            cost += haversine_km(last, e);
        }
    }

    cost
}

/// Refines a visiting order with 2-opt segment reversal.
///
/// Returns the improved order and the number of passes completed. The
/// result is always a permutation of the input order, and its tour cost is
/// never higher than the input's.
///
/// # Examples
///
/// ```
/// use dispatch_routing::local_search::{tour_cost, two_opt};
/// use dispatch_routing::models::{Coordinate, Stop};
///
/// let stops = vec![
///     Stop::new("a", "A", "", Coordinate::new(0.0, 0.1)),
///     Stop::new("b", "B", "", Coordinate::new(0.0, 0.3)),
///     Stop::new("c", "C", "", Coordinate::new(0.0, 0.2)),
/// ];
/// let initial = vec![0, 1, 2];
/// let (improved, _) = two_opt(&initial, &stops, None, None, false);
/// let before = tour_cost(&initial, &stops, None, None, false);
/// let after = tour_cost(&improved, &stops, None, None, false);
/// assert!(after <= before);
/// ```
pub fn two_opt(
    order: &[usize],
    stops: &[Stop],
    start: Option<Coordinate>,
    end: Option<Coordinate>,
    round_trip: bool,
) -> (Vec<usize>, usize) {
    let mut best = order.to_vec();
    if best.len() < 2 {
        return (best, 0);
    }

    let mut best_cost = tour_cost(&best, stops, start, end, round_trip);
    let mut passes = 0;

    loop {
        passes += 1;
        let mut improved = false;

        'scan: for i in 0..best.len() - 1 {
            for k in i + 1..best.len() {
                let mut candidate = best.clone();
                candidate[i..=k].reverse();
                let cost = tour_cost(&candidate, stops, start, end, round_trip);
                if best_cost - cost > IMPROVEMENT_EPSILON {
                    best = candidate;
                    best_cost = cost;
                    improved = true;
                    break 'scan;
                }
            }
        }

        if !improved || passes >= MAX_PASSES {
            break;
        }
    }

    debug!(passes, cost_km = best_cost, "two-opt finished");
    (best, passes)
}
