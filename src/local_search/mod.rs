//! Local search for improving a visiting order.
//!
//! - [`two_opt`] — Segment-reversal (2-opt) local search under a pass budget
//! - [`tour_cost`] — Anchor-aware total tour length

mod two_opt;

pub use two_opt::{tour_cost, two_opt, MAX_PASSES};
