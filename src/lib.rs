//! # dispatch-routing
//!
//! Route-planning engine for delivery dispatch: orders a set of geographic
//! stops into an efficient visiting sequence and derives a timed,
//! distance-annotated itinerary. Tours are built with a greedy
//! nearest-neighbor heuristic and refined with 2-opt local search under a
//! pass budget; great-circle (haversine) distance is the only distance
//! model.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Coordinate, Stop, RouteRequest, RouteResult)
//! - [`distance`] — Haversine great-circle distance
//! - [`constructive`] — Nearest-neighbor initial order construction
//! - [`local_search`] — 2-opt improvement and the tour cost model
//! - [`schedule`] — Schedule derivation (ETAs, distances, totals)
//! - [`planner`] — Planning entry points, validation, and errors
//! - [`store`] — Per-driver active route publishing and retrieval
//!
//! ## Example
//!
//! ```
//! use dispatch_routing::models::{Coordinate, RouteRequest, Stop};
//! use dispatch_routing::planner::plan;
//!
//! let request = RouteRequest::new(vec![
//!     Stop::new("s-1", "Cafe Luna", "12 Harbor St", Coordinate::new(37.502, 127.025)),
//!     Stop::new("s-2", "Bookshop", "3 Elm Rd", Coordinate::new(37.498, 127.028)),
//! ])
//! .with_start(Coordinate::new(37.500, 127.020));
//!
//! let itinerary = plan(&request).unwrap();
//! assert_eq!(itinerary.ordered_stops.len(), 2);
//! assert_eq!(itinerary.method, "nearest+2opt");
//! ```

pub mod constructive;
pub mod distance;
pub mod local_search;
pub mod models;
pub mod planner;
pub mod schedule;
pub mod store;
