//! Domain model types for delivery route planning.
//!
//! Provides the core abstractions: coordinates, delivery stops with opaque
//! caller payloads, planning requests with their defaults, and the timed
//! itinerary produced by the engine.

mod coordinate;
mod request;
mod result;
mod stop;

pub use coordinate::Coordinate;
pub use request::{Improvement, RouteRequest};
pub use result::RouteResult;
pub use stop::{Stop, TimedStop};
