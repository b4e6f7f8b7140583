//! Planning request type and defaults.

use serde::{Deserialize, Serialize};

use super::{Coordinate, Stop};

/// Which improvement step runs after tour construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Improvement {
    /// Use the constructor's order unchanged.
    None,
    /// Refine with 2-opt segment reversal.
    #[default]
    TwoOpt,
}

/// A request to plan a visiting order over a set of delivery stops.
///
/// `start` and `end` are optional anchors: fixed coordinates that constrain
/// the first and/or last leg but are not themselves stops. When `round_trip`
/// is `true` and `start` is present, the tour closes back at `start` and any
/// `end` anchor is ignored for the return leg.
///
/// All fields except `stops` have defaults, so a JSON request may supply
/// only the stop list.
///
/// # Examples
///
/// ```
/// use dispatch_routing::models::{Coordinate, RouteRequest, Stop};
///
/// let request = RouteRequest::new(vec![
///     Stop::new("a", "Alpha", "1 Main St", Coordinate::new(37.50, 127.00)),
/// ])
/// .with_start(Coordinate::new(37.49, 126.99));
///
/// assert!(request.round_trip);
/// assert_eq!(request.service_minutes_per_stop, 5.0);
/// assert_eq!(request.average_speed_kmh, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// Optional starting anchor (driver's current position).
    #[serde(default)]
    pub start: Option<Coordinate>,
    /// Optional ending anchor, used only when the round-trip policy does
    /// not apply.
    #[serde(default)]
    pub end: Option<Coordinate>,
    /// Stops to order. Must be non-empty.
    pub stops: Vec<Stop>,
    /// Return to `start` after the last stop.
    #[serde(default = "default_round_trip")]
    pub round_trip: bool,
    /// Service time spent at each stop, in minutes.
    #[serde(default = "default_service_minutes_per_stop")]
    pub service_minutes_per_stop: f64,
    /// Assumed average driving speed, in km/h.
    #[serde(default = "default_average_speed_kmh")]
    pub average_speed_kmh: f64,
    /// Improvement step to run after construction.
    #[serde(default)]
    pub improvement: Improvement,
}

fn default_round_trip() -> bool {
    true
}

fn default_service_minutes_per_stop() -> f64 {
    5.0
}

fn default_average_speed_kmh() -> f64 {
    30.0
}

impl RouteRequest {
    /// Creates a request with the given stops and all defaults.
    pub fn new(stops: Vec<Stop>) -> Self {
        Self {
            start: None,
            end: None,
            stops,
            round_trip: default_round_trip(),
            service_minutes_per_stop: default_service_minutes_per_stop(),
            average_speed_kmh: default_average_speed_kmh(),
            improvement: Improvement::default(),
        }
    }

    /// Sets the starting anchor.
    pub fn with_start(mut self, start: Coordinate) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the ending anchor.
    pub fn with_end(mut self, end: Coordinate) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the round-trip policy.
    pub fn with_round_trip(mut self, round_trip: bool) -> Self {
        self.round_trip = round_trip;
        self
    }

    /// Sets the per-stop service time in minutes.
    pub fn with_service_minutes_per_stop(mut self, minutes: f64) -> Self {
        self.service_minutes_per_stop = minutes;
        self
    }

    /// Sets the assumed average speed in km/h.
    pub fn with_average_speed_kmh(mut self, speed: f64) -> Self {
        self.average_speed_kmh = speed;
        self
    }

    /// Sets the improvement step.
    pub fn with_improvement(mut self, improvement: Improvement) -> Self {
        self.improvement = improvement;
        self
    }
}
