//! Stop resolution seam for planning from stored orders.

use std::error::Error;

use crate::models::{Coordinate, Improvement, RouteRequest, Stop};

/// Selects which stored stops a tenant wants planned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopFilter {
    /// All undelivered stops in the given status.
    Status(String),
    /// An explicit list of stop ids.
    Ids(Vec<String>),
}

/// Resolves a [`StopFilter`] into concrete stops for a tenant.
///
/// Implementations own the order storage and the geocoding rules: stops
/// without a usable coordinate must be excluded here, before the engine
/// sees them. An empty resolution is not an error; the planner reports it
/// as [`PlanOutcome::NoStops`](super::PlanOutcome::NoStops).
pub trait StopSource: Send + Sync {
    /// Returns the stops matching `filter` for `tenant_id`.
    fn resolve(
        &self,
        tenant_id: &str,
        filter: &StopFilter,
    ) -> Result<Vec<Stop>, Box<dyn Error + Send + Sync>>;
}

/// Planning knobs for [`plan_from_stops`](super::plan_from_stops), with the
/// same defaults as [`RouteRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOptions {
    /// Optional starting anchor.
    pub start: Option<Coordinate>,
    /// Optional ending anchor.
    pub end: Option<Coordinate>,
    /// Return to `start` after the last stop.
    pub round_trip: bool,
    /// Service time per stop, in minutes.
    pub service_minutes_per_stop: f64,
    /// Assumed average driving speed, in km/h.
    pub average_speed_kmh: f64,
    /// Improvement step to run after construction.
    pub improvement: Improvement,
}

impl Default for PlanOptions {
    fn default() -> Self {
        let defaults = RouteRequest::new(Vec::new());
        Self {
            start: None,
            end: None,
            round_trip: defaults.round_trip,
            service_minutes_per_stop: defaults.service_minutes_per_stop,
            average_speed_kmh: defaults.average_speed_kmh,
            improvement: defaults.improvement,
        }
    }
}

impl PlanOptions {
    /// Builds a full [`RouteRequest`] over resolved stops.
    pub fn into_request(self, stops: Vec<Stop>) -> RouteRequest {
        RouteRequest {
            start: self.start,
            end: self.end,
            stops,
            round_trip: self.round_trip,
            service_minutes_per_stop: self.service_minutes_per_stop,
            average_speed_kmh: self.average_speed_kmh,
            improvement: self.improvement,
        }
    }
}
