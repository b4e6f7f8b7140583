//! Planning result type.

use serde::{Deserialize, Serialize};

use super::{Coordinate, TimedStop};

/// A computed itinerary: stops in visiting order with timing annotations
/// and trip-level totals.
///
/// `ordered_stops` is always a permutation of the request's stops, ordered
/// by `visit_order` ascending from 1. Totals include the closing leg back
/// to the start (round trip) or out to the end anchor when one applies;
/// that leg has no per-stop record of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    /// Which algorithm produced the order: `"nearest"` or `"nearest+2opt"`.
    pub method: String,
    /// Total trip distance across all legs (km, 2-decimal rounding).
    pub total_distance_km: f64,
    /// Total driving time, rounded to whole minutes.
    pub total_drive_minutes: i64,
    /// Total service time (stops x service minutes per stop).
    pub total_service_minutes: i64,
    /// Total trip time: drive plus service, rounded to whole minutes.
    pub total_minutes: i64,
    /// Starting anchor echoed from the request.
    pub start: Option<Coordinate>,
    /// Ending anchor echoed from the request.
    pub end: Option<Coordinate>,
    /// Stops in visiting order.
    pub ordered_stops: Vec<TimedStop>,
}

impl RouteResult {
    /// The empty-stops placeholder returned when nothing has been planned
    /// or published.
    pub fn empty() -> Self {
        Self {
            method: String::new(),
            total_distance_km: 0.0,
            total_drive_minutes: 0,
            total_service_minutes: 0,
            total_minutes: 0,
            start: None,
            end: None,
            ordered_stops: Vec::new(),
        }
    }

    /// Returns `true` if this result contains no stops.
    pub fn is_empty(&self) -> bool {
        self.ordered_stops.is_empty()
    }
}
