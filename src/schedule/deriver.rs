//! Walks a visiting order and computes per-stop distances, drive times,
//! and ETAs, plus trip-level totals.
//!
//! Distances are reported with 2-decimal rounding applied per step, and the
//! cumulative column accumulates those rounded steps. That matches the
//! published itinerary contract exactly; it can drift a few hundredths of a
//! kilometer from the unrounded sum over long routes, which is accepted.

use crate::distance::haversine_km;
use crate::models::{RouteRequest, RouteResult, TimedStop};

/// Rounds a distance to 2 decimal places (10 m resolution).
fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// Expands a visiting order into a [`RouteResult`] with per-stop timing.
///
/// The running position starts at the request's `start` anchor when present,
/// otherwise at the first visited stop (whose own leg is then zero). ETA for
/// a stop is the cumulative elapsed time to *complete* service there, not
/// just to arrive. The closing leg back to `start` (round trip) or out to
/// `end` is folded into the totals only; it produces no per-stop record.
///
/// `method` names the algorithm that produced the order and is echoed into
/// the result (`"nearest"` or `"nearest+2opt"`).
///
/// # Examples
///
/// ```
/// use dispatch_routing::models::{Coordinate, RouteRequest, Stop};
/// use dispatch_routing::schedule::derive_schedule;
///
/// let request = RouteRequest::new(vec![
///     Stop::new("a", "A", "", Coordinate::new(0.0, 1.0)),
/// ])
/// .with_start(Coordinate::new(0.0, 0.0));
///
/// let result = derive_schedule(&request, &[0], "nearest");
/// assert_eq!(result.ordered_stops[0].visit_order, 1);
/// // There and back at the equator: ~2 x 111.19 km.
/// assert!((result.total_distance_km - 222.38).abs() < 0.01);
/// ```
pub fn derive_schedule(request: &RouteRequest, order: &[usize], method: &str) -> RouteResult {
    if order.is_empty() {
        return RouteResult {
            method: method.to_string(),
            ..RouteResult::empty()
        };
    }

    let stops = &request.stops;
    let minutes_per_km = 60.0 / request.average_speed_kmh;

    let mut prev = match request.start {
        Some(anchor) => anchor,
        None => stops[order[0]].coordinate,
    };
    let mut cumulative_km = 0.0;
    let mut drive_minutes = 0.0;
    let mut service_minutes = 0.0;
    let mut ordered_stops = Vec::with_capacity(order.len());

    for (position, &idx) in order.iter().enumerate() {
        let stop = &stops[idx];
        let leg_km = haversine_km(prev, stop.coordinate);
        let leg_km_rounded = round_km(leg_km);
        cumulative_km = round_km(cumulative_km + leg_km_rounded);

        let leg_minutes = leg_km * minutes_per_km;
        drive_minutes += leg_minutes;
        service_minutes += request.service_minutes_per_stop;

        ordered_stops.push(TimedStop {
            stop: stop.clone(),
            visit_order: position + 1,
            distance_from_prev_km: leg_km_rounded,
            drive_minutes_from_prev: leg_minutes.round() as i64,
            cumulative_distance_km: cumulative_km,
            eta_minutes: (drive_minutes + service_minutes).round() as i64,
        });

        prev = stop.coordinate;
    }

    // Closing leg: totals only, no per-stop record.
    let mut total_distance_km = cumulative_km;
    let closing_anchor = if request.round_trip && request.start.is_some() {
        request.start
    } else {
        request.end
    };
    if let Some(anchor) = closing_anchor {
        let leg_km = haversine_km(prev, anchor);
        total_distance_km = round_km(total_distance_km + round_km(leg_km));
        drive_minutes += leg_km * minutes_per_km;
    }

    RouteResult {
        method: method.to_string(),
        total_distance_km,
        total_drive_minutes: drive_minutes.round() as i64,
        total_service_minutes: service_minutes.round() as i64,
        total_minutes: (drive_minutes + service_minutes).round() as i64,
        start: request.start,
        end: request.end,
        ordered_stops,
    }
}
