//! Planning entry points and request validation.
//!
//! - [`plan`] — Stateless planning over a fully specified request
//! - [`plan_from_stops`] — Planning over stops resolved by a [`StopSource`]
//!
//! Both validate before any distance computation: a request with zero
//! stops, or with any non-finite stop or anchor coordinate, is rejected
//! outright and no partial itinerary is produced.

mod error;
mod source;

pub use error::PlanError;
pub use source::{PlanOptions, StopFilter, StopSource};

use tracing::debug;

use crate::constructive::build_initial_order;
use crate::local_search::two_opt;
use crate::models::{Improvement, RouteRequest, RouteResult};
use crate::schedule::derive_schedule;

/// Outcome of planning over resolved stops.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// The filter resolved to no plannable stops; the engine did not run.
    NoStops,
    /// A computed itinerary.
    Planned(RouteResult),
}

/// Plans a visiting order and timed itinerary for the given request.
///
/// Runs the nearest-neighbor constructor, optionally refines the order with
/// 2-opt, and derives the schedule. Stateless and deterministic: identical
/// requests produce identical results.
///
/// # Errors
///
/// [`PlanError::EmptyStops`] when `stops` is empty;
/// [`PlanError::NonFiniteCoordinate`] when any stop or anchor coordinate
/// has a non-finite component.
///
/// # Examples
///
/// ```
/// use dispatch_routing::models::{Coordinate, RouteRequest, Stop};
/// use dispatch_routing::planner::plan;
///
/// let request = RouteRequest::new(vec![
///     Stop::new("b", "Bakery", "2 Oak Ave", Coordinate::new(0.0, 0.20)),
///     Stop::new("a", "Apartments", "1 Main St", Coordinate::new(0.0, 0.10)),
/// ])
/// .with_start(Coordinate::new(0.0, 0.0));
///
/// let result = plan(&request).unwrap();
/// assert_eq!(result.method, "nearest+2opt");
/// assert_eq!(result.ordered_stops[0].stop.id, "a");
/// assert_eq!(result.ordered_stops[1].stop.id, "b");
/// ```
pub fn plan(request: &RouteRequest) -> Result<RouteResult, PlanError> {
    validate(request)?;

    let initial = build_initial_order(&request.stops, request.start);
    let (order, method) = match request.improvement {
        Improvement::None => (initial, "nearest"),
        Improvement::TwoOpt => {
            let (improved, passes) = two_opt(
                &initial,
                &request.stops,
                request.start,
                request.end,
                request.round_trip,
            );
            debug!(stops = request.stops.len(), passes, "improved initial order");
            (improved, "nearest+2opt")
        }
    };

    Ok(derive_schedule(request, &order, method))
}

/// Plans over stops resolved by an external [`StopSource`].
///
/// The source owns filtering and coordinate hygiene; this function only
/// runs [`plan`] over whatever it returns. An empty resolution yields
/// [`PlanOutcome::NoStops`] rather than an error, so callers can surface
/// "no stops available" distinctly from a failure.
///
/// # Errors
///
/// [`PlanError::Source`] when the source fails; otherwise the same errors
/// as [`plan`].
pub fn plan_from_stops<S: StopSource + ?Sized>(
    source: &S,
    tenant_id: &str,
    filter: &StopFilter,
    options: PlanOptions,
) -> Result<PlanOutcome, PlanError> {
    let stops = source.resolve(tenant_id, filter).map_err(PlanError::Source)?;
    if stops.is_empty() {
        debug!(tenant_id, "stop filter resolved to nothing");
        return Ok(PlanOutcome::NoStops);
    }
    plan(&options.into_request(stops)).map(PlanOutcome::Planned)
}

/// Checks the two boundary preconditions: non-empty stops and finite
/// coordinates everywhere.
fn validate(request: &RouteRequest) -> Result<(), PlanError> {
    if request.stops.is_empty() {
        return Err(PlanError::EmptyStops);
    }
    for (i, stop) in request.stops.iter().enumerate() {
        if !stop.coordinate.is_finite() {
            return Err(PlanError::NonFiniteCoordinate {
                context: format!("stop {i}"),
            });
        }
    }
    if let Some(start) = request.start {
        if !start.is_finite() {
            return Err(PlanError::NonFiniteCoordinate {
                context: "start anchor".into(),
            });
        }
    }
    if let Some(end) = request.end {
        if !end.is_finite() {
            return Err(PlanError::NonFiniteCoordinate {
                context: "end anchor".into(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_search::tour_cost;
    use crate::models::{Coordinate, Stop};
    use proptest::prelude::*;
    use std::collections::HashSet;

    // Kilometers to degrees of longitude at the equator (R = 6371 km).
    const KM: f64 = 1.0 / 111.19492664455873;

    fn stop_at(id: &str, lat: f64, lng: f64) -> Stop {
        Stop::new(id, id, "", Coordinate::new(lat, lng))
    }

    #[test]
    fn test_empty_stops_rejected() {
        let err = plan(&RouteRequest::new(vec![])).unwrap_err();
        assert!(matches!(err, PlanError::EmptyStops));
    }

    #[test]
    fn test_non_finite_stop_rejected() {
        let request = RouteRequest::new(vec![
            stop_at("a", 0.0, 0.0),
            stop_at("b", f64::NAN, 0.0),
        ]);
        let err = plan(&request).unwrap_err();
        assert!(matches!(
            err,
            PlanError::NonFiniteCoordinate { context } if context == "stop 1"
        ));
    }

    #[test]
    fn test_non_finite_anchor_rejected() {
        let request = RouteRequest::new(vec![stop_at("a", 0.0, 0.0)])
            .with_start(Coordinate::new(f64::INFINITY, 0.0));
        let err = plan(&request).unwrap_err();
        assert!(matches!(
            err,
            PlanError::NonFiniteCoordinate { context } if context == "start anchor"
        ));
    }

    #[test]
    fn test_method_reflects_improvement() {
        let stops = vec![stop_at("a", 0.0, 0.1), stop_at("b", 0.0, 0.2)];
        let with_two_opt = plan(&RouteRequest::new(stops.clone())).unwrap();
        assert_eq!(with_two_opt.method, "nearest+2opt");
        let without = plan(
            &RouteRequest::new(stops).with_improvement(Improvement::None),
        )
        .unwrap();
        assert_eq!(without.method, "nearest");
    }

    #[test]
    fn test_right_triangle_scenario() {
        // Right angle at `corner`; legs of 3 km and 4 km, hypotenuse 5 km.
        // Anchored on the first input stop, nearest-neighbor walks the two
        // legs: 3 km to the corner, then 4 km onward.
        let stops = vec![
            stop_at("leg3", 0.0, 3.0 * KM),
            stop_at("corner", 0.0, 0.0),
            stop_at("leg4", 4.0 * KM, 0.0),
        ];
        let request = RouteRequest::new(stops).with_round_trip(false);
        let result = plan(&request).unwrap();
        assert!((result.total_distance_km - 7.0).abs() < 0.02);
        // 2-opt must not make the nearest-neighbor tour worse.
        let unimproved = plan(
            &request.clone().with_improvement(Improvement::None),
        )
        .unwrap();
        assert!(result.total_distance_km <= unimproved.total_distance_km + 0.01);
    }

    #[test]
    fn test_equator_round_trip_scenario() {
        let request = RouteRequest::new(vec![stop_at("a", 0.0, 1.0)])
            .with_start(Coordinate::new(0.0, 0.0));
        let result = plan(&request).unwrap();
        assert_eq!(result.ordered_stops.len(), 1);
        assert_eq!(result.ordered_stops[0].visit_order, 1);
        assert!((result.total_distance_km - 222.38).abs() < 0.01);
    }

    #[test]
    fn test_cumulative_consistency_with_closing_leg() {
        let request = RouteRequest::new(vec![
            stop_at("a", 0.0, 10.0 * KM),
            stop_at("b", 0.0, 25.0 * KM),
            stop_at("c", 5.0 * KM, 15.0 * KM),
        ])
        .with_start(Coordinate::new(0.0, 0.0));
        let result = plan(&request).unwrap();
        let last = result.ordered_stops.last().unwrap();
        let closing = crate::distance::haversine_km(
            last.stop.coordinate,
            result.start.unwrap(),
        );
        assert!((last.cumulative_distance_km + closing - result.total_distance_km).abs() < 0.02);
    }

    #[test]
    fn test_plan_from_stops_empty_resolution() {
        struct Empty;
        impl StopSource for Empty {
            fn resolve(
                &self,
                _tenant_id: &str,
                _filter: &StopFilter,
            ) -> Result<Vec<Stop>, Box<dyn std::error::Error + Send + Sync>> {
                Ok(Vec::new())
            }
        }
        let outcome = plan_from_stops(
            &Empty,
            "t-1",
            &StopFilter::Status("pending".into()),
            PlanOptions::default(),
        )
        .unwrap();
        assert_eq!(outcome, PlanOutcome::NoStops);
    }

    #[test]
    fn test_plan_from_stops_planned() {
        struct Fixed;
        impl StopSource for Fixed {
            fn resolve(
                &self,
                tenant_id: &str,
                filter: &StopFilter,
            ) -> Result<Vec<Stop>, Box<dyn std::error::Error + Send + Sync>> {
                assert_eq!(tenant_id, "t-1");
                assert_eq!(*filter, StopFilter::Ids(vec!["a".into(), "b".into()]));
                Ok(vec![stop_at("a", 0.0, 0.1), stop_at("b", 0.0, 0.2)])
            }
        }
        let outcome = plan_from_stops(
            &Fixed,
            "t-1",
            &StopFilter::Ids(vec!["a".into(), "b".into()]),
            PlanOptions {
                start: Some(Coordinate::new(0.0, 0.0)),
                ..PlanOptions::default()
            },
        )
        .unwrap();
        match outcome {
            PlanOutcome::Planned(result) => {
                assert_eq!(result.ordered_stops.len(), 2);
                assert_eq!(result.ordered_stops[0].stop.id, "a");
            }
            PlanOutcome::NoStops => panic!("expected a planned route"),
        }
    }

    #[test]
    fn test_plan_from_stops_source_failure() {
        struct Broken;
        impl StopSource for Broken {
            fn resolve(
                &self,
                _tenant_id: &str,
                _filter: &StopFilter,
            ) -> Result<Vec<Stop>, Box<dyn std::error::Error + Send + Sync>> {
                Err("storage offline".into())
            }
        }
        let err = plan_from_stops(
            &Broken,
            "t-1",
            &StopFilter::Status("pending".into()),
            PlanOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PlanError::Source(_)));
    }

    prop_compose! {
        fn arb_stops()(coords in prop::collection::vec((-60.0f64..60.0, -179.0f64..179.0), 1..12)) -> Vec<Stop> {
            coords
                .into_iter()
                .enumerate()
                .map(|(i, (lat, lng))| stop_at(&format!("s{i}"), lat, lng))
                .collect()
        }
    }

    proptest! {
        #[test]
        fn prop_ordered_stops_is_permutation(stops in arb_stops()) {
            let expected: HashSet<String> = stops.iter().map(|s| s.id.clone()).collect();
            let result = plan(&RouteRequest::new(stops.clone())).unwrap();
            prop_assert_eq!(result.ordered_stops.len(), stops.len());
            let seen: HashSet<String> =
                result.ordered_stops.iter().map(|t| t.stop.id.clone()).collect();
            prop_assert_eq!(seen, expected);
            for (i, timed) in result.ordered_stops.iter().enumerate() {
                prop_assert_eq!(timed.visit_order, i + 1);
            }
        }

        #[test]
        fn prop_two_opt_never_worse_than_nearest(stops in arb_stops()) {
            let start = Some(Coordinate::new(0.0, 0.0));
            let initial = build_initial_order(&stops, start);
            let (improved, _) = two_opt(&initial, &stops, start, None, true);
            let before = tour_cost(&initial, &stops, start, None, true);
            let after = tour_cost(&improved, &stops, start, None, true);
            prop_assert!(after <= before + 1e-9);
        }

        #[test]
        fn prop_plan_is_deterministic(stops in arb_stops()) {
            let request = RouteRequest::new(stops).with_start(Coordinate::new(10.0, 10.0));
            let first = plan(&request).unwrap();
            let second = plan(&request).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_distance_symmetric(
            a in (-90.0f64..90.0, -180.0f64..180.0),
            b in (-90.0f64..90.0, -180.0f64..180.0),
        ) {
            let ca = Coordinate::new(a.0, a.1);
            let cb = Coordinate::new(b.0, b.1);
            let d = crate::distance::haversine_km(ca, cb);
            prop_assert_eq!(d, crate::distance::haversine_km(cb, ca));
            prop_assert!(d >= 0.0);
            prop_assert_eq!(crate::distance::haversine_km(ca, ca), 0.0);
        }
    }
}
