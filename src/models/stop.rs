//! Delivery stop types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Coordinate;

/// A single geographic delivery point to be visited.
///
/// The `payload` map carries caller metadata (order id, amount due, payment
/// breakdown, ...) that passes through planning unmodified; the engine never
/// interprets it. The engine's internal permutation refers to input indices,
/// so `id` exists only for external correlation.
///
/// # Examples
///
/// ```
/// use dispatch_routing::models::{Coordinate, Stop};
///
/// let stop = Stop::new("s-1", "Cafe Luna", "12 Harbor St", Coordinate::new(37.5, 127.0));
/// assert_eq!(stop.id, "s-1");
/// assert!(stop.payload.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Caller-side identifier, carried through for correlation.
    pub id: String,
    /// Display name of the stop.
    pub name: String,
    /// Street address of the stop.
    pub address: String,
    /// Geocoded position of the stop.
    pub coordinate: Coordinate,
    /// Opaque caller metadata, passed through unmodified.
    #[serde(default)]
    pub payload: Map<String, Value>,
}

impl Stop {
    /// Creates a stop with an empty payload.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            coordinate,
            payload: Map::new(),
        }
    }

    /// Attaches caller metadata to this stop.
    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = payload;
        self
    }
}

/// A stop placed within a computed itinerary, annotated with timing.
///
/// All stop fields are flattened into the serialized form alongside the
/// timing annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedStop {
    /// The original stop, unmodified.
    #[serde(flatten)]
    pub stop: Stop,
    /// 1-based position within the visiting order.
    pub visit_order: usize,
    /// Distance from the previous position, rounded to 2 decimals (km).
    pub distance_from_prev_km: f64,
    /// Drive time from the previous position, rounded to whole minutes.
    pub drive_minutes_from_prev: i64,
    /// Running distance total with per-step 2-decimal rounding (km).
    pub cumulative_distance_km: f64,
    /// Cumulative elapsed minutes (drive + service) to complete this stop.
    pub eta_minutes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stop_new() {
        let s = Stop::new("a", "Alpha", "1 Main St", Coordinate::new(1.0, 2.0));
        assert_eq!(s.name, "Alpha");
        assert_eq!(s.coordinate, Coordinate::new(1.0, 2.0));
        assert!(s.payload.is_empty());
    }

    #[test]
    fn test_stop_payload_passthrough() {
        let mut payload = Map::new();
        payload.insert("orderId".into(), json!("ord-42"));
        payload.insert("amountDue".into(), json!(19.95));
        let s = Stop::new("a", "Alpha", "1 Main St", Coordinate::new(0.0, 0.0))
            .with_payload(payload.clone());
        assert_eq!(s.payload, payload);
    }

    #[test]
    fn test_stop_payload_default_on_deserialize() {
        let json = r#"{"id":"a","name":"Alpha","address":"1 Main St",
                       "coordinate":{"lat":1.0,"lng":2.0}}"#;
        let s: Stop = serde_json::from_str(json).expect("deserialize");
        assert!(s.payload.is_empty());
    }

    #[test]
    fn test_timed_stop_flattens_stop_fields() {
        let timed = TimedStop {
            stop: Stop::new("a", "Alpha", "1 Main St", Coordinate::new(0.0, 0.0)),
            visit_order: 1,
            distance_from_prev_km: 1.25,
            drive_minutes_from_prev: 3,
            cumulative_distance_km: 1.25,
            eta_minutes: 8,
        };
        let value = serde_json::to_value(&timed).expect("serialize");
        assert_eq!(value["id"], "a");
        assert_eq!(value["visitOrder"], 1);
        assert_eq!(value["distanceFromPrevKm"], 1.25);
    }
}
