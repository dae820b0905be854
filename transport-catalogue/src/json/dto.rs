//! Data transfer objects for request and response documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::domain::{BusStat, StopStat};
use crate::planner::{Itinerary, ItineraryItem, RoutingSettings};
use crate::render::RenderSettings;

/// A whole request document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestDocument {
    /// Stops and buses to load
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    /// Queries to answer, in order
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,

    /// Required only for `Map` requests
    pub render_settings: Option<RenderSettings>,

    /// Required only for `Route` requests
    pub routing_settings: Option<RoutingSettings>,
}

/// One entry of `base_requests`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

/// A stop and the road distances from it to its neighbours.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Meters by road to each named stop
    #[serde(default)]
    pub road_distances: BTreeMap<String, f64>,
}

/// A bus route as listed in the document, before cycle expansion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusRequest {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

/// One entry of `stat_requests`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    Map { id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }

    /// The `type` tag, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            StatRequest::Bus { .. } => "Bus",
            StatRequest::Stop { .. } => "Stop",
            StatRequest::Route { .. } => "Route",
            StatRequest::Map { .. } => "Map",
        }
    }
}

/// One entry of the response array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus(BusResponse),
    Stop(StopResponse),
    Route(RouteResponse),
    Map(MapResponse),
    NotFound(NotFoundResponse),
}

impl StatResponse {
    pub fn not_found(request_id: i64) -> Self {
        StatResponse::NotFound(NotFoundResponse {
            error_message: "not found".to_string(),
            request_id,
        })
    }

    pub fn request_id(&self) -> i64 {
        match self {
            StatResponse::Bus(r) => r.request_id,
            StatResponse::Stop(r) => r.request_id,
            StatResponse::Route(r) => r.request_id,
            StatResponse::Map(r) => r.request_id,
            StatResponse::NotFound(r) => r.request_id,
        }
    }
}

/// Statistics of one bus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusResponse {
    pub curvature: f64,
    pub request_id: i64,

    /// Meters, written without a fraction when whole
    #[serde(serialize_with = "whole_or_fraction")]
    pub route_length: f64,

    pub stop_count: usize,
    pub unique_stop_count: usize,
}

/// Buses calling at one stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResponse {
    /// Sorted by name
    pub buses: Vec<String>,
    pub request_id: i64,
}

/// The fastest itinerary between two stops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub items: Vec<RouteItem>,
    pub request_id: i64,

    /// Minutes
    pub total_time: f64,
}

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

/// The rendered network map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapResponse {
    /// A complete SVG document
    pub map: String,
    pub request_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotFoundResponse {
    pub error_message: String,
    pub request_id: i64,
}

impl BusResponse {
    pub fn from_stat(request_id: i64, stat: &BusStat) -> Self {
        Self {
            curvature: stat.curvature,
            request_id,
            route_length: stat.route_length,
            stop_count: stat.stop_count,
            unique_stop_count: stat.unique_stop_count,
        }
    }
}

impl StopResponse {
    pub fn from_stat(request_id: i64, stat: &StopStat<'_>) -> Self {
        Self {
            buses: stat.bus_names().map(str::to_string).collect(),
            request_id,
        }
    }
}

impl RouteResponse {
    pub fn from_itinerary(request_id: i64, itinerary: &Itinerary) -> Self {
        let items = itinerary
            .items()
            .iter()
            .map(|item| match item {
                ItineraryItem::Wait { stop_name, time } => RouteItem::Wait {
                    stop_name: stop_name.clone(),
                    time: *time,
                },
                ItineraryItem::Bus {
                    bus_name,
                    span_count,
                    time,
                } => RouteItem::Bus {
                    bus: bus_name.clone(),
                    span_count: *span_count,
                    time: *time,
                },
            })
            .collect();

        Self {
            items,
            request_id,
            total_time: itinerary.total_time(),
        }
    }
}

/// Largest magnitude at which every whole f64 is exact.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

fn whole_or_fraction<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < EXACT_INTEGER_LIMIT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_base_requests() {
        let requests: Vec<BaseRequest> = serde_json::from_value(json!([
            {
                "type": "Stop",
                "name": "Ривьерский мост",
                "latitude": 43.587795,
                "longitude": 39.716901,
                "road_distances": {"Морской вокзал": 850}
            },
            {"type": "Stop", "name": "Морской вокзал", "latitude": 43.581969, "longitude": 39.719848},
            {"type": "Bus", "name": "114", "stops": ["Морской вокзал", "Ривьерский мост"], "is_roundtrip": false}
        ]))
        .unwrap();

        let BaseRequest::Stop(stop) = &requests[0] else {
            panic!("expected a stop, got {:?}", requests[0]);
        };
        assert_eq!(stop.road_distances["Морской вокзал"], 850.0);

        let BaseRequest::Stop(stop) = &requests[1] else {
            panic!("expected a stop, got {:?}", requests[1]);
        };
        assert!(stop.road_distances.is_empty());

        assert_eq!(
            requests[2],
            BaseRequest::Bus(BusRequest {
                name: "114".into(),
                stops: vec!["Морской вокзал".into(), "Ривьерский мост".into()],
                is_roundtrip: false,
            })
        );
    }

    #[test]
    fn parse_stat_requests() {
        let requests: Vec<StatRequest> = serde_json::from_value(json!([
            {"id": 1, "type": "Bus", "name": "114"},
            {"id": 2, "type": "Stop", "name": "A"},
            {"id": 3, "type": "Route", "from": "A", "to": "B"},
            {"id": 4, "type": "Map"}
        ]))
        .unwrap();

        let ids: Vec<i64> = requests.iter().map(StatRequest::id).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
        assert_eq!(
            requests[2],
            StatRequest::Route {
                id: 3,
                from: "A".into(),
                to: "B".into()
            }
        );
        assert_eq!(requests[3].kind(), "Map");
    }

    #[test]
    fn reject_unknown_request_type() {
        let result: Result<StatRequest, _> =
            serde_json::from_value(json!({"id": 1, "type": "Train", "name": "1A23"}));
        assert!(result.is_err());
    }

    #[test]
    fn settings_are_optional() {
        let doc: RequestDocument = serde_json::from_value(json!({})).unwrap();
        assert!(doc.base_requests.is_empty());
        assert!(doc.stat_requests.is_empty());
        assert!(doc.render_settings.is_none());
        assert!(doc.routing_settings.is_none());
    }

    #[test]
    fn serialize_not_found() {
        let value = serde_json::to_value(StatResponse::not_found(7)).unwrap();
        assert_eq!(value, json!({"request_id": 7, "error_message": "not found"}));
    }

    #[test]
    fn serialize_bus_response() {
        let stat = BusStat {
            stop_count: 5,
            unique_stop_count: 3,
            route_length: 4000.0,
            curvature: 1.25,
        };
        let value = serde_json::to_value(StatResponse::Bus(BusResponse::from_stat(1, &stat))).unwrap();
        assert_eq!(
            value,
            json!({
                "curvature": 1.25,
                "request_id": 1,
                "route_length": 4000,
                "stop_count": 5,
                "unique_stop_count": 3
            })
        );
    }

    #[test]
    fn serialize_route_items() {
        let itinerary = Itinerary::new(
            vec![
                ItineraryItem::Wait {
                    stop_name: "A".into(),
                    time: 6.0,
                },
                ItineraryItem::Bus {
                    bus_name: "297".into(),
                    span_count: 2,
                    time: 5.25,
                },
            ],
            11.25,
        );
        let value =
            serde_json::to_value(StatResponse::Route(RouteResponse::from_itinerary(4, &itinerary)))
                .unwrap();
        assert_eq!(
            value,
            json!({
                "items": [
                    {"type": "Wait", "stop_name": "A", "time": 6.0},
                    {"type": "Bus", "bus": "297", "span_count": 2, "time": 5.25}
                ],
                "request_id": 4,
                "total_time": 11.25
            })
        );
    }
}
