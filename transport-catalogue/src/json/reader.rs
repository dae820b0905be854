//! Loading the catalogue and answering a request document.

use std::io::{Read, Write};

use tracing::{debug, info};

use super::dto::{
    BaseRequest, BusRequest, BusResponse, MapResponse, RequestDocument, RouteResponse,
    StatRequest, StatResponse, StopRequest, StopResponse,
};
use crate::catalogue::{CatalogueError, TransportCatalogue, UnknownStopPolicy};
use crate::domain::Coordinates;
use crate::error::{AppError, ConfigError};
use crate::handler::RequestHandler;
use crate::planner::TransportRouter;
use crate::render::{MapRenderer, MapSnapshot};

/// How to read and write a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Write the response on a single line instead of pretty-printing it.
    pub compact: bool,

    /// What to do with bus stops that name no known stop.
    pub unknown_stops: UnknownStopPolicy,
}

/// Build a catalogue from `base_requests`.
///
/// All stops are added first, then all buses, then road distances, so
/// entries may reference stops listed after them.
pub fn load_catalogue(
    requests: &[BaseRequest],
    policy: UnknownStopPolicy,
) -> Result<TransportCatalogue, CatalogueError> {
    let stops: Vec<&StopRequest> = requests
        .iter()
        .filter_map(|request| match request {
            BaseRequest::Stop(stop) => Some(stop),
            BaseRequest::Bus(_) => None,
        })
        .collect();
    let buses: Vec<&BusRequest> = requests
        .iter()
        .filter_map(|request| match request {
            BaseRequest::Bus(bus) => Some(bus),
            BaseRequest::Stop(_) => None,
        })
        .collect();

    let mut catalogue = TransportCatalogue::with_policy(policy);
    for stop in &stops {
        catalogue.add_stop(&stop.name, Coordinates::new(stop.latitude, stop.longitude))?;
    }
    for bus in &buses {
        catalogue.add_bus(&bus.name, &bus.stops, bus.is_roundtrip)?;
    }
    for stop in &stops {
        for (neighbour, &meters) in &stop.road_distances {
            catalogue.set_distance(&stop.name, neighbour, meters)?;
        }
    }

    info!(stops = stops.len(), buses = buses.len(), "Loaded catalogue");
    Ok(catalogue)
}

/// Answer every query in `document`, in order.
///
/// Settings are validated and checked against the queries before the
/// catalogue is loaded, so a bad document fails before anything is
/// answered.
pub fn answer(
    document: &RequestDocument,
    policy: UnknownStopPolicy,
) -> Result<Vec<StatResponse>, AppError> {
    check_settings(document)?;

    let catalogue = load_catalogue(&document.base_requests, policy)?;
    let router = document
        .routing_settings
        .map(|settings| TransportRouter::new(&catalogue, settings))
        .transpose()?;
    let renderer = document
        .render_settings
        .clone()
        .map(|settings| MapRenderer::new(settings, MapSnapshot::from_catalogue(&catalogue)));

    let mut handler = RequestHandler::new(&catalogue);
    if let Some(router) = &router {
        handler = handler.with_router(router);
    }
    if let Some(renderer) = &renderer {
        handler = handler.with_renderer(renderer);
    }

    let responses = document
        .stat_requests
        .iter()
        .map(|request| answer_request(&handler, request))
        .collect::<Result<Vec<_>, _>>()?;
    info!(requests = responses.len(), "Answered requests");
    Ok(responses)
}

/// Read a request document from `input` and write the answers to `output`.
pub fn process<R: Read, W: Write>(
    input: R,
    mut output: W,
    options: ProcessOptions,
) -> Result<(), AppError> {
    let document: RequestDocument = serde_json::from_reader(input)?;
    let responses = answer(&document, options.unknown_stops)?;
    if options.compact {
        serde_json::to_writer(&mut output, &responses)?;
    } else {
        serde_json::to_writer_pretty(&mut output, &responses)?;
    }
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

/// [`process`] for documents already in memory.
pub fn process_str(input: &str, options: ProcessOptions) -> Result<String, AppError> {
    let document: RequestDocument = serde_json::from_str(input)?;
    let responses = answer(&document, options.unknown_stops)?;
    let output = if options.compact {
        serde_json::to_string(&responses)?
    } else {
        serde_json::to_string_pretty(&responses)?
    };
    Ok(output)
}

fn check_settings(document: &RequestDocument) -> Result<(), ConfigError> {
    if let Some(settings) = &document.routing_settings {
        settings.validate()?;
    }
    if let Some(settings) = &document.render_settings {
        settings.validate()?;
    }

    for request in &document.stat_requests {
        match request {
            StatRequest::Route { .. } if document.routing_settings.is_none() => {
                return Err(ConfigError::MissingSettings {
                    settings: "routing_settings",
                    request: "Route",
                });
            }
            StatRequest::Map { .. } if document.render_settings.is_none() => {
                return Err(ConfigError::MissingSettings {
                    settings: "render_settings",
                    request: "Map",
                });
            }
            _ => {}
        }
    }
    Ok(())
}

fn answer_request(
    handler: &RequestHandler<'_>,
    request: &StatRequest,
) -> Result<StatResponse, AppError> {
    let id = request.id();
    let response = match request {
        StatRequest::Bus { name, .. } => handler
            .bus_stat(name)?
            .map(|stat| StatResponse::Bus(BusResponse::from_stat(id, &stat))),
        StatRequest::Stop { name, .. } => handler
            .stop_stat(name)
            .map(|stat| StatResponse::Stop(StopResponse::from_stat(id, &stat))),
        StatRequest::Route { from, to, .. } => handler
            .optimal_route(from, to)?
            .map(|itinerary| StatResponse::Route(RouteResponse::from_itinerary(id, &itinerary))),
        StatRequest::Map { .. } => Some(StatResponse::Map(MapResponse {
            map: handler.render_map()?,
            request_id: id,
        })),
    };

    Ok(response.unwrap_or_else(|| {
        debug!(id, kind = request.kind(), "Request not found");
        StatResponse::not_found(id)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::{Value, json};

    fn document(stat_requests: Value) -> Value {
        json!({
            "base_requests": [
                {"type": "Bus", "name": "X", "stops": ["Start", "Mid", "End"], "is_roundtrip": false},
                {"type": "Stop", "name": "Start", "latitude": 0.0, "longitude": 0.0,
                 "road_distances": {"Mid": 1000}},
                {"type": "Stop", "name": "Mid", "latitude": 0.0, "longitude": 0.01,
                 "road_distances": {"End": 1100}},
                {"type": "Stop", "name": "End", "latitude": 0.0, "longitude": 0.02},
                {"type": "Stop", "name": "Idle", "latitude": 1.0, "longitude": 1.0}
            ],
            "routing_settings": {"bus_wait_time": 5, "bus_velocity": 60},
            "render_settings": {
                "width": 600,
                "height": 400,
                "padding": 50,
                "line_width": 14,
                "stop_radius": 5,
                "bus_label_font_size": 20,
                "bus_label_offset": [7, 15],
                "stop_label_font_size": 20,
                "stop_label_offset": [7, -3],
                "underlayer_color": [255, 255, 255, 0.85],
                "underlayer_width": 3,
                "color_palette": ["green", [255, 160, 0], "red"]
            },
            "stat_requests": stat_requests
        })
    }

    fn run(doc: Value) -> Result<Vec<Value>, AppError> {
        let output = process_str(&doc.to_string(), ProcessOptions::default())?;
        Ok(serde_json::from_str(&output).unwrap())
    }

    #[test]
    fn answers_in_request_order() {
        let responses = run(document(json!([
            {"id": 1, "type": "Bus", "name": "X"},
            {"id": 2, "type": "Bus", "name": "Y"},
            {"id": 3, "type": "Stop", "name": "Mid"},
            {"id": 4, "type": "Stop", "name": "Idle"},
            {"id": 5, "type": "Stop", "name": "Nowhere"},
            {"id": 6, "type": "Route", "from": "Start", "to": "End"},
            {"id": 7, "type": "Route", "from": "Start", "to": "Idle"},
            {"id": 8, "type": "Map"}
        ])))
        .unwrap();

        let ids: Vec<i64> = responses
            .iter()
            .map(|r| r["request_id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7, 8]);

        assert_eq!(responses[0]["stop_count"], 5);
        assert_eq!(responses[0]["unique_stop_count"], 3);
        assert_eq!(responses[0]["route_length"], 4200);
        assert!(responses[0]["curvature"].is_f64());

        let not_found = json!("not found");
        assert_eq!(responses[1]["error_message"], not_found);
        assert_eq!(responses[2]["buses"], json!(["X"]));
        assert_eq!(responses[3]["buses"], json!([]));
        assert_eq!(responses[4]["error_message"], not_found);

        let items = responses[5]["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["type"], "Wait");
        assert_eq!(items[0]["stop_name"], "Start");
        assert_eq!(items[1]["type"], "Bus");
        assert_eq!(items[1]["bus"], "X");
        assert_eq!(items[1]["span_count"], 2);
        assert_relative_eq!(responses[5]["total_time"].as_f64().unwrap(), 7.1, epsilon = 1e-9);

        assert_eq!(responses[6]["error_message"], not_found);

        let map = responses[7]["map"].as_str().unwrap();
        assert!(map.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>"));
        assert!(map.ends_with("</svg>"));
        assert!(!map.contains(">Idle</text>"));
    }

    #[test]
    fn same_stop_route_is_empty() {
        let responses = run(document(json!([
            {"id": 1, "type": "Route", "from": "Mid", "to": "Mid"}
        ])))
        .unwrap();
        assert_eq!(responses[0]["items"], json!([]));
        assert_eq!(responses[0]["total_time"].as_f64(), Some(0.0));
    }

    #[test]
    fn route_needs_routing_settings() {
        let mut doc = document(json!([{"id": 1, "type": "Route", "from": "Start", "to": "End"}]));
        doc.as_object_mut().unwrap().remove("routing_settings");
        assert!(matches!(
            run(doc),
            Err(AppError::Config(ConfigError::MissingSettings {
                settings: "routing_settings",
                ..
            }))
        ));
    }

    #[test]
    fn map_needs_render_settings() {
        let mut doc = document(json!([{"id": 1, "type": "Map"}]));
        doc.as_object_mut().unwrap().remove("render_settings");
        assert!(matches!(
            run(doc),
            Err(AppError::Config(ConfigError::MissingSettings {
                settings: "render_settings",
                ..
            }))
        ));
    }

    #[test]
    fn statistics_need_no_settings() {
        let mut doc = document(json!([{"id": 1, "type": "Stop", "name": "Start"}]));
        let object = doc.as_object_mut().unwrap();
        object.remove("routing_settings");
        object.remove("render_settings");
        assert_eq!(run(doc).unwrap()[0]["buses"], json!(["X"]));
    }

    #[test]
    fn invalid_routing_settings() {
        let mut doc = document(json!([]));
        doc["routing_settings"]["bus_velocity"] = json!(0);
        assert!(matches!(
            run(doc),
            Err(AppError::Config(ConfigError::InvalidRouting(_)))
        ));
    }

    #[test]
    fn missing_distance_fails_before_answering() {
        let mut doc = document(json!([]));
        doc["base_requests"][2]["road_distances"] = json!({});
        assert!(matches!(
            run(doc),
            Err(AppError::Catalogue(CatalogueError::MissingDistance { .. }))
        ));
    }

    #[test]
    fn unknown_bus_stop_policy() {
        let mut doc = document(json!([{"id": 1, "type": "Bus", "name": "X"}]));
        doc["base_requests"][0]["stops"] = json!(["Start", "Ghost", "Mid", "End"]);

        let lenient = run(doc.clone()).unwrap();
        assert_eq!(lenient[0]["stop_count"], 5);

        let strict = ProcessOptions {
            unknown_stops: UnknownStopPolicy::Reject,
            ..ProcessOptions::default()
        };
        assert!(matches!(
            process_str(&doc.to_string(), strict),
            Err(AppError::Catalogue(CatalogueError::UnknownStop { .. }))
        ));
    }

    #[test]
    fn malformed_document() {
        assert!(matches!(
            process_str("{\"base_requests\": [", ProcessOptions::default()),
            Err(AppError::Json(_))
        ));
    }

    #[test]
    fn compact_output() {
        let doc = document(json!([{"id": 1, "type": "Bus", "name": "Y"}]));
        let mut output = Vec::new();
        let options = ProcessOptions {
            compact: true,
            ..ProcessOptions::default()
        };
        process(doc.to_string().as_bytes(), &mut output, options).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "[{\"error_message\":\"not found\",\"request_id\":1}]\n"
        );
    }

    #[test]
    fn pretty_output() {
        let doc = document(json!([{"id": 1, "type": "Bus", "name": "Y"}]));
        let output = process_str(&doc.to_string(), ProcessOptions::default()).unwrap();
        assert_eq!(
            output,
            "[\n  {\n    \"error_message\": \"not found\",\n    \"request_id\": 1\n  }\n]"
        );
    }
}
