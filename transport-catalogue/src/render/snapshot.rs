//! Immutable, render-ready copy of the network.

use crate::catalogue::TransportCatalogue;
use crate::domain::{Coordinates, StopId};

/// A named point on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct StopPoint {
    pub name: String,
    pub coordinates: Coordinates,
}

/// One bus route as drawn on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct BusLine {
    pub name: String,
    /// Full cycle, in riding order.
    pub stops: Vec<StopPoint>,
    /// Where the bus name is written: the first stop, then the outbound
    /// terminus of a there-and-back route when it differs.
    pub terminals: Vec<StopPoint>,
}

/// Everything the map shows, detached from the catalogue.
///
/// Buses are sorted by name and only those with stops are kept. Stops are
/// those served by at least one bus, sorted by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSnapshot {
    pub buses: Vec<BusLine>,
    pub stops: Vec<StopPoint>,
}

impl MapSnapshot {
    pub fn from_catalogue(catalogue: &TransportCatalogue) -> Self {
        let point = |id: StopId| {
            let stop = catalogue.stop(id);
            StopPoint {
                name: stop.name.clone(),
                coordinates: stop.coordinates,
            }
        };

        let mut buses: Vec<BusLine> = catalogue
            .buses()
            .iter()
            .filter(|bus| !bus.stops.is_empty())
            .map(|bus| {
                let mut terminals = Vec::with_capacity(2);
                if let Some(first) = bus.first_stop() {
                    terminals.push(point(first));
                    if let Some(terminus) = bus.outbound_terminus().filter(|&t| t != first) {
                        terminals.push(point(terminus));
                    }
                }
                BusLine {
                    name: bus.name.clone(),
                    stops: bus.stops.iter().map(|&id| point(id)).collect(),
                    terminals,
                }
            })
            .collect();
        buses.sort_by(|a, b| a.name.cmp(&b.name));

        let mut stops: Vec<StopPoint> = catalogue
            .stops()
            .iter()
            .enumerate()
            .filter(|(index, _)| catalogue.is_served(StopId(*index)))
            .map(|(_, stop)| StopPoint {
                name: stop.name.clone(),
                coordinates: stop.coordinates,
            })
            .collect();
        stops.sort_by(|a, b| a.name.cmp(&b.name));

        Self { buses, stops }
    }

    /// Coordinates of every stop on the map.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinates> + '_ {
        self.stops.iter().map(|stop| stop.coordinates)
    }
}
