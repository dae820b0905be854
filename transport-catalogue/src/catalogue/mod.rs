//! The transport catalogue.
//!
//! Owns every stop and bus, the directed road distances between stops, and
//! the reverse index from a stop to the buses serving it. The catalogue is
//! only mutated while loading; everything downstream reads it through
//! shared references.

mod error;

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::domain::{
    Bus, BusId, BusStat, Coordinates, Stop, StopId, StopStat, compute_distance, expand_route,
};

pub use error::CatalogueError;

/// What to do with a bus stop name that does not match a loaded stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownStopPolicy {
    /// Drop the name from the route and log a warning.
    #[default]
    Skip,
    /// Fail the whole bus with [`CatalogueError::UnknownStop`].
    Reject,
}

/// Stops, buses and road distances of one transit network.
///
/// # Examples
///
/// ```
/// use transport_catalogue::catalogue::TransportCatalogue;
/// use transport_catalogue::domain::Coordinates;
///
/// let mut catalogue = TransportCatalogue::new();
/// catalogue.add_stop("Tolstopaltsevo", Coordinates::new(55.611087, 37.20829)).unwrap();
/// catalogue.add_stop("Marushkino", Coordinates::new(55.595884, 37.209755)).unwrap();
/// catalogue.add_bus("750", &["Tolstopaltsevo", "Marushkino"], false).unwrap();
/// catalogue.set_distance("Tolstopaltsevo", "Marushkino", 3900.0).unwrap();
///
/// let stat = catalogue.bus_stat("750").unwrap().unwrap();
/// assert_eq!(stat.stop_count, 3);
/// assert_eq!(stat.unique_stop_count, 2);
/// assert_eq!(stat.route_length, 7800.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    stop_ids: HashMap<String, StopId>,
    buses: Vec<Bus>,
    bus_ids: HashMap<String, BusId>,
    /// Indexed by `StopId`; every stop has an entry, possibly empty.
    buses_by_stop: Vec<HashSet<BusId>>,
    /// Directed road distances in meters.
    distances: HashMap<(StopId, StopId), f64>,
    unknown_stop_policy: UnknownStopPolicy,
}

impl TransportCatalogue {
    /// Create an empty catalogue that skips unknown bus stop names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalogue with the given unknown stop policy.
    pub fn with_policy(unknown_stop_policy: UnknownStopPolicy) -> Self {
        Self {
            unknown_stop_policy,
            ..Self::default()
        }
    }

    /// Add a stop.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::DuplicateStop`] if the name is taken.
    pub fn add_stop(
        &mut self,
        name: &str,
        coordinates: Coordinates,
    ) -> Result<StopId, CatalogueError> {
        if self.stop_ids.contains_key(name) {
            return Err(CatalogueError::DuplicateStop(name.to_string()));
        }
        let id = StopId(self.stops.len());
        self.stops.push(Stop::new(name, coordinates));
        self.stop_ids.insert(name.to_string(), id);
        self.buses_by_stop.push(HashSet::new());
        Ok(id)
    }

    /// Add a bus route over previously added stops.
    ///
    /// Stop names are resolved in order. Names that match no stop are
    /// handled according to the catalogue's [`UnknownStopPolicy`]. A route
    /// that is not a round trip is stored expanded into its full cycle.
    ///
    /// # Errors
    ///
    /// - [`CatalogueError::DuplicateBus`] if the name is taken
    /// - [`CatalogueError::UnknownStop`] under [`UnknownStopPolicy::Reject`]
    /// - [`CatalogueError::EmptyBus`] if no stop name resolves
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Result<BusId, CatalogueError> {
        if self.bus_ids.contains_key(name) {
            return Err(CatalogueError::DuplicateBus(name.to_string()));
        }

        let mut outbound = Vec::with_capacity(stop_names.len());
        for stop_name in stop_names {
            let stop_name = stop_name.as_ref();
            match self.stop_ids.get(stop_name) {
                Some(&id) => outbound.push(id),
                None => match self.unknown_stop_policy {
                    UnknownStopPolicy::Skip => {
                        warn!(bus = name, stop = stop_name, "Dropping unknown stop from route");
                    }
                    UnknownStopPolicy::Reject => {
                        return Err(CatalogueError::UnknownStop {
                            stop: stop_name.to_string(),
                            context: format!("bus {name:?}"),
                        });
                    }
                },
            }
        }
        if outbound.is_empty() {
            return Err(CatalogueError::EmptyBus(name.to_string()));
        }

        let id = BusId(self.buses.len());
        let stops = expand_route(outbound, is_roundtrip);
        for stop in &stops {
            self.buses_by_stop[stop.index()].insert(id);
        }
        debug!(bus = name, stops = stops.len(), is_roundtrip, "Added bus");

        self.buses.push(Bus {
            name: name.to_string(),
            stops,
            is_roundtrip,
        });
        self.bus_ids.insert(name.to_string(), id);
        Ok(id)
    }

    /// Record the road distance from one stop to another.
    ///
    /// Only the given direction is set. Setting the same ordered pair twice
    /// keeps the last value.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::UnknownStop`] if either name is unknown.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: f64) -> Result<(), CatalogueError> {
        let from_id = self.require_stop(from, to)?;
        let to_id = self.require_stop(to, from)?;
        self.distances.insert((from_id, to_id), meters);
        Ok(())
    }

    fn require_stop(&self, name: &str, other: &str) -> Result<StopId, CatalogueError> {
        self.stop_id(name).ok_or_else(|| CatalogueError::UnknownStop {
            stop: name.to_string(),
            context: format!("road distance with {other:?}"),
        })
    }

    /// Road distance from `from` to `to` in meters.
    ///
    /// Falls back to the opposite direction when only that one was set.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::MissingDistance`] if neither direction
    /// was set.
    pub fn distance(&self, from: StopId, to: StopId) -> Result<f64, CatalogueError> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .ok_or_else(|| CatalogueError::MissingDistance {
                from: self.stop(from).name.clone(),
                to: self.stop(to).name.clone(),
            })
    }

    /// Statistics for the named bus, or `None` if there is no such bus.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::MissingDistance`] if two consecutive stops
    /// on the route have no road distance.
    pub fn bus_stat(&self, name: &str) -> Result<Option<BusStat>, CatalogueError> {
        let Some(bus) = self.bus_by_name(name) else {
            return Ok(None);
        };

        let mut route_length = 0.0;
        let mut geo_length = 0.0;
        for pair in bus.stops.windows(2) {
            route_length += self.distance(pair[0], pair[1])?;
            geo_length += compute_distance(
                self.stop(pair[0]).coordinates,
                self.stop(pair[1]).coordinates,
            );
        }

        // A route whose stops all share one location has no straight-line length
        let curvature = if geo_length > 0.0 {
            route_length / geo_length
        } else {
            0.0
        };

        Ok(Some(BusStat {
            stop_count: bus.stop_count(),
            unique_stop_count: bus.unique_stop_count(),
            route_length,
            curvature,
        }))
    }

    /// The buses serving the named stop, sorted by bus name.
    ///
    /// Returns `None` if there is no such stop. A stop no bus calls at
    /// yields an empty bus list.
    pub fn stop_stat(&self, name: &str) -> Option<StopStat<'_>> {
        let id = self.stop_id(name)?;
        let mut buses: Vec<&Bus> = self.buses_by_stop[id.index()]
            .iter()
            .map(|&bus| self.bus(bus))
            .collect();
        buses.sort_by(|a, b| a.name.cmp(&b.name));

        Some(StopStat {
            stop_name: &self.stop(id).name,
            buses,
        })
    }

    /// Returns true if at least one bus calls at the stop.
    pub fn is_served(&self, id: StopId) -> bool {
        !self.buses_by_stop[id.index()].is_empty()
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_ids.get(name).copied()
    }

    pub fn bus_id(&self, name: &str) -> Option<BusId> {
        self.bus_ids.get(name).copied()
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalogue.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalogue.
    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.index()]
    }

    pub fn bus_by_name(&self, name: &str) -> Option<&Bus> {
        self.bus_id(name).map(|id| self.bus(id))
    }

    /// All stops, indexable by `StopId`.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses, indexable by `BusId`.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }
}
