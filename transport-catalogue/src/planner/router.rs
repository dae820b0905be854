//! Fastest-itinerary search between two stops.

use tracing::debug;

use super::builder::{EdgeKind, RoutingGraph, StopVertices};
use super::config::RoutingSettings;
use super::itinerary::{Itinerary, ItineraryItem};
use crate::catalogue::{CatalogueError, TransportCatalogue};
use crate::domain::StopId;
use crate::graph::{EdgeId, Router};

/// Route planner over a fully loaded catalogue.
///
/// The routing graph is built once at construction and never changes; a
/// catalogue modified afterwards needs a new planner.
#[derive(Debug)]
pub struct TransportRouter<'a> {
    catalogue: &'a TransportCatalogue,
    settings: RoutingSettings,
    router: Router<f64>,
    vertices: Vec<StopVertices>,
    edge_kinds: Vec<EdgeKind>,
}

impl<'a> TransportRouter<'a> {
    /// Build the routing graph for `catalogue`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::MissingDistance`] if some bus runs between
    /// two stops with no road distance.
    pub fn new(
        catalogue: &'a TransportCatalogue,
        settings: RoutingSettings,
    ) -> Result<Self, CatalogueError> {
        let RoutingGraph {
            graph,
            vertices,
            edge_kinds,
        } = RoutingGraph::build(catalogue, &settings)?;

        Ok(Self {
            catalogue,
            settings,
            router: Router::new(graph),
            vertices,
            edge_kinds,
        })
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// Find the fastest itinerary between two named stops.
    ///
    /// The search runs from the arrival vertex of `from`, so the first wait
    /// is charged, to the arrival vertex of `to`, so no wait is charged at
    /// the destination. Returns `None` if either stop is unknown or `to`
    /// cannot be reached.
    pub fn plan_route(&self, from: &str, to: &str) -> Option<Itinerary> {
        let origin = self.vertices_of(self.catalogue.stop_id(from)?)?;
        let destination = self.vertices_of(self.catalogue.stop_id(to)?)?;

        let Some(route) = self.router.build_route(origin.arrival, destination.arrival) else {
            debug!(from, to, "No route between stops");
            return None;
        };

        let items = route
            .edges
            .iter()
            .map(|&edge| self.describe(edge))
            .collect::<Option<Vec<_>>>()?;

        debug!(from, to, items = items.len(), total_time = route.weight, "Planned route");
        Some(Itinerary::new(items, route.weight))
    }

    fn vertices_of(&self, stop: StopId) -> Option<StopVertices> {
        self.vertices.get(stop.index()).copied()
    }

    fn describe(&self, edge: EdgeId) -> Option<ItineraryItem> {
        let time = self.router.graph().edge(edge).weight;
        let item = match *self.edge_kinds.get(edge.0)? {
            EdgeKind::Wait { stop } => ItineraryItem::Wait {
                stop_name: self.catalogue.stop(stop).name.clone(),
                time,
            },
            EdgeKind::Ride { bus, span } => ItineraryItem::Bus {
                bus_name: self.catalogue.bus(bus).name.clone(),
                span_count: span,
                time,
            },
        };
        Some(item)
    }
}
