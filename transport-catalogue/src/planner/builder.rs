//! Routing graph construction.
//!
//! Every stop becomes two vertices joined by a wait edge: riders arrive at
//! the arrival vertex, wait, and leave from the departure vertex. Every bus
//! contributes a ride edge from the departure vertex of each stop on its
//! cycle to the arrival vertex of every later stop on the cycle, so a ride
//! past intermediate stops is a single edge and never pays a wait there.

use tracing::debug;

use super::config::RoutingSettings;
use crate::catalogue::{CatalogueError, TransportCatalogue};
use crate::domain::{BusId, StopId};
use crate::graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};

/// The two vertices a stop is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopVertices {
    pub arrival: VertexId,
    pub departure: VertexId,
}

impl StopVertices {
    fn for_stop(stop: StopId) -> Self {
        Self {
            arrival: VertexId(2 * stop.index()),
            departure: VertexId(2 * stop.index() + 1),
        }
    }
}

/// What an edge of the routing graph means to a rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Waiting at a stop for the next bus.
    Wait { stop: StopId },
    /// Riding a bus for `span` consecutive stop-to-stop hops.
    Ride { bus: BusId, span: usize },
}

/// A routing graph together with the lookups needed to interpret it.
#[derive(Debug, Clone)]
pub struct RoutingGraph {
    pub graph: DirectedWeightedGraph<f64>,
    /// Indexed by `StopId`.
    pub vertices: Vec<StopVertices>,
    /// Indexed by `EdgeId`.
    pub edge_kinds: Vec<EdgeKind>,
}

impl RoutingGraph {
    /// Build the routing graph for a fully loaded catalogue.
    ///
    /// Edge weights are minutes: the configured wait time for wait edges,
    /// and the accumulated road distance over the configured speed for
    /// ride edges.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::MissingDistance`] if two consecutive stops
    /// of some bus have no road distance.
    pub fn build(
        catalogue: &TransportCatalogue,
        settings: &RoutingSettings,
    ) -> Result<Self, CatalogueError> {
        let stop_count = catalogue.stops().len();
        let mut routing = RoutingGraph {
            graph: DirectedWeightedGraph::new(2 * stop_count),
            vertices: Vec::with_capacity(stop_count),
            edge_kinds: Vec::new(),
        };

        for index in 0..stop_count {
            let stop = StopId(index);
            let vertices = StopVertices::for_stop(stop);
            routing.vertices.push(vertices);
            routing.push_edge(
                vertices.arrival,
                vertices.departure,
                settings.bus_wait_time,
                EdgeKind::Wait { stop },
            );
        }

        for (index, bus) in catalogue.buses().iter().enumerate() {
            let id = BusId(index);
            let stops = &bus.stops;
            for board in 0..stops.len() {
                let mut meters = 0.0;
                for alight in board + 1..stops.len() {
                    meters += catalogue.distance(stops[alight - 1], stops[alight])?;
                    routing.push_edge(
                        routing.vertices[stops[board].index()].departure,
                        routing.vertices[stops[alight].index()].arrival,
                        settings.travel_minutes(meters),
                        EdgeKind::Ride {
                            bus: id,
                            span: alight - board,
                        },
                    );
                }
            }
        }

        debug!(
            vertices = routing.graph.vertex_count(),
            edges = routing.graph.edge_count(),
            "Built routing graph"
        );
        Ok(routing)
    }

    fn push_edge(&mut self, from: VertexId, to: VertexId, weight: f64, kind: EdgeKind) -> EdgeId {
        let id = self.graph.add_edge(Edge { from, to, weight });
        self.edge_kinds.push(kind);
        id
    }

    /// Vertices of a stop.
    pub fn stop_vertices(&self, stop: StopId) -> Option<StopVertices> {
        self.vertices.get(stop.index()).copied()
    }

    /// Metadata of an edge.
    pub fn edge_kind(&self, edge: EdgeId) -> Option<EdgeKind> {
        self.edge_kinds.get(edge.0).copied()
    }
}
